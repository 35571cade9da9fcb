//! Central event handler that coordinates keyboard and mouse events.

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard, mouse, paste) and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Vec<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => vec![handle_key_event(app, *key)],
            Event::Mouse(mouse) => vec![handle_mouse_event(app, *mouse)],
            Event::Paste(text) if app.input_mode() == crate::app::InputMode::Compose => text
                .chars()
                .filter(|c| !c.is_control())
                .map(Action::InputChar)
                .collect(),
            _ => vec![],
        }
    }
}
