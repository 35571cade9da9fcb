//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};
use crate::selector::MentionSelector;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    match app.input_mode() {
        InputMode::Compose => handle_compose_mode(app, key),
        // The open dropdown takes its navigation keys, typing still reaches the input
        InputMode::MentionMenu if MentionSelector::captures_key(&key) => Action::SelectorKey(key),
        InputMode::MentionMenu => handle_compose_mode(app, key),
        InputMode::Help => Action::CloseHelp,
    }
}

fn handle_compose_mode(app: &App, key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            if app.input.is_empty() {
                Action::Quit
            } else {
                Action::ClearInput
            }
        }
        KeyCode::Char('q') if ctrl => Action::Quit,
        KeyCode::Char('a') if ctrl => Action::InputHome,
        KeyCode::Char('e') if ctrl => Action::InputEnd,
        KeyCode::Char('u') if ctrl => Action::ClearInput,

        // `@` pops the selector open instead of being typed
        KeyCode::Char('@') if app.selector.is_visible() && !app.selector.is_open() => {
            Action::RequestMentionMenu
        }
        KeyCode::Char(c) if !ctrl => Action::InputChar(c),

        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,
        KeyCode::Enter => Action::SubmitMessage,
        KeyCode::F(1) => Action::OpenHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translator;
    use crate::model::{Model, Provider};
    use crate::selector::{MentionSelector, open_channel};

    fn app(models: Vec<Model>) -> App {
        let provider = models
            .into_iter()
            .fold(Provider::new("p1", "p1", false), |p, m| p.with_model(m));
        let (trigger, _signal) = open_channel();
        App::new(MentionSelector::new(vec![provider], Translator::default(), 8), trigger)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_at_requests_menu() {
        let app = app(vec![Model::new("m1", "Alpha", "")]);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('@'))), Action::RequestMentionMenu);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('x'))), Action::InputChar('x'));
    }

    #[test]
    fn test_at_is_typed_without_models() {
        let app = app(vec![]);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('@'))), Action::InputChar('@'));
    }

    #[test]
    fn test_open_menu_captures_keys() {
        let mut app = app(vec![Model::new("m1", "Alpha", "")]);
        app.selector.open();
        let key = press(KeyCode::Down);
        assert_eq!(handle_key_event(&app, key), Action::SelectorKey(key));
    }

    #[test]
    fn test_typing_reaches_input_while_menu_open() {
        let mut app = app(vec![Model::new("m1", "Alpha", "")]);
        app.selector.open();
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('x'))), Action::InputChar('x'));
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('@'))), Action::InputChar('@'));
        assert_eq!(handle_key_event(&app, press(KeyCode::Backspace)), Action::InputBackspace);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&app, ctrl_c), Action::Quit);
        let esc = press(KeyCode::Esc);
        assert_eq!(handle_key_event(&app, esc), Action::SelectorKey(esc));
    }

    #[test]
    fn test_ctrl_c_clears_then_quits() {
        let mut app = app(vec![]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        app.input.push_str("draft");
        assert_eq!(handle_key_event(&app, ctrl_c), Action::ClearInput);
        app.input.clear();
        assert_eq!(handle_key_event(&app, ctrl_c), Action::Quit);
    }
}
