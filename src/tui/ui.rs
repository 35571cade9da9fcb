use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};
use super::components::{
    render_composer, render_help_popup, render_mention_menu, render_toolbar, render_transcript,
};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    // Main vertical layout: transcript, chips, input, toolbar, hotkeys
    let layout = Layout::vertical([
        Constraint::Min(0),    // Transcript
        Constraint::Length(1), // Mention chips
        Constraint::Length(3), // Input box
        Constraint::Length(1), // Toolbar
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_transcript(frame, layout[0], app);
    render_composer(frame, layout[1], layout[2], app);
    let trigger = render_toolbar(frame, layout[3], app);
    render_hotkeys(frame, layout[4], app);

    // Dropdown opens upwards from the trigger, over everything above it
    if let Some(trigger) = trigger {
        render_mention_menu(frame, trigger, area, &mut app.selector, &mut app.interactions);
    }

    if app.input_mode() == InputMode::Help {
        render_help_popup(frame, area);
    }
}

fn render_hotkeys(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let hints: &[(&str, &str)] = match app.input_mode() {
        InputMode::Compose => &[("@", "mention"), ("enter", "send"), ("F1", "help"), ("ctrl+c", "quit")],
        InputMode::MentionMenu => &[("↑/↓", "navigate"), ("enter", "select"), ("tab", "pin"), ("esc", "close")],
        InputMode::Help => &[("any key", "close")],
    };

    let mut spans: Vec<Span> = vec![];
    for (i, (key, description)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::new().fg(TEXT_DIM)));
        }
        spans.push(Span::styled(*key, Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(format!(" {}", description), Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Action;
    use crate::i18n::Translator;
    use crate::model::{Model, Provider};
    use crate::selector::{MentionSelector, open_channel};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let providers = vec![
            Provider::new("p1", "Provider One", false)
                .with_model(Model::new("m1", "Alpha", ""))
                .with_model(Model::new("m2", "Beta", "")),
        ];
        let (trigger, _signal) = open_channel();
        App::new(MentionSelector::new(providers, Translator::default(), 8), trigger)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_open_menu_registers_items() {
        let mut app = app();
        app.selector.open();

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Provider One"));
        assert!(text.contains("Alpha"));

        // Toolbar is row 18; the menu (header + 2 items + borders) sits on rows 13..=17
        let header_row = 14;
        assert_eq!(app.interactions.handle_click(5, header_row + 1), Action::ClickMentionItem(0));
        assert_eq!(app.interactions.handle_click(5, header_row + 2), Action::ClickMentionItem(1));
        assert_eq!(app.interactions.handle_click(5, header_row), Action::None);
        assert_eq!(app.interactions.handle_click(1, 18), Action::ToggleMentionMenu);
        assert_eq!(app.interactions.handle_click(59, 0), Action::CloseMentionMenu);
    }

    #[test]
    fn test_trigger_hidden_without_models() {
        let (trigger, _signal) = open_channel();
        let mut app = App::new(MentionSelector::new(vec![], Translator::default(), 8), trigger);

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        assert!(!screen(&terminal).contains("Mention models"));
        assert_eq!(app.interactions.handle_click(1, 18), Action::None);
    }

    #[test]
    fn test_short_terminal_scrolls_highlight_into_view() {
        let provider = (0..20).fold(Provider::new("p1", "Provider One", false), |p, i| {
            p.with_model(Model::new(format!("m{:02}", i), format!("Model{:02}", i), ""))
        });
        let (trigger, _signal) = open_channel();
        let mut app = App::new(
            MentionSelector::new(vec![provider], Translator::default(), 16),
            trigger,
        );
        app.selector.open();

        // Toolbar on row 12 leaves 12 rows above it: 10 menu rows plus borders
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        for _ in 0..12 {
            app.selector.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("▸ [M] Model12"), "highlighted model not on screen");
        assert_eq!(app.selector.visible_rows(), 10);

        // Moving on after the first frame also uses the clipped height
        app.selector.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        assert!(screen(&terminal).contains("▸ [M] Model13"));
        assert!(!screen(&terminal).contains("Model03"));
    }
}
