//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

const COMPOSER_KEYS: &[(&str, &str)] = &[
    ("@", "Mention models"),
    ("Enter", "Send message"),
    ("Backspace", "Delete / remove last mention"),
    ("Ctrl+U", "Clear input"),
    ("Ctrl+C", "Clear input, quit when empty"),
    ("F1", "Show this help"),
];

const MENU_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "Move highlight"),
    ("Home/End", "First / last model"),
    ("Enter", "Mention highlighted model"),
    ("Tab", "Pin / unpin highlighted model"),
    ("Esc", "Close"),
];

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    let popup_width = 50u16.min(area.width);
    let popup_height = (COMPOSER_KEYS.len() + MENU_KEYS.len() + 8) as u16;
    let popup_height = popup_height.min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];
    section(&mut lines, "Composer", COMPOSER_KEYS);
    lines.push(Line::raw(""));
    section(&mut lines, "Mention menu", MENU_KEYS);
    lines.push(Line::raw(""));
    lines.push(Line::styled("Press any key to close", Style::new().fg(TEXT_DIM).italic()));

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(Style::new().fg(ACCENT_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_MINT))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

fn section(lines: &mut Vec<Line<'static>>, title: &'static str, keys: &[(&'static str, &'static str)]) {
    lines.push(Line::styled(title, Style::new().fg(ACCENT_LIGHT_BLUE).bold()));
    for (key, description) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<11}", key), Style::new().fg(TEXT_WHITE)),
            Span::styled(*description, Style::new().fg(TEXT_DIM)),
        ]));
    }
}
