//! Composer component - mention chips and message input.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, ClickRegion, InputMode};
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

use super::truncate;

/// Render mention chips in `chips_area` and the input box in `input_area`.
pub fn render_composer(frame: &mut Frame, chips_area: Rect, input_area: Rect, app: &mut App) {
    // Chips: clicking one removes the mention
    let mut spans: Vec<Span> = vec![];
    let mut x = chips_area.x;
    for (i, model) in app.mentioned.iter().enumerate() {
        let label = format!("[@{} ×]", truncate(&model.name, 20));
        let width = label.chars().count() as u16;

        app.interactions.register(InteractiveRegion::clickable(
            "mention_chip",
            ClickRegion::new(x, chips_area.y, width, 1),
            Action::RemoveMention(i),
        ));

        spans.push(Span::styled(label, Style::new().fg(ACCENT_GOLD)));
        spans.push(Span::raw(" "));
        x = x.saturating_add(width + 1);
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chips_area);

    // Input box
    let focused = app.input_mode() == InputMode::Compose;
    let border_style = if focused {
        Style::new().fg(ACCENT_MINT)
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(input_area);

    // Scroll horizontally so the cursor stays inside the box
    let visible = inner.width.saturating_sub(1) as usize;
    let skip = app.cursor.saturating_sub(visible);
    let shown: String = app.input.chars().skip(skip).take(visible + 1).collect();

    let paragraph = Paragraph::new(Line::styled(shown, Style::new().fg(TEXT_WHITE))).block(block);
    frame.render_widget(paragraph, input_area);

    if focused {
        let cursor_x = inner.x + (app.cursor - skip) as u16;
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}
