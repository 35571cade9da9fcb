//! Transcript of sent messages.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::tui::theme::*;

/// Render sent messages, newest at the bottom.
pub fn render_transcript(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![];

    if app.sent.is_empty() {
        lines.push(Line::styled(
            "  Type a message, press @ to mention models.",
            Style::new().fg(TEXT_DIM).italic(),
        ));
    }

    for message in &app.sent {
        let mut spans = vec![Span::styled("› ", Style::new().fg(ACCENT_MINT))];
        for model in &message.mentions {
            spans.push(Span::styled(
                format!("@{} ", model.name),
                Style::new().fg(ACCENT_GOLD).bold(),
            ));
        }
        spans.push(Span::styled(message.text.as_str(), Style::new().fg(TEXT_WHITE)));
        lines.push(Line::from(spans));
    }

    // Keep the newest messages in view
    let overflow = lines.len().saturating_sub(area.height as usize);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((overflow as u16, 0));
    frame.render_widget(paragraph, area);
}
