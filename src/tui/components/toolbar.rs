//! Toolbar component with the mention trigger.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::i18n::TRIGGER_TOOLTIP_KEY;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

use super::MENU_ITEM_PRIORITY;

const TRIGGER_LABEL: &str = " @ ";

/// Render the toolbar and return the trigger's area.
///
/// Without any mentionable model the trigger is not drawn at all.
pub fn render_toolbar(frame: &mut Frame, area: Rect, app: &mut App) -> Option<Rect> {
    if !app.selector.is_visible() || area.width == 0 {
        return None;
    }

    let trigger_width = (TRIGGER_LABEL.len() as u16).min(area.width);
    let trigger_area = Rect::new(area.x, area.y, trigger_width, 1);

    let trigger_style = if app.selector.is_open() {
        Style::new().fg(Color::Black).bg(ACCENT_MINT).bold()
    } else {
        Style::new().fg(ACCENT_MINT).bold()
    };

    let mut spans = vec![Span::styled(TRIGGER_LABEL, trigger_style)];
    if !app.selector.is_open() {
        spans.push(Span::styled(
            format!(" {}", app.selector.translator().t(TRIGGER_TOOLTIP_KEY)),
            Style::new().fg(TEXT_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    app.interactions.register(
        InteractiveRegion::clickable(
            "mention_trigger",
            ClickRegion::new(trigger_area.x, trigger_area.y, trigger_area.width, 1),
            Action::ToggleMentionMenu,
        )
        .with_priority(MENU_ITEM_PRIORITY),
    );

    Some(trigger_area)
}
