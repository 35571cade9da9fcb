//! Mention dropdown component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::app::ClickRegion;
use crate::events::Action;
use crate::picker::Picker;
use crate::selector::{MentionSelector, MenuItem, MenuRow};
use crate::tui::interaction::{InteractionRegistry, InteractiveRegion};
use crate::tui::theme::*;

use super::{BACKDROP_PRIORITY, MENU_ITEM_PRIORITY, MENU_PRIORITY, PIN_PRIORITY, truncate};

const MENU_WIDTH: u16 = 56;
/// Columns reserved at the end of a row for the pin marker
const PIN_WIDTH: u16 = 3;

/// Render the open dropdown just above `anchor`, kept inside `bounds`.
pub fn render_mention_menu(
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    selector: &mut MentionSelector,
    interactions: &mut InteractionRegistry,
) {
    if !selector.is_open() {
        return;
    }

    let width = MENU_WIDTH.min(bounds.width);
    let height = (selector.preferred_rows() as u16 + 2).min(anchor.y.saturating_sub(bounds.y));
    if width <= PIN_WIDTH + 2 || height <= 2 {
        return;
    }
    let x = anchor.x.min(bounds.x + bounds.width - width);
    let y = anchor.y - height;
    let menu_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, menu_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_MINT))
        .title_bottom(Line::from(vec![
            Span::styled(" ↑/↓ ", Style::new().fg(TEXT_WHITE)),
            Span::styled("move · ", Style::new().fg(TEXT_DIM)),
            Span::styled("Tab ", Style::new().fg(TEXT_WHITE)),
            Span::styled("pin · ", Style::new().fg(TEXT_DIM)),
            Span::styled("Esc ", Style::new().fg(TEXT_WHITE)),
            Span::styled("close ", Style::new().fg(TEXT_DIM)),
        ]))
        .style(Style::new().bg(Color::Black));
    let inner = block.inner(menu_area);
    selector.set_viewport_height(inner.height as usize);

    // Backdrop closes the menu, the menu body swallows clicks and scrolls
    interactions.register(
        InteractiveRegion::clickable("backdrop", region(bounds), Action::CloseMentionMenu)
            .with_priority(BACKDROP_PRIORITY),
    );
    interactions.register(
        InteractiveRegion::interactive(
            "mention_menu",
            region(menu_area),
            Action::None,
            Action::ScrollMentionMenu(-1),
            Action::ScrollMentionMenu(1),
        )
        .with_priority(MENU_PRIORITY),
    );

    let rows = selector.menu().rows();
    let mut lines: Vec<Line> = vec![];

    for (offset, row) in rows
        .iter()
        .skip(selector.scroll_offset())
        .take(inner.height as usize)
        .enumerate()
    {
        let row_y = inner.y + offset as u16;
        match row {
            MenuRow::Group(group) => {
                lines.push(Line::styled(
                    format!(" {}", truncate(&group.label, inner.width as usize - 1)),
                    Style::new().fg(TEXT_DIM),
                ));
            }
            MenuRow::Item { index, item } => {
                let is_selected = *index == selector.selected_index();
                lines.push(item_line(item, is_selected, inner.width));

                interactions.register(
                    InteractiveRegion::clickable(
                        "mention_item",
                        ClickRegion::new(inner.x, row_y, inner.width - PIN_WIDTH, 1),
                        Action::ClickMentionItem(*index),
                    )
                    .with_priority(MENU_ITEM_PRIORITY),
                );
                interactions.register(
                    InteractiveRegion::clickable(
                        "mention_pin",
                        ClickRegion::new(inner.x + inner.width - PIN_WIDTH, row_y, PIN_WIDTH, 1),
                        Action::ClickPin(item.uniq_id()),
                    )
                    .with_priority(PIN_PRIORITY),
                );
            }
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), menu_area);

    if selector.menu().row_count() > inner.height as usize {
        let mut state = ScrollbarState::new(selector.menu().row_count())
            .position(selector.scroll_offset());
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            menu_area,
            &mut state,
        );
    }
}

fn region(area: Rect) -> ClickRegion {
    ClickRegion::new(area.x, area.y, area.width, area.height)
}

/// One item row: cursor, avatar, label, tags, mentioned mark, pin marker.
fn item_line(item: &MenuItem, is_selected: bool, width: u16) -> Line<'static> {
    let cursor = if is_selected { "▸ " } else { "  " };

    let label_style = if item.mentioned {
        Style::new().fg(TEXT_DIM)
    } else if is_selected {
        Style::new().fg(TEXT_WHITE).bold()
    } else {
        Style::new().fg(TEXT_WHITE)
    };

    let tags: String = item
        .model
        .capabilities
        .iter()
        .map(|c| format!(" {}", c.tag()))
        .collect();
    let check = if item.mentioned { " ✓" } else { "" };

    // cursor(2) + avatar(4) + pin marker
    let fixed = 2 + 4 + PIN_WIDTH as usize;
    let room = (width as usize).saturating_sub(fixed + tags.chars().count() + check.chars().count());
    let label = truncate(&item.label(), room.max(1));
    let used = fixed + label.chars().count() + tags.chars().count() + check.chars().count();
    let padding = (width as usize).saturating_sub(used);

    let (pin, pin_style) = if item.pinned {
        (" ● ", Style::new().fg(ACCENT_GOLD))
    } else {
        (" ○ ", Style::new().fg(TEXT_DIM))
    };

    let line = Line::from(vec![
        Span::styled(cursor, Style::new().fg(ACCENT_MINT)),
        Span::styled(format!("[{}] ", item.model.avatar()), Style::new().fg(ACCENT_CORAL)),
        Span::styled(label, label_style),
        Span::styled(tags, Style::new().fg(ACCENT_LIGHT_BLUE)),
        Span::styled(check, Style::new().fg(ACCENT_MINT)),
        Span::raw(" ".repeat(padding)),
        Span::styled(pin, pin_style),
    ]);

    if is_selected {
        line.style(Style::new().bg(HIGHLIGHT_BG))
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Model, ModelCapability};

    fn item(pinned: bool, mentioned: bool) -> MenuItem {
        let model = Model::new("m1", "Alpha", "p1").with_capabilities(vec![ModelCapability::Vision]);
        MenuItem {
            key: model.uniq_id(),
            model,
            provider_name: "Provider".to_string(),
            pinned,
            mentioned,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_item_line_fills_width() {
        let line = item_line(&item(false, false), false, 40);
        let text = text(&line);
        assert_eq!(text.chars().count(), 40);
        assert!(text.starts_with("  [A] Alpha vision"));
        assert!(text.ends_with(" ○ "));
    }

    #[test]
    fn test_pinned_and_mentioned_markers() {
        let line = item_line(&item(true, true), true, 40);
        let text = text(&line);
        assert!(text.contains("Alpha | Provider"));
        assert!(text.contains('✓'));
        assert!(text.ends_with(" ● "));
    }
}
