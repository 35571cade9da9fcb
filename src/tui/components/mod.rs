//! UI components for the TUI.
//!
//! - `transcript` - Sent messages with their mentions
//! - `composer` - Mention chips and the message input
//! - `toolbar` - Composer toolbar with the `@` mention trigger
//! - `mention_menu` - The grouped model dropdown
//! - `help_popup` - Help overlay with keybindings

mod composer;
mod help_popup;
mod mention_menu;
mod toolbar;
mod transcript;

pub use composer::render_composer;
pub use help_popup::render_help_popup;
pub use mention_menu::render_mention_menu;
pub use toolbar::render_toolbar;
pub use transcript::render_transcript;

/// Click outside the open dropdown
pub const BACKDROP_PRIORITY: i32 = 5;
/// Dropdown body (group headers, scroll wheel)
pub const MENU_PRIORITY: i32 = 10;
/// Dropdown rows and the toolbar trigger
pub const MENU_ITEM_PRIORITY: i32 = 20;
/// Pin marker at the end of a dropdown row
pub const PIN_PRIORITY: i32 = 30;

/// Truncate to `max` chars, ending with an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
