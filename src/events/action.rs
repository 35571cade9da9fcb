//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

use crossterm::event::KeyEvent;

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Composer input ===
    /// Add character to input buffer
    InputChar(char),
    /// Delete character before cursor (or the last mention on an empty line)
    InputBackspace,
    /// Move cursor left
    InputLeft,
    /// Move cursor right
    InputRight,
    /// Move cursor to start
    InputHome,
    /// Move cursor to end
    InputEnd,
    /// Clear input buffer
    ClearInput,
    /// Send the message with its mentions
    SubmitMessage,
    /// Remove the mention chip at index
    RemoveMention(usize),

    // === Mention selector ===
    /// Ask the selector to open through its trigger
    RequestMentionMenu,
    /// Toolbar button clicked
    ToggleMentionMenu,
    /// Click outside the open dropdown
    CloseMentionMenu,
    /// Scroll the dropdown viewport by n rows
    ScrollMentionMenu(isize),
    /// Key press routed to the open dropdown
    SelectorKey(KeyEvent),
    /// Click on the dropdown item at flattened index
    ClickMentionItem(usize),
    /// Click on the pin marker of a model uniq id
    ClickPin(String),

    // === No-op ===
    /// No action to take
    None,
}
