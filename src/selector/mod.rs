//! Model mention selector.
//!
//! A dropdown that lists every mentionable model grouped by provider, with a
//! pinned group on top, clamped keyboard navigation and a guard against
//! mentioning the same model twice.
//!
//! - `menu` - Builds the grouped, flattened menu from providers and pins
//! - `pins` - The ordered pinned-model set
//! - `trigger` - Injected handle used to request opening the menu
//! - `state` - The selector widget state machine

mod menu;
mod pins;
mod state;
mod trigger;

pub use menu::{Menu, MenuItem, MenuRow};
pub use pins::PinnedModels;
pub use state::{MentionSelector, SelectorOutcome};
pub use trigger::{OpenSignal, OpenTrigger, open_channel};
