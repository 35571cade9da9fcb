//! Event handling module for keyboard and mouse events.
//!
//! Terminal events are translated into [`Action`]s, which the [`App`](crate::app::App)
//! applies to its state.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
