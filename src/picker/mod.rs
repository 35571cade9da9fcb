//! Generic picker module
//!
//! Provides a trait for list-based selection with clamped keyboard navigation.

mod traits;

pub use traits::Picker;
