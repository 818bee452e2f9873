//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::DonutAction`] mode
//! switches. The animation takes no other input.

pub mod map;

pub use tui_donut_types as types;

pub use map::{map_key, should_quit};
