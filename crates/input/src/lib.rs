//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`]. Each key press
//! is one action; there is no auto-repeat handling of our own.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
