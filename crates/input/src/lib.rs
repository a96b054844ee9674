//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. There is no input
//! queue and no repeat handling: every delivered key press maps to at most one action.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
