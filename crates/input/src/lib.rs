//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::ScoreAction`]s. The mapping
//! is stateless: whether a strike or spare is legal is decided by the game.

pub mod map;

pub use tui_bowling_types as types;

pub use map::{handle_key_event, should_quit};
