//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate contains the bowling rules: how rolls are grouped into frames,
//! how strikes and spares collect bonus pins, and how partial scores build up
//! frame by frame. It has **no I/O**; callers feed rolls in and read scores,
//! reports, or snapshots out.
//!
//! # Module Structure
//!
//! - [`frame`]: per-frame state machine (records, forwards, scores)
//! - [`game`]: ten-frame chain, validation, and the public facade
//! - [`accumulator`]: optional-score and report-line accumulators
//! - [`report`]: the fixed per-frame text report format
//! - [`snapshot`]: serializable view of a game for renderers
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::Game;
//! use tui_bowling_types::Roll;
//!
//! let mut game = Game::new();
//! for pins in [6, 4, 3] {
//!     game.add(Roll::new(pins).unwrap()).unwrap();
//! }
//!
//! // The spare in frame 1 took the 3 as its bonus.
//! assert_eq!(game.score(), Some(13));
//! assert_eq!(game.report().lines().next(), Some("Frame 1: 6, /, score: 13"));
//! assert_eq!(game.pins_left(), 7);
//! ```

pub mod accumulator;
pub mod frame;
pub mod game;
pub mod report;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use accumulator::{ReportAccumulator, ScoreAccumulator};
pub use frame::{Forward, Frame, FrameState};
pub use game::Game;
pub use snapshot::{FrameSnapshot, GameSnapshot};
