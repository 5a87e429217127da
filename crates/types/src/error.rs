//! Scoring error types.

use thiserror::Error;

/// Errors reported synchronously by roll construction and `Game::add`.
///
/// A rejected roll never changes game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BowlingError {
    /// The pin count is negative or exceeds the pins still standing.
    #[error("invalid roll: {pins} pins with {standing} standing")]
    InvalidRoll {
        /// The pin count that was requested.
        pins: i32,
        /// Pins standing at the time of the roll.
        standing: u8,
    },

    /// All ten frames are closed.
    #[error("game complete: no frame accepts another roll")]
    GameComplete,

    /// A strike requested on a partial rack, or a spare on a fresh one.
    #[error("cannot mark '{mark}' with {standing} pins standing")]
    IllegalMark {
        /// `X` or `/`.
        mark: char,
        /// Pins standing at the time of the request.
        standing: u8,
    },

    /// Text that is neither a pin count nor a strike mark.
    #[error("cannot parse roll: {0:?}")]
    UnparsableRoll(String),
}
