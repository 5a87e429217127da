//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain values with no I/O, making them usable in any context
//! (scoring core, terminal rendering, CLI parsing).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_PINS` | 10 | Pins in a full rack |
//! | `FRAME_COUNT` | 10 | Frames in one game |
//! | `MAX_ROLLS_PER_FRAME` | 3 | Deliveries a frame can record (including bonus rolls) |
//! | `PERFECT_SCORE` | 300 | Twelve strikes in a row |
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{Roll, ScoreAction, MAX_PINS};
//!
//! let roll = Roll::new(7).unwrap();
//! assert_eq!(roll.pins(), 7);
//! assert_eq!(roll.pins_left(), 3);
//!
//! // Strikes parse from their score-sheet mark
//! let strike: Roll = "X".parse().unwrap();
//! assert!(strike.is_strike());
//! assert_eq!(strike.pins(), MAX_PINS);
//!
//! // Out-of-range pin counts are rejected at construction
//! assert!(Roll::new(11).is_err());
//!
//! // Parse a key-press action
//! assert_eq!(ScoreAction::from_str("spare"), Some(ScoreAction::Spare));
//! ```

use std::fmt;
use std::str::FromStr;

pub mod error;

pub use error::BowlingError;

/// Pins in a full rack.
pub const MAX_PINS: u8 = 10;

/// Frames in one game.
pub const FRAME_COUNT: usize = 10;

/// Rolls a frame can record: two own deliveries plus at most one bonus slot
/// (or the third ball of the tenth frame).
pub const MAX_ROLLS_PER_FRAME: usize = 3;

/// Score of twelve consecutive strikes.
pub const PERFECT_SCORE: u16 = 300;

/// One delivery: the number of pins knocked down.
///
/// A `Roll` is immutable and always holds a value in `0..=MAX_PINS`.
/// Whether it is valid *in context* (pins still standing) is checked by the
/// game when the roll is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Roll(u8);

impl Roll {
    /// Create a roll, rejecting pin counts above [`MAX_PINS`].
    pub fn new(pins: u8) -> Result<Self, BowlingError> {
        if pins > MAX_PINS {
            return Err(BowlingError::InvalidRoll {
                pins: i32::from(pins),
                standing: MAX_PINS,
            });
        }
        Ok(Self(pins))
    }

    /// All ten pins.
    pub const fn strike() -> Self {
        Self(MAX_PINS)
    }

    /// Build a roll from a pin count that is clamped into range.
    pub const fn saturating(pins: u8) -> Self {
        if pins > MAX_PINS {
            Self(MAX_PINS)
        } else {
            Self(pins)
        }
    }

    pub const fn pins(&self) -> u8 {
        self.0
    }

    pub const fn is_strike(&self) -> bool {
        self.0 == MAX_PINS
    }

    /// Pins left standing on a fresh rack after this roll.
    pub const fn pins_left(&self) -> u8 {
        MAX_PINS - self.0
    }
}

impl TryFrom<i32> for Roll {
    type Error = BowlingError;

    fn try_from(pins: i32) -> Result<Self, Self::Error> {
        match u8::try_from(pins) {
            Ok(p) if p <= MAX_PINS => Ok(Self(p)),
            _ => Err(BowlingError::InvalidRoll {
                pins,
                standing: MAX_PINS,
            }),
        }
    }
}

impl FromStr for Roll {
    type Err = BowlingError;

    /// Accepts a decimal pin count or the strike mark (`X`/`x`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("x") {
            return Ok(Self::strike());
        }
        let pins = s
            .parse::<i32>()
            .map_err(|_| BowlingError::UnparsableRoll(s.to_string()))?;
        Self::try_from(pins)
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Actions a scorer can request, from a key press or a script.
///
/// `Strike` and `Spare` are resolved against the pins currently standing,
/// so the caller does not need to know how many pins are left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAction {
    /// Knock down this many pins
    Knock(u8),
    /// All ten pins on a fresh rack
    Strike,
    /// Clear whatever is still standing after the first ball
    Spare,
    /// Start a new game
    Restart,
}

impl ScoreAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::ScoreAction;
    ///
    /// assert_eq!(ScoreAction::from_str("strike"), Some(ScoreAction::Strike));
    /// assert_eq!(ScoreAction::from_str("/"), Some(ScoreAction::Spare));
    /// assert_eq!(ScoreAction::from_str("7"), Some(ScoreAction::Knock(7)));
    /// assert_eq!(ScoreAction::from_str("11"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strike" | "x" => Some(ScoreAction::Strike),
            "spare" | "/" => Some(ScoreAction::Spare),
            "restart" => Some(ScoreAction::Restart),
            other => other
                .parse::<u8>()
                .ok()
                .filter(|&p| p <= MAX_PINS)
                .map(ScoreAction::Knock),
        }
    }

    /// Convert to lowercase string; `Knock` reports its kind only
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreAction::Knock(_) => "knock",
            ScoreAction::Strike => "strike",
            ScoreAction::Spare => "spare",
            ScoreAction::Restart => "restart",
        }
    }
}
