//! Terminal score-sheet module.
//!
//! A small rendering layer for the interactive score keeper. The view is
//! pure: it maps a [`core::GameSnapshot`] into a framebuffer that can be
//! asserted on in tests. Only [`TerminalRenderer`] performs I/O.

pub mod fb;
pub mod renderer;
pub mod score_sheet;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use score_sheet::{AnchorY, ScoreSheetView, Viewport, SHEET_WIDTH, VIEW_HEIGHT};
