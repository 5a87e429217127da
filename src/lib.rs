//! TUI Bowling (workspace facade crate).
//!
//! Re-exports the member crates as `tui_bowling::{core,input,term,types}` and
//! hosts the command-line handling shared by the binary and its tests.

pub mod cli;

pub use tui_bowling_core as core;
pub use tui_bowling_input as input;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;
