//! Report module - the per-frame text report
//!
//! Every game reports exactly ten lines, one per frame:
//!
//! ```text
//! Frame <n>:[ <mark>(, <mark>)*][, score: <partial>]
//! ```
//!
//! Marks are the frame's own deliveries (`X` strike, `/` spare, otherwise the
//! pin count). The score suffix appears only once the frame's partial score is
//! fully determined. A frame that has not been reached is a bare `Frame <n>:`.

use crate::frame::Frame;

/// Format one report line for a frame and its partial score.
pub fn frame_line(frame: &Frame, partial_score: Option<u16>) -> String {
    let mut line = format!("Frame {}:", frame.index());
    for (i, mark) in frame.marks().iter().enumerate() {
        line.push_str(if i == 0 { " " } else { ", " });
        line.push(*mark);
    }
    if let Some(score) = partial_score {
        line.push_str(&format!(", score: {score}"));
    }
    line
}
