use arrayvec::ArrayVec;
use serde::Serialize;

use crate::frame::{Frame, FrameState};
use crate::types::{FRAME_COUNT, MAX_ROLLS_PER_FRAME};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    pub index: usize,
    pub state: FrameState,
    /// Every recorded roll, bonus rolls included.
    pub pins: ArrayVec<u8, MAX_ROLLS_PER_FRAME>,
    pub marks: ArrayVec<char, MAX_ROLLS_PER_FRAME>,
    pub frame_score: Option<u16>,
    pub partial_score: Option<u16>,
}

impl FrameSnapshot {
    pub fn new(frame: &Frame, partial_score: Option<u16>) -> Self {
        Self {
            index: frame.index(),
            state: frame.state(),
            pins: frame.rolls().iter().map(|r| r.pins()).collect(),
            marks: frame.marks(),
            frame_score: frame.frame_score(),
            partial_score,
        }
    }

    pub fn started(&self) -> bool {
        self.state != FrameState::NotStarted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub frames: [FrameSnapshot; FRAME_COUNT],
    pub score: Option<u16>,
    pub max_possible_score: u16,
    pub current_frame: Option<usize>,
    pub pins_left: u8,
    pub complete: bool,
    pub roll_count: u32,
}

impl GameSnapshot {
    /// Score to display: zero until the first frame is scored.
    pub fn display_score(&self) -> u16 {
        self.score.unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        crate::Game::new().snapshot()
    }
}
