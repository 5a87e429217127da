//! Game module - the frame chain and scoring facade
//!
//! The game owns ten frames in a fixed array. Every roll enters at the head of
//! the chain; a frame that has already received its own deliveries records the
//! roll as a bonus (if it still needs one) and hands it to the frame at
//! `index + 1`. Past the tenth frame, forwarded rolls are simply absorbed.
//!
//! Rolls are validated before the chain is touched, so a rejected roll leaves
//! the game exactly as it was.

use tracing::{debug, trace};

use crate::accumulator::{ReportAccumulator, ScoreAccumulator};
use crate::frame::{Forward, Frame};
use crate::report::frame_line;
use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::{BowlingError, Roll, ScoreAction, FRAME_COUNT};

/// A single-player game of ten-pin bowling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: [Frame; FRAME_COUNT],
    roll_count: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with ten empty frames.
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|i| Frame::new(i + 1)),
            roll_count: 0,
        }
    }

    /// Build a game by adding each roll in order.
    pub fn from_rolls<I>(rolls: I) -> Result<Self, BowlingError>
    where
        I: IntoIterator<Item = Roll>,
    {
        let mut game = Self::new();
        for roll in rolls {
            game.add(roll)?;
        }
        Ok(game)
    }

    /// Build a game from raw pin counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_core::Game;
    ///
    /// let game = Game::from_pins(&[10, 4, 3]).unwrap();
    /// assert_eq!(game.score(), Some(24));
    /// assert_eq!(game.current_frame(), Some(3));
    /// ```
    pub fn from_pins(pins: &[u8]) -> Result<Self, BowlingError> {
        let rolls = pins
            .iter()
            .map(|&p| Roll::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rolls(rolls)
    }

    /// Feed one delivery into the game.
    ///
    /// Fails with [`BowlingError::GameComplete`] once the tenth frame is closed
    /// and with [`BowlingError::InvalidRoll`] when the roll knocks down more
    /// pins than are standing.
    pub fn add(&mut self, roll: Roll) -> Result<(), BowlingError> {
        let Some(active) = self.active_index() else {
            debug!(pins = roll.pins(), "roll rejected: game complete");
            return Err(BowlingError::GameComplete);
        };

        let standing = self.frames[active].pins_left();
        if roll.pins() > standing {
            debug!(
                frame = active + 1,
                pins = roll.pins(),
                standing,
                "roll rejected: too many pins"
            );
            return Err(BowlingError::InvalidRoll {
                pins: i32::from(roll.pins()),
                standing,
            });
        }

        self.deliver(roll);
        self.roll_count += 1;
        debug!(
            frame = active + 1,
            pins = roll.pins(),
            state = self.frames[active].state().as_str(),
            score = ?self.score(),
            "roll added"
        );
        Ok(())
    }

    /// Walk the chain from the head until a frame consumes the roll.
    fn deliver(&mut self, roll: Roll) {
        for frame in self.frames.iter_mut() {
            if frame.add(roll) == Forward::Stop {
                return;
            }
            trace!(from = frame.index(), pins = roll.pins(), "roll forwarded");
        }
    }

    /// Apply a scorer action (a key press, typically).
    pub fn apply_action(&mut self, action: ScoreAction) -> Result<(), BowlingError> {
        match action {
            ScoreAction::Knock(pins) => self.add(Roll::new(pins)?),
            ScoreAction::Strike => {
                let (standing, fresh) = self.rack_for_mark()?;
                if !fresh {
                    return Err(BowlingError::IllegalMark {
                        mark: 'X',
                        standing,
                    });
                }
                self.add(Roll::strike())
            }
            ScoreAction::Spare => {
                let (standing, fresh) = self.rack_for_mark()?;
                if fresh {
                    return Err(BowlingError::IllegalMark {
                        mark: '/',
                        standing,
                    });
                }
                self.add(Roll::saturating(standing))
            }
            ScoreAction::Restart => {
                debug!(rolls = self.roll_count, "game restarted");
                *self = Self::new();
                Ok(())
            }
        }
    }

    /// Pins standing for the active ball and whether it opens the rack.
    fn rack_for_mark(&self) -> Result<(u8, bool), BowlingError> {
        let active = self.active_index().ok_or(BowlingError::GameComplete)?;
        let frame = &self.frames[active];
        Ok((frame.pins_left(), frame.rack_is_fresh()))
    }

    fn active_index(&self) -> Option<usize> {
        self.frames.iter().position(Frame::accepts_own_roll)
    }

    /// 1-based index of the frame accepting rolls; `None` once the game is over.
    pub fn current_frame(&self) -> Option<usize> {
        self.active_index().map(|i| i + 1)
    }

    pub fn is_complete(&self) -> bool {
        self.active_index().is_none()
    }

    /// Pins standing for the next delivery; 0 once the game is complete.
    pub fn pins_left(&self) -> u8 {
        self.active_index()
            .map_or(0, |i| self.frames[i].pins_left())
    }

    /// Rolls accepted so far.
    pub fn roll_count(&self) -> u32 {
        self.roll_count
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame by 1-based index.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index.checked_sub(1)?)
    }

    /// Cumulative score through each frame.
    ///
    /// A frame's entry is defined only when its own score and every earlier
    /// frame's score are fully determined.
    pub fn partial_scores(&self) -> [Option<u16>; FRAME_COUNT] {
        let mut acc = ScoreAccumulator::new();
        let mut scored = true;
        std::array::from_fn(|i| {
            if !scored {
                return None;
            }
            match self.frames[i].frame_score() {
                Some(score) => {
                    acc.add(Some(score));
                    acc.value()
                }
                None => {
                    scored = false;
                    None
                }
            }
        })
    }

    /// Partial score of a frame by 1-based index.
    pub fn partial_score(&self, index: usize) -> Option<u16> {
        self.partial_scores()
            .get(index.checked_sub(1)?)
            .copied()
            .flatten()
    }

    /// Current total: the partial score of the last fully scored frame.
    ///
    /// `None` until at least one frame is fully scored.
    pub fn score(&self) -> Option<u16> {
        self.frames
            .iter()
            .map(Frame::frame_score)
            .take_while(Option::is_some)
            .collect::<ScoreAccumulator>()
            .value()
    }

    /// Best total still reachable: every remaining delivery clears the pins
    /// that are standing (a strike whenever the rack is fresh).
    pub fn max_possible_score(&self) -> u16 {
        let mut best = self.clone();
        while let Some(active) = best.active_index() {
            let roll = Roll::saturating(best.frames[active].pins_left());
            best.deliver(roll);
        }
        best.score().unwrap_or(0)
    }

    /// Ten report lines joined with `\n`; see [`crate::report`].
    pub fn report(&self) -> String {
        let mut acc = ReportAccumulator::new();
        for (frame, partial) in self.frames.iter().zip(self.partial_scores()) {
            acc.add(frame_line(frame, partial));
        }
        acc.value()
    }

    /// Capture everything a view needs to draw the score sheet.
    pub fn snapshot(&self) -> GameSnapshot {
        let partials = self.partial_scores();
        GameSnapshot {
            frames: std::array::from_fn(|i| FrameSnapshot::new(&self.frames[i], partials[i])),
            score: self.score(),
            max_possible_score: self.max_possible_score(),
            current_frame: self.current_frame(),
            pins_left: self.pins_left(),
            complete: self.is_complete(),
            roll_count: self.roll_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameState;

    fn game(pins: &[u8]) -> Game {
        Game::from_pins(pins).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.score(), None);
        assert_eq!(game.current_frame(), Some(1));
        assert_eq!(game.pins_left(), 10);
        assert_eq!(game.roll_count(), 0);
        assert_eq!(game.max_possible_score(), 300);
        assert!(!game.is_complete());
    }

    #[test]
    fn test_one_roll_has_no_score() {
        let game = game(&[6]);
        assert_eq!(game.score(), None);
        assert_eq!(game.pins_left(), 4);
        assert_eq!(game.current_frame(), Some(1));
    }

    #[test]
    fn test_open_frames() {
        assert_eq!(game(&[6, 2]).score(), Some(8));
        assert_eq!(game(&[6, 2, 3, 2]).score(), Some(13));
        assert_eq!(game(&[6, 2, 3, 2]).current_frame(), Some(3));
    }

    #[test]
    fn test_spare_bonus() {
        let g = game(&[6, 4, 3]);
        assert_eq!(g.partial_score(1), Some(13));
        assert_eq!(g.score(), Some(13));
        assert_eq!(game(&[6, 4, 3, 2]).score(), Some(18));
    }

    #[test]
    fn test_strike_bonus() {
        let g = game(&[10, 4, 3]);
        assert_eq!(g.partial_score(1), Some(17));
        assert_eq!(g.partial_score(2), Some(24));
        assert_eq!(g.score(), Some(24));
    }

    #[test]
    fn test_bonus_roll_lands_in_two_frames() {
        let g = game(&[10, 4]);
        assert_eq!(g.frame(1).unwrap().state(), FrameState::StrikeOneBonus);
        assert_eq!(g.frame(2).unwrap().state(), FrameState::OneRollTaken);
        assert_eq!(g.frame(2).unwrap().rolls(), &[Roll::new(4).unwrap()]);
        assert_eq!(g.frame(3).unwrap().state(), FrameState::NotStarted);
    }

    #[test]
    fn test_partial_scores_stop_at_first_pending_frame() {
        let g = game(&[10, 10, 3]);
        assert_eq!(g.partial_scores()[0], Some(23));
        assert_eq!(g.partial_scores()[1], None);
        assert_eq!(g.partial_score(0), None);
        assert_eq!(g.partial_score(11), None);
    }

    #[test]
    fn test_known_full_game() {
        let g = game(&[6, 4, 6, 3, 10, 10, 5, 3, 6, 2, 7, 1, 10, 10, 4, 6, 10]);
        assert_eq!(g.score(), Some(156));
        assert!(g.is_complete());
        assert_eq!(g.current_frame(), None);
        assert_eq!(g.pins_left(), 0);
        assert_eq!(g.max_possible_score(), 156);
    }

    #[test]
    fn test_perfect_game() {
        let g = game(&[10; 12]);
        assert_eq!(g.score(), Some(300));
        assert!(g.is_complete());
    }

    #[test]
    fn test_gutter_game_scores_zero() {
        let g = game(&[0; 20]);
        assert_eq!(g.score(), Some(0));
        assert!(g.is_complete());
    }

    #[test]
    fn test_rejects_too_many_pins_without_mutation() {
        let mut g = game(&[6]);
        let before = g.clone();
        assert_eq!(
            g.add(Roll::new(5).unwrap()),
            Err(BowlingError::InvalidRoll {
                pins: 5,
                standing: 4
            })
        );
        assert_eq!(g, before);
    }

    #[test]
    fn test_rejects_roll_after_completion() {
        let mut g = game(&[0; 20]);
        let before = g.clone();
        assert_eq!(g.add(Roll::new(0).unwrap()), Err(BowlingError::GameComplete));
        assert_eq!(g, before);
    }

    #[test]
    fn test_tenth_frame_bonus_validation() {
        let mut g = game(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 10, 7]);
        assert_eq!(g.pins_left(), 3);
        assert!(g.add(Roll::new(4).unwrap()).is_err());
        assert!(g.add(Roll::new(3).unwrap()).is_ok());
        assert_eq!(g.score(), Some(20));
    }

    #[test]
    fn test_apply_actions() {
        let mut g = Game::new();
        g.apply_action(ScoreAction::Knock(7)).unwrap();
        assert_eq!(
            g.apply_action(ScoreAction::Strike),
            Err(BowlingError::IllegalMark {
                mark: 'X',
                standing: 3
            })
        );
        g.apply_action(ScoreAction::Spare).unwrap();
        assert_eq!(
            g.apply_action(ScoreAction::Spare),
            Err(BowlingError::IllegalMark {
                mark: '/',
                standing: 10
            })
        );
        g.apply_action(ScoreAction::Strike).unwrap();
        assert_eq!(g.partial_score(1), Some(20));

        g.apply_action(ScoreAction::Restart).unwrap();
        assert_eq!(g, Game::new());
    }

    #[test]
    fn test_marks_after_gutter_ball() {
        let mut g = Game::new();
        g.apply_action(ScoreAction::Knock(0)).unwrap();
        assert_eq!(
            g.apply_action(ScoreAction::Strike),
            Err(BowlingError::IllegalMark {
                mark: 'X',
                standing: 10
            })
        );
        g.apply_action(ScoreAction::Spare).unwrap();
        assert_eq!(g.frame(1).unwrap().state(), FrameState::Spare);
        assert_eq!(g.frame(1).unwrap().marks().as_slice(), &['0', '/']);
        assert_eq!(g.roll_count(), 2);
    }

    #[test]
    fn test_from_pins_rejects_out_of_range() {
        assert_eq!(
            Game::from_pins(&[11]),
            Err(BowlingError::InvalidRoll {
                pins: 11,
                standing: 10
            })
        );
    }

    #[test]
    fn test_actions_after_completion() {
        let mut g = game(&[10; 12]);
        assert_eq!(g.apply_action(ScoreAction::Strike), Err(BowlingError::GameComplete));
        assert_eq!(g.apply_action(ScoreAction::Spare), Err(BowlingError::GameComplete));
        assert_eq!(g.apply_action(ScoreAction::Knock(0)), Err(BowlingError::GameComplete));
    }

    #[test]
    fn test_max_possible_score_mid_frame() {
        // 7 then 3 for the spare, then eleven strikes: 20 + 9 * 30 = 290.
        assert_eq!(game(&[7]).max_possible_score(), 290);
        assert_eq!(game(&[7, 1]).max_possible_score(), 278);
    }

    #[test]
    fn test_report_lines() {
        let report = game(&[6, 4, 3]).report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Frame 1: 6, /, score: 13");
        assert_eq!(lines[1], "Frame 2: 3");
        assert_eq!(lines[9], "Frame 10:");
    }
}
