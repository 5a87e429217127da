//! Frame module - the per-frame scoring state machine
//!
//! A frame records the deliveries that count toward its own score. After a
//! strike or spare, the next deliveries are recorded here as bonus rolls *and*
//! passed on to the following frame, which decides for itself whether they are
//! its first or second ball. Bonus pins are therefore never looked up ahead of
//! time: every frame is both a recorder and a forwarder.
//!
//! The tenth frame uses the same states. Its bonus slots are its own
//! deliveries, and there is nothing after it to forward to.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{Roll, FRAME_COUNT, MAX_PINS, MAX_ROLLS_PER_FRAME};

/// Lifecycle of a single frame. States only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameState {
    /// No roll yet
    NotStarted,
    /// First ball left pins standing
    OneRollTaken,
    /// Two balls, fewer than ten pins in total
    Open,
    /// Ten pins on the first ball, waiting for two bonus rolls
    Strike,
    /// Strike plus one bonus roll
    StrikeOneBonus,
    /// Strike plus both bonus rolls
    StrikeTwoBonuses,
    /// Ten pins over two balls, waiting for one bonus roll
    Spare,
    /// Spare plus its bonus roll
    SpareWithBonus,
}

impl FrameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameState::NotStarted => "not_started",
            FrameState::OneRollTaken => "one_roll_taken",
            FrameState::Open => "open",
            FrameState::Strike => "strike",
            FrameState::StrikeOneBonus => "strike_one_bonus",
            FrameState::StrikeTwoBonuses => "strike_two_bonuses",
            FrameState::Spare => "spare",
            FrameState::SpareWithBonus => "spare_with_bonus",
        }
    }

    /// The frame's score is fixed and it takes no more rolls of any kind.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            FrameState::Open | FrameState::StrikeTwoBonuses | FrameState::SpareWithBonus
        )
    }

    /// Both own balls (or the strike) of a regular frame have been delivered.
    fn own_rolls_done(&self) -> bool {
        !matches!(self, FrameState::NotStarted | FrameState::OneRollTaken)
    }
}

/// What the chain should do with a roll after a frame has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forward {
    /// The roll also belongs to the next frame
    Pass,
    /// The roll was consumed here
    Stop,
}

/// One of the ten frames of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// 1-based position in the game.
    index: usize,
    /// Own rolls followed by bonus rolls, in delivery order.
    rolls: ArrayVec<Roll, MAX_ROLLS_PER_FRAME>,
    state: FrameState,
}

impl Frame {
    /// Create an empty frame at the given 1-based position.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            rolls: ArrayVec::new(),
            state: FrameState::NotStarted,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The tenth frame has no successor and takes up to three own rolls.
    pub fn is_last(&self) -> bool {
        self.index == FRAME_COUNT
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Every roll recorded by this frame, bonus rolls included.
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Record a roll and advance the state.
    ///
    /// Returns [`Forward::Pass`] when the frame had already received its own
    /// deliveries, meaning the roll is (also) the next frame's. The caller is
    /// responsible for checking the roll against [`Frame::pins_left`] first.
    pub fn add(&mut self, roll: Roll) -> Forward {
        let before = self.state;
        self.state = match before {
            FrameState::NotStarted => {
                self.rolls.push(roll);
                if roll.is_strike() {
                    FrameState::Strike
                } else {
                    FrameState::OneRollTaken
                }
            }
            FrameState::OneRollTaken => {
                self.rolls.push(roll);
                if self.pins() == u16::from(MAX_PINS) {
                    FrameState::Spare
                } else {
                    FrameState::Open
                }
            }
            FrameState::Strike => {
                self.rolls.push(roll);
                FrameState::StrikeOneBonus
            }
            FrameState::StrikeOneBonus => {
                self.rolls.push(roll);
                FrameState::StrikeTwoBonuses
            }
            FrameState::Spare => {
                self.rolls.push(roll);
                FrameState::SpareWithBonus
            }
            FrameState::Open | FrameState::StrikeTwoBonuses | FrameState::SpareWithBonus => before,
        };

        if before.own_rolls_done() {
            Forward::Pass
        } else {
            Forward::Stop
        }
    }

    /// Pins recorded so far, bonus rolls included.
    fn pins(&self) -> u16 {
        self.rolls.iter().map(|r| u16::from(r.pins())).sum()
    }

    /// This frame's own contribution, once every bonus roll has arrived.
    pub fn frame_score(&self) -> Option<u16> {
        self.state.is_final().then(|| self.pins())
    }

    /// No more rolls of any kind will be recorded.
    pub fn is_closed(&self) -> bool {
        self.state.is_final()
    }

    /// The frame is the one the bowler is currently delivering into.
    pub fn accepts_own_roll(&self) -> bool {
        match self.state {
            FrameState::NotStarted | FrameState::OneRollTaken => true,
            FrameState::Strike | FrameState::StrikeOneBonus | FrameState::Spare => self.is_last(),
            FrameState::Open | FrameState::StrikeTwoBonuses | FrameState::SpareWithBonus => false,
        }
    }

    /// Rolls delivered into this frame by the bowler.
    ///
    /// Bonus rolls of frames 1-9 belong to the following frames and are
    /// excluded; every roll of the tenth frame is its own.
    pub fn own_rolls(&self) -> &[Roll] {
        if self.is_last() {
            return &self.rolls;
        }
        let own = match self.rolls.first() {
            Some(first) if first.is_strike() => 1,
            _ => 2,
        };
        &self.rolls[..own.min(self.rolls.len())]
    }

    /// Pins standing for the next own roll, or 0 when the frame takes none.
    pub fn pins_left(&self) -> u8 {
        if !self.accepts_own_roll() {
            return 0;
        }
        rack_walk(self.own_rolls(), |_, _| {}).standing
    }

    /// The next own roll is the first ball of a rack.
    ///
    /// A gutter first ball leaves ten pins standing, but the rack is no
    /// longer fresh: clearing it is a spare, not a strike.
    pub fn rack_is_fresh(&self) -> bool {
        self.accepts_own_roll() && rack_walk(self.own_rolls(), |_, _| {}).fresh
    }

    /// Score-sheet marks for the own rolls: `X`, `/`, or the pin count.
    pub fn marks(&self) -> ArrayVec<char, MAX_ROLLS_PER_FRAME> {
        let mut marks = ArrayVec::new();
        rack_walk(self.own_rolls(), |roll, rack| {
            let mark = if rack.fresh && roll.is_strike() {
                'X'
            } else if !rack.fresh && roll.pins() == rack.standing {
                '/'
            } else {
                char::from(b'0' + roll.pins())
            };
            marks.push(mark);
        });
        marks
    }
}

/// Pins standing and whether the next ball opens the rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rack {
    standing: u8,
    fresh: bool,
}

impl Rack {
    const FULL: Rack = Rack {
        standing: MAX_PINS,
        fresh: true,
    };
}

/// Replay rolls against a rack that is reset after a strike or a second ball.
///
/// `f` sees each roll with the rack as it stood before it. Returns the rack
/// after the last roll.
fn rack_walk(rolls: &[Roll], mut f: impl FnMut(Roll, Rack)) -> Rack {
    let mut rack = Rack::FULL;
    for &roll in rolls {
        f(roll, rack);
        let standing = rack.standing.saturating_sub(roll.pins());
        rack = if standing == 0 || !rack.fresh {
            Rack::FULL
        } else {
            Rack {
                standing,
                fresh: false,
            }
        };
    }
    rack
}
