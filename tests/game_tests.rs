//! Game scoring tests - frame chain behaviour through the public API

use tui_bowling::core::{FrameState, Game};
use tui_bowling::types::{BowlingError, Roll, PERFECT_SCORE};

fn game(pins: &[u8]) -> Game {
    Game::from_pins(pins).unwrap()
}

#[test]
fn test_score_given_no_rolls() {
    assert_eq!(Game::new().score(), None);
}

#[test]
fn test_score_given_one_roll() {
    assert_eq!(game(&[6]).score(), None);
}

#[test]
fn test_score_given_open_frames() {
    assert_eq!(game(&[6, 2]).score(), Some(8));
    assert_eq!(game(&[6, 2, 3, 2]).score(), Some(13));
}

#[test]
fn test_score_given_spare() {
    assert_eq!(game(&[6, 4, 3]).score(), Some(13));
    assert_eq!(game(&[6, 4, 3, 2]).score(), Some(18));
}

#[test]
fn test_score_given_strike() {
    let g = game(&[10, 4, 3]);
    assert_eq!(g.partial_score(1), Some(17));
    assert_eq!(g.score(), Some(24));
}

#[test]
fn test_score_given_complete_game() {
    let g = game(&[6, 4, 6, 3, 10, 10, 5, 3, 6, 2, 7, 1, 10, 10, 4, 6, 10]);
    assert_eq!(g.score(), Some(156));
    assert_eq!(
        g.partial_scores(),
        [16, 25, 50, 68, 76, 84, 92, 116, 136, 156].map(Some)
    );
}

#[test]
fn test_perfect_game() {
    let g = game(&[10; 12]);
    assert_eq!(g.score(), Some(PERFECT_SCORE));
    assert_eq!(g.frame(10).unwrap().state(), FrameState::StrikeTwoBonuses);
}

#[test]
fn test_all_spares() {
    // 5/ in every frame plus a 5 fill ball: 15 per frame.
    let g = game(&[5; 21]);
    assert_eq!(g.score(), Some(150));
}

#[test]
fn test_gutter_game() {
    let g = game(&[0; 20]);
    assert_eq!(g.score(), Some(0));
    assert_eq!(g.max_possible_score(), 0);
}

#[test]
fn test_tenth_frame_open_closes_after_two() {
    let mut pins = vec![0; 18];
    pins.extend([3, 4]);
    let mut g = game(&pins);
    assert!(g.is_complete());
    assert_eq!(g.score(), Some(7));
    assert_eq!(g.add(Roll::new(1).unwrap()), Err(BowlingError::GameComplete));
}

#[test]
fn test_tenth_frame_spare_gets_fill_ball() {
    let mut pins = vec![0; 18];
    pins.extend([3, 7]);
    let mut g = game(&pins);
    assert_eq!(g.current_frame(), Some(10));
    assert_eq!(g.score(), Some(0));
    g.add(Roll::new(5).unwrap()).unwrap();
    assert_eq!(g.score(), Some(15));
    assert!(g.is_complete());
}

#[test]
fn test_current_frame_progression() {
    let mut g = Game::new();
    assert_eq!(g.current_frame(), Some(1));
    g.add(Roll::strike()).unwrap();
    assert_eq!(g.current_frame(), Some(2));
    g.add(Roll::new(3).unwrap()).unwrap();
    assert_eq!(g.current_frame(), Some(2));
    g.add(Roll::new(4).unwrap()).unwrap();
    assert_eq!(g.current_frame(), Some(3));
}

#[test]
fn test_pins_left() {
    let mut g = Game::new();
    assert_eq!(g.pins_left(), 10);
    g.add(Roll::new(3).unwrap()).unwrap();
    assert_eq!(g.pins_left(), 7);
    g.add(Roll::new(7).unwrap()).unwrap();
    assert_eq!(g.pins_left(), 10);
}

#[test]
fn test_invalid_roll_leaves_game_untouched() {
    let mut g = game(&[10, 8]);
    let before = g.clone();
    let err = g.add(Roll::new(3).unwrap()).unwrap_err();
    assert_eq!(
        err,
        BowlingError::InvalidRoll {
            pins: 3,
            standing: 2
        }
    );
    assert_eq!(g, before);
    assert_eq!(g.roll_count(), 2);
}

#[test]
fn test_max_possible_score_shrinks_with_misses() {
    let mut g = Game::new();
    let mut last = g.max_possible_score();
    assert_eq!(last, PERFECT_SCORE);
    for pins in [9, 0, 8, 1, 10, 7, 2] {
        g.add(Roll::new(pins).unwrap()).unwrap();
        let max = g.max_possible_score();
        assert!(max <= last, "max grew from {last} to {max}");
        last = max;
    }
}

#[test]
fn test_queries_are_idempotent() {
    let g = game(&[10, 7, 3, 9]);
    assert_eq!(g.score(), g.score());
    assert_eq!(g.report(), g.report());
    assert_eq!(g.snapshot(), g.snapshot());
}
