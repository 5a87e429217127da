//! Key mapping from terminal events to score actions.

use crate::types::ScoreAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to score actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ScoreAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Pin counts
        KeyCode::Char(c @ '0'..='9') => c
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(ScoreAction::Knock),

        // Marks
        KeyCode::Char('x') | KeyCode::Char('X') => Some(ScoreAction::Strike),
        KeyCode::Char('/') => Some(ScoreAction::Spare),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ScoreAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the score sheet.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_digit_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('0'))),
            Some(ScoreAction::Knock(0))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('7'))),
            Some(ScoreAction::Knock(7))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('9'))),
            Some(ScoreAction::Knock(9))
        );
    }

    #[test]
    fn test_mark_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(ScoreAction::Strike)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('X'))),
            Some(ScoreAction::Strike)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('/'))),
            Some(ScoreAction::Spare)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(ScoreAction::Restart)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
