//! Key mapping from terminal events to command codes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map a key to its single-character command code.
///
/// Arrow keys become `W`/`A`/`S`/`D`; character keys pass through uppercased.
/// Keys without a character (function keys, Esc, ...) map to nothing.
pub fn key_to_code(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Up => Some('W'),
        KeyCode::Left => Some('A'),
        KeyCode::Down => Some('S'),
        KeyCode::Right => Some('D'),
        KeyCode::Char(c) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Map keyboard input to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    key_to_code(key).map(Command::from_code)
}

/// Ctrl+C arrives as a key event in raw mode; treat it as an interrupt.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key_to_code(KeyEvent::from(KeyCode::Up)), Some('W'));
        assert_eq!(key_to_code(KeyEvent::from(KeyCode::Left)), Some('A'));
        assert_eq!(key_to_code(KeyEvent::from(KeyCode::Down)), Some('S'));
        assert_eq!(key_to_code(KeyEvent::from(KeyCode::Right)), Some('D'));
    }

    #[test]
    fn test_letters_are_uppercased() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(Command::Up)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('i'))),
            Some(Command::Other('I'))
        );
    }

    #[test]
    fn test_non_character_keys() {
        assert_eq!(key_to_code(KeyEvent::from(KeyCode::Esc)), None);
        assert_eq!(key_to_code(KeyEvent::from(KeyCode::F(1))), None);
    }

    #[test]
    fn test_interrupt() {
        assert!(is_interrupt(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_interrupt(KeyEvent::from(KeyCode::Char('c'))));
    }
}
