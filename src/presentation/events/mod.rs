//! Event handling helpers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Checks for the global force-quit chord.
///
/// Plain `q` is deliberately not a global quit: every screen has text
/// fields where it must insert a character.
#[must_use]
pub fn is_force_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Checks for the focus-forward key.
#[must_use]
pub fn is_focus_next(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Tab,
            modifiers: KeyModifiers::NONE,
            ..
        }
    )
}

/// Checks for the focus-backward key.
#[must_use]
pub fn is_focus_prev(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::BackTab,
            ..
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_force_quit() {
        assert!(is_force_quit(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_force_quit(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_force_quit(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_focus_cycling_keys() {
        assert!(is_focus_next(&key(KeyCode::Tab, KeyModifiers::NONE)));
        assert!(is_focus_prev(&key(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert!(!is_focus_next(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
