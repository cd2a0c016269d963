//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application.
    Quit,
    /// Collect a fresh snapshot.
    Refresh,
}

/// Maps a key press to an action. `q` and Ctrl+C quit; every other key
/// refreshes.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::Refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);

        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert_eq!(handle_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_other_keys_refresh() {
        for code in [
            KeyCode::Char('c'),
            KeyCode::Char('Q'),
            KeyCode::Char('r'),
            KeyCode::Enter,
            KeyCode::Esc,
            KeyCode::Up,
        ] {
            assert_eq!(handle_key(key(code)), KeyAction::Refresh, "{:?}", code);
        }
    }
}
