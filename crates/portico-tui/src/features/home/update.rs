use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;

pub fn handle_home_key(key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('l') | KeyCode::Enter if !ctrl => vec![UiEffect::Logout],
        KeyCode::Char('q') | KeyCode::Esc if !ctrl => vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_logout_keys() {
        for code in [KeyCode::Char('l'), KeyCode::Enter] {
            assert_eq!(
                handle_home_key(key(code, KeyModifiers::NONE)),
                vec![UiEffect::Logout]
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            handle_home_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            vec![UiEffect::Quit]
        );
        assert_eq!(
            handle_home_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            vec![UiEffect::Quit]
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert!(handle_home_key(key(KeyCode::Char('x'), KeyModifiers::NONE)).is_empty());
        assert!(handle_home_key(key(KeyCode::Char('l'), KeyModifiers::CONTROL)).is_empty());
    }
}
