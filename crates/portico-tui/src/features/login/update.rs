//! Login screen reducer.
//!
//! Validation runs here, before anything reaches the session: an invalid
//! form only sets an error message and produces no effect.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use portico_core::validate;

use super::state::LoginForm;
use crate::effects::UiEffect;

/// Shown when an attempt resolves and the user is still logged out.
pub const REJECTED_MESSAGE: &str = "Invalid username or password";

pub fn handle_login_key(form: &mut LoginForm, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char('r') if ctrl => {
            form.reveal_password = !form.reveal_password;
            vec![]
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            form.focus = form.focus.next();
            vec![]
        }
        KeyCode::Enter => submit(form),
        KeyCode::Backspace => {
            form.focused_mut().backspace();
            vec![]
        }
        KeyCode::Delete => {
            form.focused_mut().delete();
            vec![]
        }
        KeyCode::Left => {
            form.focused_mut().move_left();
            vec![]
        }
        KeyCode::Right => {
            form.focused_mut().move_right();
            vec![]
        }
        KeyCode::Home => {
            form.focused_mut().move_home();
            vec![]
        }
        KeyCode::End => {
            form.focused_mut().move_end();
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            form.focused_mut().insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}

pub fn handle_login_paste(form: &mut LoginForm, text: &str) {
    form.focused_mut().insert_str(text);
}

/// Called when a login attempt resolves while the login screen is showing.
pub fn handle_login_settled(form: &mut LoginForm, authenticated: bool) {
    if !authenticated {
        form.error = Some(REJECTED_MESSAGE.to_string());
    }
}

fn submit(form: &mut LoginForm) -> Vec<UiEffect> {
    let username = form.username.value();
    let password = form.password.value();
    match validate(username, password) {
        Ok(()) => {
            form.error = None;
            tracing::debug!(username, "login form submitted");
            vec![UiEffect::SubmitLogin {
                username: username.to_string(),
                password: password.to_string(),
            }]
        }
        Err(error) => {
            form.error = Some(error.to_string());
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::login::Field;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(form: &mut LoginForm, text: &str) {
        for c in text.chars() {
            handle_login_key(form, key(KeyCode::Char(c)));
        }
    }

    fn filled(username: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::default();
        type_text(&mut form, username);
        handle_login_key(&mut form, key(KeyCode::Tab));
        type_text(&mut form, password);
        form
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let form = filled("test", "password");
        assert_eq!(form.username.value(), "test");
        assert_eq!(form.password.value(), "password");
        assert_eq!(form.focus, Field::Password);
    }

    #[test]
    fn test_blank_username_blocks_submit() {
        let mut form = filled("   ", "password");
        let effects = handle_login_key(&mut form, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(form.error.as_deref(), Some("Username is required"));
    }

    #[test]
    fn test_missing_password_blocks_submit() {
        let mut form = filled("test", "");
        let effects = handle_login_key(&mut form, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(form.error.as_deref(), Some("Password is required"));
    }

    #[test]
    fn test_short_password_blocks_submit() {
        let mut form = filled("test", "12345");
        let effects = handle_login_key(&mut form, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(
            form.error.as_deref(),
            Some("Password must be at least 6 characters long")
        );
    }

    #[test]
    fn test_valid_form_submits_raw_values() {
        let mut form = filled("test", "password");
        form.error = Some("stale".to_string());
        let effects = handle_login_key(&mut form, key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::SubmitLogin {
                username: "test".to_string(),
                password: "password".to_string(),
            }]
        );
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_ctrl_r_toggles_password_visibility() {
        let mut form = LoginForm::default();
        handle_login_key(&mut form, ctrl('r'));
        assert!(form.reveal_password);
        handle_login_key(&mut form, ctrl('r'));
        assert!(!form.reveal_password);
        assert!(form.username.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut form = LoginForm::default();
        assert_eq!(handle_login_key(&mut form, key(KeyCode::Esc)), vec![UiEffect::Quit]);
        assert_eq!(handle_login_key(&mut form, ctrl('c')), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_paste_into_focused_field() {
        let mut form = LoginForm::default();
        handle_login_key(&mut form, key(KeyCode::Down));
        handle_login_paste(&mut form, "password\n");
        assert_eq!(form.password.value(), "password");
        assert!(form.username.is_empty());
    }

    #[test]
    fn test_rejected_attempt_sets_message() {
        let mut form = LoginForm::default();
        handle_login_settled(&mut form, true);
        assert_eq!(form.error, None);
        handle_login_settled(&mut form, false);
        assert_eq!(form.error.as_deref(), Some(REJECTED_MESSAGE));
    }
}
