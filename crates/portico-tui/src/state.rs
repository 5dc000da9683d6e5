//! Application state.
//!
//! ```text
//! AppState
//! ├── screen: Screen            (Login form or Home)
//! ├── session: SessionSnapshot  (last snapshot published by the store)
//! ├── login_pending: bool       (an attempt is in flight)
//! ├── spinner_frame: usize
//! └── should_quit: bool
//! ```
//!
//! The session snapshot is a mirror. The session itself lives in the runtime
//! and only changes through effects.

use portico_core::SessionSnapshot;

use crate::login::LoginForm;

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login(LoginForm),
    Home,
}

impl Screen {
    pub fn is_home(&self) -> bool {
        matches!(self, Screen::Home)
    }
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub session: SessionSnapshot,
    pub login_pending: bool,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SessionSnapshot::default())
    }
}

impl AppState {
    /// Creates state for the given starting snapshot.
    pub fn new(session: SessionSnapshot) -> Self {
        let screen = if session.is_authenticated {
            Screen::Home
        } else {
            Screen::Login(LoginForm::default())
        };
        Self {
            screen,
            session,
            login_pending: false,
            spinner_frame: 0,
            should_quit: false,
        }
    }
}
