//! Session store: the single source of truth for session state.
//!
//! ```text
//!              AuthenticationSucceeded(token)
//!   LoggedOut ───────────────────────────────▶ LoggedIn { token }
//!       ▲                                           │
//!       └───────────────────────────────────────────┘
//!          AuthenticationFailed | LoggedOutExplicit
//! ```
//!
//! `LoginIntentSubmitted` leaves the state untouched; it only marks the point
//! where the coordinator takes over. Every transition is synchronous and
//! applied through `&mut self`.

use serde::Serialize;
use tokio::sync::watch;

use crate::auth::SessionToken;

/// Session status. The token only exists while logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn {
        token: SessionToken,
    },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::LoggedIn { .. })
    }

    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            SessionState::LoggedIn { token } => Some(token),
            SessionState::LoggedOut => None,
        }
    }

    /// Applies one transition event.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::LoginIntentSubmitted => {}
            SessionEvent::AuthenticationSucceeded(token) => {
                *self = SessionState::LoggedIn { token };
            }
            SessionEvent::AuthenticationFailed | SessionEvent::LoggedOutExplicit => {
                *self = SessionState::LoggedOut;
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_authenticated: self.is_authenticated(),
            session_token: self.token().map(|t| t.as_str().to_string()),
        }
    }
}

/// Transition events accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoginIntentSubmitted,
    AuthenticationSucceeded(SessionToken),
    AuthenticationFailed,
    LoggedOutExplicit,
}

/// Read-only view handed to observers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub session_token: Option<String>,
}

/// Owns the session state and publishes snapshots to subscribers.
#[derive(Debug)]
pub struct SessionStore {
    state: SessionState,
    tx: watch::Sender<SessionSnapshot>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let state = SessionState::default();
        let (tx, _) = watch::channel(state.snapshot());
        Self { state, tx }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }

    /// Subscribes to snapshot changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    /// Applies an event. Returns true if the snapshot changed.
    pub fn dispatch(&mut self, event: SessionEvent) -> bool {
        tracing::trace!(?event, "session event");
        self.state.apply(event);
        let next = self.state.snapshot();
        self.tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }
}
