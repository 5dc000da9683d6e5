//! Session core for Portico: credential validation, mock authentication,
//! the session store, and the coordinator that connects them.

pub mod auth;
pub mod config;
pub mod coordinator;
pub mod logging;
pub mod session;
pub mod store;
pub mod task;
pub mod validate;

use std::sync::Arc;

pub use auth::{AuthError, AuthService, LoginIntent, MockAuthService, SessionToken};
pub use session::Session;
pub use store::{SessionEvent, SessionSnapshot, SessionState};
pub use validate::{ValidationError, validate};

/// Starts a session backed by the mock authentication service configured in
/// `config`.
pub fn start_mock_session(config: &config::Config) -> Session {
    Session::start(Arc::new(MockAuthService::new(config.auth.delay())))
}
