//! Authentication service seam and the mock implementation.
//!
//! `AuthService` is where a real remote call would plug in. The shipped
//! `MockAuthService` simulates one: it waits a fixed delay, then accepts a
//! single literal credential pair.

use std::fmt;
use std::time::Duration;

use futures_util::future::BoxFuture;
use thiserror::Error;

/// Username accepted by the mock service.
pub const MOCK_USERNAME: &str = "test";
/// Password accepted by the mock service.
pub const MOCK_PASSWORD: &str = "password";
/// Token issued by the mock service on success.
pub const MOCK_TOKEN: &str = "fake-jwt-token";
/// Default simulated latency.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// A user's request to log in. Raw and unvalidated.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginIntent {
    pub username: String,
    pub password: String,
}

impl LoginIntent {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginIntent")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque session token issued on successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// The service failed before producing an answer (e.g. its task panicked).
    #[error("Authentication service failed")]
    ServiceFailed,
}

/// Resolves a login intent into a session token, eventually.
///
/// Implementations must not complete synchronously from the caller's point
/// of view: the returned future is always polled on a spawned task.
pub trait AuthService: Send + Sync + 'static {
    fn authenticate(
        &self,
        intent: LoginIntent,
    ) -> BoxFuture<'static, Result<SessionToken, AuthError>>;
}

/// Non-networked stand-in for a remote authentication endpoint.
#[derive(Debug, Clone)]
pub struct MockAuthService {
    delay: Duration,
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl MockAuthService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl AuthService for MockAuthService {
    fn authenticate(
        &self,
        intent: LoginIntent,
    ) -> BoxFuture<'static, Result<SessionToken, AuthError>> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            if intent.username == MOCK_USERNAME && intent.password == MOCK_PASSWORD {
                Ok(SessionToken::new(MOCK_TOKEN))
            } else {
                Err(AuthError::InvalidCredentials)
            }
        })
    }
}
