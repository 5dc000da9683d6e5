//! Effect coordinator: login intents in, session events out.
//!
//! Each submitted intent becomes a spawned authentication task. Only the most
//! recently submitted task may produce a session event (takeLatest):
//! submitting again cancels the previous task's token, and any completion that
//! still arrives for an older id is discarded in `resolve`.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::auth::{AuthError, AuthService, LoginIntent, SessionToken};
use crate::store::SessionEvent;
use crate::task::{TaskCompleted, TaskId, TaskSeq, TaskStarted, TaskState};

pub type LoginOutcome = Result<SessionToken, AuthError>;
pub type LoginCompleted = TaskCompleted<LoginOutcome>;

pub type LoginSender = mpsc::UnboundedSender<LoginCompleted>;
pub type LoginReceiver = mpsc::UnboundedReceiver<LoginCompleted>;

pub struct LoginCoordinator {
    service: Arc<dyn AuthService>,
    seq: TaskSeq,
    login: TaskState,
    inbox_tx: LoginSender,
}

impl LoginCoordinator {
    /// Creates a coordinator that reports completions to `inbox_tx`.
    pub fn new(service: Arc<dyn AuthService>, inbox_tx: LoginSender) -> Self {
        Self {
            service,
            seq: TaskSeq::default(),
            login: TaskState::default(),
            inbox_tx,
        }
    }

    /// Returns true while the latest login attempt has not resolved.
    pub fn is_pending(&self) -> bool {
        self.login.is_running()
    }

    /// Id of the attempt whose outcome will be applied, if any.
    pub fn active(&self) -> Option<TaskId> {
        self.login.active
    }

    /// Starts an authentication call for `intent`, superseding any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, intent: LoginIntent) -> TaskId {
        let started = TaskStarted {
            id: self.seq.next_id(),
            cancel: CancellationToken::new(),
        };
        if let Some(previous) = self.login.replace(&started) {
            tracing::debug!(
                superseded = previous.0,
                task = started.id.0,
                "login attempt superseded"
            );
        }
        tracing::info!(task = started.id.0, username = %intent.username, "login submitted");

        let id = started.id;
        let cancel = started.cancel;
        let call = self.service.authenticate(intent);
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            // A panicking service must still produce a completion.
            let mut call = tokio::spawn(call);
            let result = tokio::select! {
                () = cancel.cancelled() => {
                    call.abort();
                    return;
                }
                joined = &mut call => joined.unwrap_or_else(|err| {
                    tracing::error!(task = id.0, %err, "authentication task failed");
                    Err(AuthError::ServiceFailed)
                }),
            };
            let _ = tx.send(TaskCompleted { id, result });
        });
        id
    }

    /// Folds a completion into a session event.
    ///
    /// Returns `None` when the completion belongs to a superseded attempt.
    pub fn resolve(&mut self, completed: LoginCompleted) -> Option<SessionEvent> {
        if !self.login.finish_if_active(completed.id) {
            tracing::debug!(task = completed.id.0, "discarding stale login outcome");
            return None;
        }
        match completed.result {
            Ok(token) => {
                tracing::info!(task = completed.id.0, "login succeeded");
                Some(SessionEvent::AuthenticationSucceeded(token))
            }
            Err(error) => {
                tracing::warn!(task = completed.id.0, %error, "login failed");
                Some(SessionEvent::AuthenticationFailed)
            }
        }
    }

    /// Abandons the pending attempt, if any.
    pub fn cancel_all(&mut self) {
        if let Some(id) = self.login.cancel() {
            tracing::debug!(task = id.0, "login attempt cancelled");
        }
    }
}

impl Drop for LoginCoordinator {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::auth::MockAuthService;

    fn coordinator(delay_ms: u64) -> (LoginCoordinator, LoginReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Arc::new(MockAuthService::new(Duration::from_millis(delay_ms)));
        (LoginCoordinator::new(service, tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_maps_to_authenticated() {
        let (mut coord, mut rx) = coordinator(1000);
        let id = coord.submit(LoginIntent::new("test", "password"));
        assert!(coord.is_pending());

        let completed = rx.recv().await.unwrap();
        assert_eq!(completed.id, id);
        let event = coord.resolve(completed);
        assert_eq!(
            event,
            Some(SessionEvent::AuthenticationSucceeded(SessionToken::new(
                "fake-jwt-token"
            )))
        );
        assert!(!coord.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_maps_to_failed() {
        let (mut coord, mut rx) = coordinator(1000);
        coord.submit(LoginIntent::new("test", "wrong-password"));
        let completed = rx.recv().await.unwrap();
        assert_eq!(
            coord.resolve(completed),
            Some(SessionEvent::AuthenticationFailed)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_completion_is_discarded() {
        let (mut coord, _rx) = coordinator(1000);
        let first = coord.submit(LoginIntent::new("test", "password"));
        let second = coord.submit(LoginIntent::new("test", "nope-nope"));

        // An outcome for the superseded attempt, however it got here, is ignored.
        let stale = TaskCompleted {
            id: first,
            result: Ok(SessionToken::new("fake-jwt-token")),
        };
        assert_eq!(coord.resolve(stale), None);
        assert_eq!(coord.active(), Some(second));
        assert!(coord.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_task_never_reports() {
        let (mut coord, mut rx) = coordinator(1000);
        coord.submit(LoginIntent::new("test", "password"));
        let second = coord.submit(LoginIntent::new("test", "nope-nope"));

        let completed = rx.recv().await.unwrap();
        assert_eq!(completed.id, second);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    struct PanickingAuth;

    impl AuthService for PanickingAuth {
        fn authenticate(
            &self,
            _intent: LoginIntent,
        ) -> futures_util::future::BoxFuture<'static, LoginOutcome> {
            Box::pin(async { panic!("transport blew up") })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_service_still_completes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut coord = LoginCoordinator::new(Arc::new(PanickingAuth), tx);
        let id = coord.submit(LoginIntent::new("test", "password"));

        let completed = rx.recv().await.unwrap();
        assert_eq!(completed.id, id);
        assert!(matches!(completed.result, Err(AuthError::ServiceFailed)));
        assert_eq!(
            coord.resolve(completed),
            Some(SessionEvent::AuthenticationFailed)
        );
        assert!(!coord.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_drops_pending_attempt() {
        let (mut coord, mut rx) = coordinator(1000);
        coord.submit(LoginIntent::new("test", "password"));
        coord.cancel_all();
        assert!(!coord.is_pending());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
