//! Session facade: store + coordinator behind one owner.
//!
//! `Session` is created once at application start and passed to whoever
//! drives it (the terminal runtime or a headless command). The owner applies
//! every transition through `&mut self`, so the store is never touched
//! concurrently; login completions wait in an inbox until the owner drains it
//! with `pump` or `settle`.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::auth::{AuthService, LoginIntent};
use crate::coordinator::{LoginCompleted, LoginCoordinator, LoginReceiver};
use crate::store::{SessionEvent, SessionSnapshot, SessionState, SessionStore};
use crate::task::TaskId;

pub struct Session {
    store: SessionStore,
    coordinator: LoginCoordinator,
    inbox_rx: LoginReceiver,
}

impl Session {
    /// Initializes a logged-out session backed by `service`.
    pub fn start(service: Arc<dyn AuthService>) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        tracing::debug!("session started");
        Self {
            store: SessionStore::new(),
            coordinator: LoginCoordinator::new(service, inbox_tx),
            inbox_rx,
        }
    }

    /// Tears the session down, abandoning any pending login attempt.
    ///
    /// Returns the last snapshot.
    pub fn shutdown(mut self) -> SessionSnapshot {
        self.coordinator.cancel_all();
        self.inbox_rx.close();
        let snapshot = self.store.snapshot();
        tracing::debug!(
            authenticated = snapshot.is_authenticated,
            "session shut down"
        );
        snapshot
    }

    pub fn state(&self) -> &SessionState {
        self.store.state()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.store.subscribe()
    }

    /// Returns true while a login attempt is in flight.
    pub fn is_pending(&self) -> bool {
        self.coordinator.is_pending()
    }

    /// Submits a login intent. The outcome shows up in the store once the
    /// owner drains the inbox.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit_login(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> TaskId {
        self.store.dispatch(SessionEvent::LoginIntentSubmitted);
        self.coordinator.submit(LoginIntent::new(username, password))
    }

    /// Logs out immediately. A login attempt still in flight is abandoned so
    /// it cannot log the user back in.
    pub fn logout(&mut self) {
        self.coordinator.cancel_all();
        if self.store.dispatch(SessionEvent::LoggedOutExplicit) {
            tracing::info!("logged out");
        }
    }

    /// Applies every completion already waiting in the inbox.
    ///
    /// Returns true if the snapshot changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completed) = self.inbox_rx.try_recv() {
            changed |= self.apply_completed(completed);
        }
        changed
    }

    /// Waits until no login attempt is pending, applying completions as they
    /// arrive. Returns the resulting snapshot.
    pub async fn settle(&mut self) -> SessionSnapshot {
        self.pump();
        while self.coordinator.is_pending() {
            let Some(completed) = self.inbox_rx.recv().await else {
                break;
            };
            self.apply_completed(completed);
        }
        self.store.snapshot()
    }

    fn apply_completed(&mut self, completed: LoginCompleted) -> bool {
        match self.coordinator.resolve(completed) {
            Some(event) => self.store.dispatch(event),
            None => false,
        }
    }
}
