//! Connects the runtime to the `Session` it drives.
//!
//! Effects that touch the session go through the bridge, and the bridge turns
//! what happened to the session into `UiEvent`s. The pending flag is tracked
//! here rather than sampled: every submitted attempt yields a
//! `LoginPending(true)` and, once it settles, a `LoginPending(false)`, even
//! when the attempt finishes before the next loop iteration.

use portico_core::{Session, SessionSnapshot};
use tokio::sync::watch;

use crate::events::UiEvent;

pub struct SessionBridge<'a> {
    session: &'a mut Session,
    session_rx: watch::Receiver<SessionSnapshot>,
    /// Pending state last reported to the reducer.
    reported_pending: bool,
    queued: Vec<UiEvent>,
}

impl<'a> SessionBridge<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        let session_rx = session.subscribe();
        Self {
            session,
            session_rx,
            reported_pending: false,
            queued: Vec::new(),
        }
    }

    /// Current snapshot, marked as seen.
    pub fn snapshot(&mut self) -> SessionSnapshot {
        self.session_rx.borrow_and_update().clone()
    }

    pub fn submit_login(&mut self, username: String, password: String) {
        let id = self.session.submit_login(username, password);
        tracing::debug!(task = id.0, "login submitted from form");
        if !self.reported_pending {
            self.reported_pending = true;
            self.queued.push(UiEvent::LoginPending(true));
        }
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Applies finished login attempts and appends what changed.
    ///
    /// `SessionChanged` comes before `LoginPending(false)` so the reducer has
    /// already navigated away when a successful attempt settles.
    pub fn collect_events(&mut self, events: &mut Vec<UiEvent>) {
        events.append(&mut self.queued);

        self.session.pump();

        if self.session_rx.has_changed().unwrap_or(false) {
            events.push(UiEvent::SessionChanged(self.snapshot()));
        }

        let pending = self.session.is_pending();
        if pending != self.reported_pending {
            self.reported_pending = pending;
            events.push(UiEvent::LoginPending(pending));
        }
    }
}
