//! Async task bookkeeping.
//!
//! Every spawned operation gets a `TaskId` from a monotonically increasing
//! `TaskSeq`. `TaskState` remembers which id is the live one; a completion
//! carrying any other id belongs to a superseded task and is dropped.

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: CancellationToken,
}

#[derive(Debug)]
pub struct TaskCompleted<R> {
    pub id: TaskId,
    pub result: R,
}

/// Lifecycle of the single live task of one kind.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Makes `started` the live task, cancelling whichever task it replaces.
    ///
    /// Returns the id of the superseded task, if any.
    pub fn replace(&mut self, started: &TaskStarted) -> Option<TaskId> {
        let previous = self.active.take();
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        self.active = Some(started.id);
        self.cancel = Some(started.cancel.clone());
        previous
    }

    /// Clears the task if `id` is the live one. Returns false for stale ids.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    /// Cancels and forgets the live task.
    pub fn cancel(&mut self) -> Option<TaskId> {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(seq: &mut TaskSeq) -> TaskStarted {
        TaskStarted {
            id: seq.next_id(),
            cancel: CancellationToken::new(),
        }
    }

    #[test]
    fn test_seq_is_monotonic() {
        let mut seq = TaskSeq::default();
        let a = seq.next_id();
        let b = seq.next_id();
        let c = seq.next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_replace_cancels_previous() {
        let mut seq = TaskSeq::default();
        let mut state = TaskState::default();
        let first = started(&mut seq);
        let second = started(&mut seq);

        assert_eq!(state.replace(&first), None);
        assert!(!first.cancel.is_cancelled());

        assert_eq!(state.replace(&second), Some(first.id));
        assert!(first.cancel.is_cancelled());
        assert!(!second.cancel.is_cancelled());
        assert_eq!(state.active, Some(second.id));
    }

    #[test]
    fn test_finish_ignores_stale_ids() {
        let mut seq = TaskSeq::default();
        let mut state = TaskState::default();
        let first = started(&mut seq);
        let second = started(&mut seq);
        state.replace(&first);
        state.replace(&second);

        assert!(!state.finish_if_active(first.id));
        assert!(state.is_running());
        assert!(state.finish_if_active(second.id));
        assert!(!state.is_running());
        assert!(!state.finish_if_active(second.id));
    }

    #[test]
    fn test_cancel_clears_state() {
        let mut seq = TaskSeq::default();
        let mut state = TaskState::default();
        let first = started(&mut seq);
        state.replace(&first);

        assert_eq!(state.cancel(), Some(first.id));
        assert!(first.cancel.is_cancelled());
        assert!(!state.is_running());
        assert_eq!(state.cancel(), None);
    }
}
