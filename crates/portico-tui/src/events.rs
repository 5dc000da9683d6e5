//! Events fed to the reducer.

use crossterm::event::Event;
use portico_core::SessionSnapshot;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Animation tick.
    Tick,
    /// Raw terminal input (keys, paste, resize).
    Terminal(Event),
    /// The session store published a new snapshot.
    SessionChanged(SessionSnapshot),
    /// A login attempt started (`true`) or resolved (`false`).
    LoginPending(bool),
}
