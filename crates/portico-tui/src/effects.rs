//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never touches the session directly: it asks for a login or a
//! logout, and the runtime reports the resulting state back as events.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Submit a login intent. Credentials have already passed validation.
    SubmitLogin { username: String, password: String },

    /// End the current session.
    Logout,
}
