//! Full-screen login shell for Portico.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr, stdout};

use anyhow::Result;
pub use features::{home, login};
use portico_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive login shell until the user quits.
///
/// Must be called from within a multi-threaded tokio runtime context: login attempts
/// run on worker threads while this thread blocks on terminal input.
pub fn run_interactive(config: &Config) -> Result<()> {
    if !stdout().is_terminal() || !stderr().is_terminal() {
        anyhow::bail!(
            "The login shell requires a terminal.\n\
             Use `portico login --username ... --password ...` for non-interactive login."
        );
    }

    let mut session = portico_core::start_mock_session(config);
    tracing::info!(delay_ms = config.auth.delay_ms, "login shell started");

    let result = TuiRuntime::new(&mut session).and_then(|mut runtime| runtime.run());

    let snapshot = session.shutdown();
    tracing::info!(
        authenticated = snapshot.is_authenticated,
        "login shell exited"
    );
    result
}
