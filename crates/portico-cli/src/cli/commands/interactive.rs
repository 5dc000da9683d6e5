//! Default command: the full-screen login shell.

use anyhow::{Context, Result};
use portico_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    portico_tui::run_interactive(config).context("interactive session failed")?;
    Ok(())
}
