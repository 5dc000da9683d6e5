//! Tracing subscriber setup.
//!
//! Interactive mode owns the terminal, so logs go to a file through a
//! non-blocking appender. Headless commands log to stderr.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable that overrides `log.filter`.
pub const LOG_ENV: &str = "PORTICO_LOG";

#[derive(Debug, Clone)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Installs the global subscriber.
///
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes and stops the file writer. Installing twice is a no-op.
///
/// # Errors
/// Returns an error if the filter is invalid or the log file cannot be opened.
pub fn init(config: &LogConfig, target: LogTarget) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), &config.filter)?;

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
            Ok(None)
        }
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .context("Log path has no file name")?
                .to_os_string();
            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init();
            Ok(Some(guard))
        }
    }
}

/// Builds the filter, preferring the environment directive when present.
fn build_filter(env: Option<&str>, fallback: &str) -> Result<EnvFilter> {
    let directive = env.filter(|s| !s.trim().is_empty()).unwrap_or(fallback);
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter '{directive}'"))
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_filter_prefers_env() {
        let filter = build_filter(Some("debug"), "info").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_filter_falls_back_to_config() {
        let filter = build_filter(None, "warn").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
        let filter = build_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_invalid_filter_errors() {
        let err = build_filter(None, "portico=loud").unwrap_err();
        assert!(err.to_string().contains("Invalid log filter"));
    }
}
