//! Configuration management for Portico.
//!
//! Loads configuration from ${PORTICO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for Portico configuration and data directories.
    //!
    //! PORTICO_HOME resolution order:
    //! 1. PORTICO_HOME environment variable (if set)
    //! 2. ~/.config/portico (default)
    //! 3. ./.portico when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Portico home directory.
    pub fn portico_home() -> PathBuf {
        if let Ok(home) = std::env::var("PORTICO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".portico"),
            |h| h.join(".config").join("portico"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        portico_home().join("config.toml")
    }

    /// Returns the default log file path.
    pub fn log_path() -> PathBuf {
        portico_home().join("logs").join("portico.log")
    }
}

/// Mock authentication settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated latency of the authentication call, in milliseconds.
    pub delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            delay_ms: AuthConfig::DEFAULT_DELAY_MS,
        }
    }
}

impl AuthConfig {
    const DEFAULT_DELAY_MS: u64 = 1000;

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive (overridden by PORTICO_LOG).
    pub filter: String,
    /// Log file for interactive mode. Defaults to ${PORTICO_HOME}/logs/portico.log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: LogConfig::DEFAULT_FILTER.to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    const DEFAULT_FILTER: &str = "info";

    /// Resolved log file path.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(paths::log_path)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes a default config file, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, Self::generate()?)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Renders the default configuration as TOML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn generate() -> Result<String> {
        let body = toml::to_string_pretty(&Config::default())
            .context("Failed to serialize default config")?;
        Ok(format!("# Portico configuration\n\n{body}"))
    }
}
