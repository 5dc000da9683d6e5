//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Writes a config with a short mock delay so login tests finish quickly.
pub fn write_fast_config(home: &Path) {
    fs::write(
        home.join("config.toml"),
        "[auth]\ndelay_ms = 10\n\n[log]\nfilter = \"off\"\n",
    )
    .unwrap();
}
