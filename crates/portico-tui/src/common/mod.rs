//! Shared helpers for screens.

pub mod layout;
pub mod text_field;

pub use layout::{KeyHint, centered_area, hint_line, render_panel};
pub use text_field::TextField;

/// Spinner frames for pending operations.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
