//! Login screen.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{Field, LoginForm};
pub use update::{REJECTED_MESSAGE, handle_login_key, handle_login_paste, handle_login_settled};
