//! Pure view functions. They read `AppState` and draw; they never mutate.

use ratatui::Frame;

use crate::home::render_home;
use crate::login::render_login;
use crate::state::{AppState, Screen};

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match &app.screen {
        Screen::Login(form) => {
            render_login(frame, area, form, app.login_pending, app.spinner_frame);
        }
        Screen::Home => render_home(frame, area),
    }
}
