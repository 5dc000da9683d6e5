//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::home;
use crate::login::{self, LoginForm};
use crate::state::{AppState, Screen};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SessionChanged(snapshot) => {
            match (app.screen.is_home(), snapshot.is_authenticated) {
                (false, true) => app.screen = Screen::Home,
                (true, false) => app.screen = Screen::Login(LoginForm::default()),
                _ => {}
            }
            app.session = snapshot;
            vec![]
        }
        UiEvent::LoginPending(pending) => {
            app.login_pending = pending;
            if !pending
                && !app.session.is_authenticated
                && let Screen::Login(form) = &mut app.screen
            {
                login::handle_login_settled(form, false);
            }
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            if let Screen::Login(form) = &mut app.screen {
                login::handle_login_paste(form, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Some terminals report releases too; only act on presses and repeats.
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    let effects = match &mut app.screen {
        Screen::Login(form) => login::handle_login_key(form, key),
        Screen::Home => home::handle_home_key(key),
    };

    if effects.contains(&UiEffect::Quit) {
        app.should_quit = true;
    }
    effects
}
