//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the side-effect boundary: the reducer stays pure and returns
//! `UiEffect`s, and this module applies them to the `Session`. Session
//! changes travel back into the reducer as `UiEvent`s, collected once per
//! loop iteration alongside terminal input.
//!
//! Structure:
//! - `mod.rs`: core runtime (TuiRuntime, event loop, effect dispatch)
//! - `session_bridge.rs`: session calls and session-side events

mod session_bridge;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use portico_core::Session;
pub use session_bridge::SessionBridge;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, PorticoTerminal};
use crate::{render, update};

/// Poll interval while a login attempt is in flight (spinner animation).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll interval when nothing is pending.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Drives a borrowed `Session`; the caller shuts it down after `run` returns.
/// The terminal is restored on drop.
pub struct TuiRuntime<'a> {
    terminal: PorticoTerminal,
    pub state: AppState,
    session: SessionBridge<'a>,
    last_tick: Instant,
}

impl<'a> TuiRuntime<'a> {
    /// Enters the alternate screen and mirrors the session's current snapshot.
    pub fn new(session: &'a mut Session) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let mut session = SessionBridge::new(session);
        let snapshot = session.snapshot();

        Ok(Self {
            terminal,
            state: AppState::new(snapshot),
            session,
            last_tick: Instant::now(),
        })
    }

    /// Runs until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            for event in self.collect_events()? {
                // Idle ticks change nothing visible.
                dirty |= !matches!(event, UiEvent::Tick) || self.state.login_pending;

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        self.session.collect_events(&mut events);

        let tick_interval = if self.state.login_pending {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Don't block when there is already something to process.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::SubmitLogin { username, password } => {
                self.session.submit_login(username, password);
            }
            UiEffect::Logout => {
                self.session.logout();
            }
        }
    }
}

impl Drop for TuiRuntime<'_> {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let _ = terminal::restore_terminal();
    }
}
