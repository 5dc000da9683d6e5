//! Home screen view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::{KeyHint, centered_area, hint_line, render_panel};

const PANEL_WIDTH: u16 = 46;
const PANEL_HEIGHT: u16 = 9;
const ACCENT: Color = Color::Green;

const HINTS: &[KeyHint<'static>] = &[KeyHint::new("l", "logout"), KeyHint::new("q", "quit")];

pub fn render_home(frame: &mut Frame, area: Rect) {
    let panel = centered_area(area, PANEL_WIDTH, PANEL_HEIGHT);
    let inner = render_panel(frame, panel, "Home", ACCENT);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to the Home Screen",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Logout  ",
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        hint_line(HINTS, ACCENT),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
