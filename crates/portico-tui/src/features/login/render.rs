//! Login screen view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{Field, LoginForm};
use crate::common::{KeyHint, centered_area, hint_line, render_panel, spinner};

const PANEL_WIDTH: u16 = 54;
const PANEL_HEIGHT: u16 = 19;
const ACCENT: Color = Color::Cyan;

const HINTS: &[KeyHint<'static>] = &[
    KeyHint::new("Enter", "log in"),
    KeyHint::new("Tab", "switch"),
    KeyHint::new("^R", "reveal"),
    KeyHint::new("Esc", "quit"),
];

/// Renders the login screen. `pending` shows the in-flight indicator.
pub fn render_login(
    frame: &mut Frame,
    area: Rect,
    form: &LoginForm,
    pending: bool,
    spinner_frame: usize,
) {
    let panel = centered_area(area, PANEL_WIDTH, PANEL_HEIGHT);
    let inner = render_panel(frame, panel, "Portico", ACCENT);

    let [
        title_area,
        _,
        user_label,
        user_box,
        pass_label,
        pass_box,
        status_area,
        button_area,
        _,
        footer_area,
        hints_area,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Welcome Back",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        title_area,
    );

    render_label(frame, user_label, "Username");
    render_field(frame, user_box, form, Field::Username);
    let password_label = if form.reveal_password {
        "Password (visible)"
    } else {
        "Password"
    };
    render_label(frame, pass_label, password_label);
    render_field(frame, pass_box, form, Field::Password);

    frame.render_widget(
        Paragraph::new(status_lines(form, pending, spinner_frame)),
        status_area,
    );

    let button_style = if pending {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("  Log In  ", button_style)))
            .alignment(Alignment::Center),
        button_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Don't have an account? ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Sign Up",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center),
        footer_area,
    );

    frame.render_widget(
        Paragraph::new(hint_line(HINTS, ACCENT)).alignment(Alignment::Center),
        hints_area,
    );
}

fn render_label(frame: &mut Frame, area: Rect, label: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            label.to_string(),
            Style::default().fg(Color::Gray),
        )),
        area,
    );
}

fn render_field(frame: &mut Frame, area: Rect, form: &LoginForm, field: Field) {
    let focused = form.focus == field;
    let (value, masked) = match field {
        Field::Username => (&form.username, false),
        Field::Password => (&form.password, !form.reveal_password),
    };

    let border = if focused { ACCENT } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    // Keep the cursor visible in narrow boxes by scrolling the text left.
    let cursor = value.cursor_column(masked) as u16;
    let scroll = cursor.saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(value.display(masked))
            .block(block)
            .scroll((0, scroll)),
        area,
    );

    if focused {
        frame.set_cursor_position((inner.x + cursor - scroll, inner.y));
    }
}

fn status_lines(form: &LoginForm, pending: bool, spinner_frame: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(2);
    if pending {
        lines.push(Line::from(Span::styled(
            format!("{} Signing in…", spinner(spinner_frame)),
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::common::TextField;

    fn draw(form: &LoginForm, pending: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_login(frame, frame.area(), form, pending, 0))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_renders_form_chrome() {
        let screen = draw(&LoginForm::default(), false);
        assert!(screen.contains("Welcome Back"));
        assert!(screen.contains("Username"));
        assert!(screen.contains("Log In"));
        assert!(screen.contains("Sign Up"));
    }

    #[test]
    fn test_password_is_masked_until_revealed() {
        let mut form = LoginForm {
            username: TextField::new("test"),
            password: TextField::new("hunter22"),
            ..LoginForm::default()
        };
        let screen = draw(&form, false);
        assert!(!screen.contains("hunter22"));
        assert!(screen.contains("••••••••"));

        form.reveal_password = true;
        let screen = draw(&form, false);
        assert!(screen.contains("hunter22"));
    }

    #[test]
    fn test_pending_replaces_error() {
        let form = LoginForm {
            error: Some("Username is required".to_string()),
            ..LoginForm::default()
        };
        let screen = draw(&form, false);
        assert!(screen.contains("Username is required"));

        let screen = draw(&form, true);
        assert!(screen.contains("Signing in"));
        assert!(!screen.contains("Username is required"));
    }
}
