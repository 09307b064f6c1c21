//! Layout components (form area, status bar)

use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{AppState, RegisterFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState, show_help: bool) {
    let mut spans = vec![];

    // Register button state
    let gate = if state.submit_enabled {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(gate);

    if show_help {
        spans.push(Span::styled(
            get_hints(state),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current focus
fn get_hints(state: &AppState) -> String {
    if state.has_alert() {
        return "Enter:OK".to_string();
    }
    match state.form.focus() {
        RegisterFocus::Title => format!("Tab:next  {SUBMIT_SHORTCUT}:register  Esc:quit"),
        RegisterFocus::Detail => {
            format!("Tab:next  Enter:newline  {SUBMIT_SHORTCUT}:register  Esc:quit")
        }
        RegisterFocus::Button => "Tab:next  Enter:register  Esc:quit".to_string(),
    }
}
