//! Alert dialog shown after a registration attempt

use super::base::{render_dialog, DialogConfig};
use crate::state::{Alert, AlertKind, ALERT_OK_LABEL};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the alert with its single OK action
pub fn render_alert_dialog(frame: &mut Frame, alert: &Alert) {
    let color = match alert.kind {
        AlertKind::Success => Color::Green,
        AlertKind::Failure => Color::Red,
    };

    let hint = vec![
        Span::styled(
            format!("[ {ALERT_OK_LABEL} ]"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Enter", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &alert.title,
            title_color: color,
            border_color: color,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
