//! Registration form rendering

use super::field_renderer::{draw_error_label, draw_field};
use crate::model::{DETAIL_MAX_LEN, DETAIL_MIN_LEN, TITLE_MAX_LEN};
use crate::state::{AppState, RegisterFocus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the register button
const BUTTON_WIDTH: u16 = 16;

/// Draw the registration form
pub fn draw_register_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" 登録 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Length(1),             // Title error
            Constraint::Length(6),             // Detail
            Constraint::Length(1),             // Detail error
            Constraint::Length(1),             // Rules
            Constraint::Length(BUTTON_HEIGHT), // Register
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let focus = state.form.focus();

    draw_field(
        frame,
        chunks[0],
        &state.form.title,
        focus == RegisterFocus::Title,
    );
    draw_error_label(frame, chunks[1], &state.title_error);

    draw_field(
        frame,
        chunks[2],
        &state.form.detail,
        focus == RegisterFocus::Detail,
    );
    draw_error_label(frame, chunks[3], &state.detail_error);

    let rules = Paragraph::new(Span::styled(
        format!(
            " タイトル: {TITLE_MAX_LEN}文字以内 / 本文: {DETAIL_MIN_LEN}〜{DETAIL_MAX_LEN}文字"
        ),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(rules, chunks[4]);

    let button_area = Rect {
        width: BUTTON_WIDTH.min(chunks[5].width),
        ..chunks[5]
    };
    render_button(
        frame,
        button_area,
        "登録",
        focus == RegisterFocus::Button,
        state.submit_enabled,
    );
}
