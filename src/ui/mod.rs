//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let state = app.state();
    let (form_area, status_area) = layout::create_layout(frame.area());

    forms::draw_register_form(frame, form_area, &state);
    layout::draw_status_bar(frame, status_area, &state, app.config.show_help());

    // Modal alert goes on top of everything
    if let Some(alert) = &state.alert {
        components::render_alert_dialog(frame, alert);
    }
}
