//! Application state definitions
//!
//! Everything here is widget state: what the terminal shows. Derived values
//! (error labels, the enabled flag, alerts) are written by the output
//! bindings in `app.rs`, never computed here.

use super::forms::RegisterForm;

/// Alert title after a successful registration
pub const REGISTERED_MESSAGE: &str = "登録が完了しました。";
/// Alert title after a failed registration
pub const REGISTER_FAILED_MESSAGE: &str = "登録に失敗しました。";
/// Label of the alert's acknowledgement action
pub const ALERT_OK_LABEL: &str = "OK";

/// Kind of modal alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Failure,
}

/// Modal alert with a single OK action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub kind: AlertKind,
}

impl Alert {
    /// Alert for a registration outcome
    pub fn for_registration(success: bool) -> Self {
        if success {
            Self {
                title: REGISTERED_MESSAGE.to_string(),
                kind: AlertKind::Success,
            }
        } else {
            Self {
                title: REGISTER_FAILED_MESSAGE.to_string(),
                kind: AlertKind::Failure,
            }
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: RegisterForm,
    /// Text of the label under the title field
    pub title_error: String,
    /// Text of the label under the detail field
    pub detail_error: String,
    /// Whether the register button is enabled
    pub submit_enabled: bool,
    /// Alert currently shown over the form
    pub alert: Option<Alert>,
}

impl AppState {
    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    /// Dismiss the alert via its OK action
    pub fn acknowledge_alert(&mut self) {
        self.alert = None;
    }
}
