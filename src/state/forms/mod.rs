//! Form domain layer
//!
//! Widget-side state for the registration form: field text and focus.

mod field;
mod register_form;

pub use field::FormField;
pub use register_form::{Form, RegisterFocus, RegisterForm};
