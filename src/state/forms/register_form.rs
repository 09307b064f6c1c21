//! Registration form: title, detail and the register button

use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Focus position within the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFocus {
    Title,
    Detail,
    Button,
}

#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub title: FormField,
    pub detail: FormField,
    pub active_field_index: usize,
}

impl RegisterForm {
    pub const TITLE_INDEX: usize = 0;
    pub const DETAIL_INDEX: usize = 1;
    pub const BUTTON_INDEX: usize = 2;

    pub fn new() -> Self {
        Self {
            title: FormField::text("タイトル", false),
            detail: FormField::text("本文", true),
            active_field_index: Self::TITLE_INDEX,
        }
    }

    pub fn focus(&self) -> RegisterFocus {
        match self.active_field_index {
            Self::TITLE_INDEX => RegisterFocus::Title,
            Self::DETAIL_INDEX => RegisterFocus::Detail,
            _ => RegisterFocus::Button,
        }
    }

    /// Empty both text fields without moving focus
    pub fn clear_fields(&mut self) {
        self.title.clear();
        self.detail.clear();
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn field_count(&self) -> usize {
        3 // title, detail, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTON_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            Self::TITLE_INDEX => Some(&mut self.title),
            Self::DETAIL_INDEX => Some(&mut self.detail),
            _ => None,
        }
    }
}
