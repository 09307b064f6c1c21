//! Form field value objects

use unicode_segmentation::UnicodeSegmentation;

/// A single text field with its configuration and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(label: &str, is_multiline: bool) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            is_multiline,
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Text as the form reports it to the view model
    pub fn snapshot(&self) -> Option<String> {
        Some(self.value.clone())
    }

    /// Push a character to the field value.
    ///
    /// Newlines are dropped on single-line fields.
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last user-visible character
    pub fn pop_char(&mut self) {
        if let Some((idx, _)) = self.value.grapheme_indices(true).next_back() {
            self.value.truncate(idx);
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty() {
        let field = FormField::text("Title", false);
        assert_eq!(field.as_text(), "");
        assert_eq!(field.snapshot(), Some(String::new()));
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text("Title", false);
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text("Title", false);
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_pop_removes_whole_grapheme() {
        let mut field = FormField::text("Detail", true);
        for c in "ae\u{301}".chars() {
            field.push_char(c);
        }
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_pop_multibyte() {
        let mut field = FormField::text("Title", false);
        for c in "日本".chars() {
            field.push_char(c);
        }
        field.pop_char();
        assert_eq!(field.as_text(), "日");
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut single = FormField::text("Title", false);
        single.push_char('\n');
        assert_eq!(single.as_text(), "");

        let mut multi = FormField::text("Detail", true);
        multi.push_char('\n');
        assert_eq!(multi.as_text(), "\n");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text("Title", false);
        field.push_char('x');
        field.clear();
        assert_eq!(field.display_value(), "");
    }
}
