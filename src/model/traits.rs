//! Trait abstraction for validation rules to enable mocking in tests

use super::validation::{validate_detail, validate_title, ValidationOutcome};

/// Validation rules applied by the form coordinator
#[cfg_attr(test, mockall::automock)]
pub trait Validator {
    /// Check a title snapshot
    fn validate_title(&self, text: &Option<String>) -> ValidationOutcome;

    /// Check a detail snapshot
    fn validate_detail(&self, text: &Option<String>) -> ValidationOutcome;
}

/// Default rules: trimmed grapheme-length bounds
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthValidator;

impl Validator for LengthValidator {
    fn validate_title(&self, text: &Option<String>) -> ValidationOutcome {
        validate_title(text.as_deref())
    }

    fn validate_detail(&self, text: &Option<String>) -> ValidationOutcome {
        validate_detail(text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValidationError;

    #[test]
    fn test_length_validator_delegates() {
        let validator = LengthValidator;
        assert_eq!(validator.validate_title(&Some("ok".to_string())), Ok(()));
        assert_eq!(
            validator.validate_detail(&Some("ok".to_string())),
            Err(ValidationError::DetailTooShort)
        );
    }

    #[test]
    fn test_length_validator_absent_text() {
        let validator = LengthValidator;
        assert_eq!(
            validator.validate_title(&None),
            Err(ValidationError::TitleEmpty)
        );
        assert_eq!(
            validator.validate_detail(&None),
            Err(ValidationError::DetailEmpty)
        );
    }
}
