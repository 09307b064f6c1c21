//! Field validation rules for the registration form

mod traits;
mod validation;

pub use traits::{LengthValidator, Validator};
pub use validation::{
    grapheme_len, validate_detail, validate_title, ValidationError, ValidationOutcome,
    DETAIL_MAX_LEN, DETAIL_MIN_LEN, TITLE_MAX_LEN,
};

#[cfg(test)]
pub use traits::MockValidator;
