//! Title and detail validation
//!
//! Lengths are measured in extended grapheme clusters after trimming, so a
//! field reads as long as the user sees it.

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Maximum title length
pub const TITLE_MAX_LEN: usize = 10;
/// Minimum detail length
pub const DETAIL_MIN_LEN: usize = 5;
/// Maximum detail length
pub const DETAIL_MAX_LEN: usize = 10;

/// Reason a field failed validation.
///
/// The `Display` text is the message rendered under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("タイトルを入力してください。")]
    TitleEmpty,
    #[error("10文字以内で入力してください。")]
    TitleTooLong,
    #[error("本文を入力してください。")]
    DetailEmpty,
    #[error("5文字以上で入力してください。")]
    DetailTooShort,
    #[error("10文字以内で入力してください。")]
    DetailTooLong,
}

/// Result of checking one field. Failure is an expected value, not a fault.
pub type ValidationOutcome = Result<(), ValidationError>;

/// Count user-visible characters
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Validate the title field
pub fn validate_title(text: Option<&str>) -> ValidationOutcome {
    let trimmed = match text.map(str::trim) {
        None | Some("") => return Err(ValidationError::TitleEmpty),
        Some(trimmed) => trimmed,
    };

    if grapheme_len(trimmed) > TITLE_MAX_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

/// Validate the detail field
pub fn validate_detail(text: Option<&str>) -> ValidationOutcome {
    let trimmed = match text.map(str::trim) {
        None | Some("") => return Err(ValidationError::DetailEmpty),
        Some(trimmed) => trimmed,
    };

    match grapheme_len(trimmed) {
        n if n < DETAIL_MIN_LEN => Err(ValidationError::DetailTooShort),
        n if n > DETAIL_MAX_LEN => Err(ValidationError::DetailTooLong),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod title {
        use super::*;

        #[test]
        fn test_none_is_empty() {
            assert_eq!(validate_title(None), Err(ValidationError::TitleEmpty));
        }

        #[test]
        fn test_empty_string_is_empty() {
            assert_eq!(validate_title(Some("")), Err(ValidationError::TitleEmpty));
        }

        #[test]
        fn test_whitespace_only_is_empty() {
            assert_eq!(validate_title(Some(" ")), Err(ValidationError::TitleEmpty));
            assert_eq!(
                validate_title(Some(" \t  ")),
                Err(ValidationError::TitleEmpty)
            );
            // Ideographic space
            assert_eq!(
                validate_title(Some("\u{3000}")),
                Err(ValidationError::TitleEmpty)
            );
        }

        #[test]
        fn test_exactly_ten_is_ok() {
            assert_eq!(validate_title(Some("HelloWorld")), Ok(()));
        }

        #[test]
        fn test_eleven_is_too_long() {
            assert_eq!(
                validate_title(Some("HelloWorld!")),
                Err(ValidationError::TitleTooLong)
            );
        }

        #[test]
        fn test_surrounding_whitespace_not_counted() {
            assert_eq!(validate_title(Some("  HelloWorld  ")), Ok(()));
        }

        #[test]
        fn test_inner_whitespace_counted() {
            assert_eq!(
                validate_title(Some("Hello World")),
                Err(ValidationError::TitleTooLong)
            );
        }

        #[test]
        fn test_single_char_is_ok() {
            assert_eq!(validate_title(Some("a")), Ok(()));
        }

        #[test]
        fn test_japanese_counts_characters_not_bytes() {
            // 10 characters, 30 bytes
            assert_eq!(validate_title(Some("あいうえおかきくけこ")), Ok(()));
            assert_eq!(
                validate_title(Some("あいうえおかきくけこさ")),
                Err(ValidationError::TitleTooLong)
            );
        }

        #[test]
        fn test_combining_marks_count_once() {
            // "e" + combining acute, ten times
            let title = "e\u{301}".repeat(10);
            assert_eq!(validate_title(Some(&title)), Ok(()));
        }
    }

    mod detail {
        use super::*;

        #[test]
        fn test_none_is_empty() {
            assert_eq!(validate_detail(None), Err(ValidationError::DetailEmpty));
        }

        #[test]
        fn test_blank_is_empty() {
            assert_eq!(validate_detail(Some("")), Err(ValidationError::DetailEmpty));
            assert_eq!(
                validate_detail(Some("   ")),
                Err(ValidationError::DetailEmpty)
            );
            assert_eq!(
                validate_detail(Some("\n\n")),
                Err(ValidationError::DetailEmpty)
            );
        }

        #[test]
        fn test_four_is_too_short() {
            assert_eq!(
                validate_detail(Some("Hell")),
                Err(ValidationError::DetailTooShort)
            );
        }

        #[test]
        fn test_range_five_to_ten_is_ok() {
            for len in DETAIL_MIN_LEN..=DETAIL_MAX_LEN {
                let text = "x".repeat(len);
                assert_eq!(validate_detail(Some(&text)), Ok(()), "length {len}");
            }
        }

        #[test]
        fn test_eleven_is_too_long() {
            assert_eq!(
                validate_detail(Some("HelloWorld!")),
                Err(ValidationError::DetailTooLong)
            );
        }

        #[test]
        fn test_trim_applies_before_length() {
            assert_eq!(
                validate_detail(Some("  abc  ")),
                Err(ValidationError::DetailTooShort)
            );
            assert_eq!(validate_detail(Some("\nHello\n")), Ok(()));
        }

        #[test]
        fn test_inner_newline_counted() {
            assert_eq!(validate_detail(Some("ab\ncd")), Ok(()));
        }
    }

    mod messages {
        use super::*;

        #[test]
        fn test_title_messages() {
            assert_eq!(
                ValidationError::TitleEmpty.to_string(),
                "タイトルを入力してください。"
            );
            assert_eq!(
                ValidationError::TitleTooLong.to_string(),
                "10文字以内で入力してください。"
            );
        }

        #[test]
        fn test_detail_messages() {
            assert_eq!(
                ValidationError::DetailEmpty.to_string(),
                "本文を入力してください。"
            );
            assert_eq!(
                ValidationError::DetailTooShort.to_string(),
                "5文字以上で入力してください。"
            );
            assert_eq!(
                ValidationError::DetailTooLong.to_string(),
                "10文字以内で入力してください。"
            );
        }
    }

    #[test]
    fn test_grapheme_len() {
        assert_eq!(grapheme_len(""), 0);
        assert_eq!(grapheme_len("abc"), 3);
        assert_eq!(grapheme_len("日本語"), 3);
        assert_eq!(grapheme_len("👨‍👩‍👧"), 1);
    }
}
