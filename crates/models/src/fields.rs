//! Column-level checks shared by all entities.

use crate::errors::ModelError;

/// Every text column is `VARCHAR(255)`.
pub const MAX_TEXT_LEN: usize = 255;

/// Reject values the column cannot hold. `None` is a valid (null) value.
pub fn validate_text(field: &str, value: Option<&str>) -> Result<(), ModelError> {
    match value {
        Some(v) if v.chars().count() > MAX_TEXT_LEN => Err(ModelError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_null_and_short_values() {
        assert!(validate_text("siteName", None).is_ok());
        assert!(validate_text("siteName", Some("")).is_ok());
        assert!(validate_text("siteName", Some(&"x".repeat(MAX_TEXT_LEN))).is_ok());
    }

    #[test]
    fn rejects_overlong_value() {
        let err = validate_text("siteName", Some(&"x".repeat(MAX_TEXT_LEN + 1))).unwrap_err();
        assert!(err.to_string().contains("siteName"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 255 two-byte characters still fit
        assert!(validate_text("siteName", Some(&"é".repeat(MAX_TEXT_LEN))).is_ok());
    }
}
