//! Validation errors raised when an insert payload fails its shape check.

use thiserror::Error;

/// An insert payload was missing one or more required fields.
///
/// `fields` lists every offending field so callers can report all of them
/// at once instead of failing on the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing or empty required field(s): {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

/// Accumulates required-field violations while checking an insert shape.
#[derive(Debug, Default)]
pub struct FieldCheck {
    missing: Vec<&'static str>,
}

impl FieldCheck {
    pub fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.missing.push(field);
        }
    }

    /// A required list must contain at least one non-blank entry.
    pub fn require_list(&mut self, field: &'static str, values: &[String]) {
        if values.iter().all(|v| v.trim().is_empty()) {
            self.missing.push(field);
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: self.missing,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_all_fields() {
        let mut check = FieldCheck::default();
        check.require("name", "");
        check.require("email", "a@b.com");
        check.require("message", "   ");
        let err = check.finish().unwrap_err();

        assert_eq!(err.fields, vec!["name", "message"]);
        assert_eq!(
            err.to_string(),
            "missing or empty required field(s): name, message"
        );
    }

    #[test]
    fn test_field_check_passes_clean_input() {
        let mut check = FieldCheck::default();
        check.require("name", "Alice");
        check.require_list("items", &["one".into()]);
        assert!(check.finish().is_ok());
    }
}
