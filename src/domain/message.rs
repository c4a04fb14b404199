use serde::{Deserialize, Serialize};

use crate::domain::error::{FieldCheck, ValidationError};

/// A contact-form submission. Append-only; no exposed operation reads these
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Store-assigned creation timestamp in RFC3339 format.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Insert shape for [`Message`]: id and timestamp are store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewMessage {
    /// `email` only has to be non-empty here; format checks belong to the
    /// front-end.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut check = FieldCheck::default();
        check.require("name", &self.name);
        check.require("email", &self.email);
        check.require("message", &self.message);
        check.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_message_passes() {
        let new = NewMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello!".into(),
        };
        assert!(new.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected_by_field() {
        let new = NewMessage {
            name: String::new(),
            email: "a@b.com".into(),
            message: "hi".into(),
        };
        let err = new.validate().unwrap_err();
        assert_eq!(err.fields, vec!["name"]);
    }

    #[test]
    fn test_message_serializes_created_at_as_camel_case() {
        let message = Message {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello!".into(),
            created_at: "2025-01-01T00:00:00+00:00".into(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["createdAt"], "2025-01-01T00:00:00+00:00");
        assert!(json.get("created_at").is_none());
    }
}
