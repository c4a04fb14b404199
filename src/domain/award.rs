use serde::{Deserialize, Serialize};

use crate::domain::error::{FieldCheck, ValidationError};

/// One award or honor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub id: i64,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: Option<String>,
}

/// Insert shape for [`Award`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAward {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: Option<String>,
}

impl NewAward {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut check = FieldCheck::default();
        check.require("title", &self.title);
        check.require("issuer", &self.issuer);
        check.require("date", &self.date);
        check.finish()
    }

    pub fn with_id(self, id: i64) -> Award {
        Award {
            id,
            title: self.title,
            issuer: self.issuer,
            date: self.date,
            description: self.description,
        }
    }
}
