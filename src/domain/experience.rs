use serde::{Deserialize, Serialize};

use crate::domain::error::{FieldCheck, ValidationError};

/// One professional position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub role: String,
    pub company: String,
    /// Free-form date range, e.g. "Dec 2023 - Present".
    pub period: String,
    pub description: Option<String>,
}

/// Insert shape for [`Experience`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExperience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: Option<String>,
}

impl NewExperience {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut check = FieldCheck::default();
        check.require("role", &self.role);
        check.require("company", &self.company);
        check.require("period", &self.period);
        check.finish()
    }

    pub fn with_id(self, id: i64) -> Experience {
        Experience {
            id,
            role: self.role,
            company: self.company,
            period: self.period,
            description: self.description,
        }
    }
}
