use serde::{Deserialize, Serialize};

use crate::domain::error::{FieldCheck, ValidationError};

/// One degree or study period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub degree: String,
    pub institution: String,
    /// Completion year, or "Current" for an ongoing degree.
    pub year: String,
    pub details: Option<String>,
}

/// Insert shape for [`Education`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEducation {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub details: Option<String>,
}

impl NewEducation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut check = FieldCheck::default();
        check.require("degree", &self.degree);
        check.require("institution", &self.institution);
        check.require("year", &self.year);
        check.finish()
    }

    pub fn with_id(self, id: i64) -> Education {
        Education {
            id,
            degree: self.degree,
            institution: self.institution,
            year: self.year,
            details: self.details,
        }
    }
}
