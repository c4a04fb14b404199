use serde::{Deserialize, Serialize};

use crate::domain::error::{FieldCheck, ValidationError};

/// One published paper, chapter, or thesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: i64,
    pub title: String,
    pub journal: Option<String>,
    pub year: Option<String>,
    pub link: Option<String>,
    pub authors: Option<String>,
}

/// Insert shape for [`Publication`]. Only the title is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPublication {
    pub title: String,
    pub journal: Option<String>,
    pub year: Option<String>,
    pub link: Option<String>,
    pub authors: Option<String>,
}

impl NewPublication {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut check = FieldCheck::default();
        check.require("title", &self.title);
        check.finish()
    }

    pub fn with_id(self, id: i64) -> Publication {
        Publication {
            id,
            title: self.title,
            journal: self.journal,
            year: self.year,
            link: self.link,
            authors: self.authors,
        }
    }
}
