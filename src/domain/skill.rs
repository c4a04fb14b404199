use serde::{Deserialize, Serialize};

use crate::domain::error::{FieldCheck, ValidationError};

/// A named skill category with its ordered list of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub category: String,
    pub items: Vec<String>,
}

/// Insert shape for [`Skill`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSkill {
    pub category: String,
    pub items: Vec<String>,
}

impl NewSkill {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut check = FieldCheck::default();
        check.require("category", &self.category);
        check.require_list("items", &self.items);
        check.finish()
    }

    pub fn with_id(self, id: i64) -> Skill {
        Skill {
            id,
            category: self.category,
            items: self.items,
        }
    }
}
