use serde::{Deserialize, Serialize};

use crate::domain::error::{FieldCheck, ValidationError};

/// The site owner's biography and contact details.
///
/// Conceptually a singleton: the store only ever serves the first row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Store-assigned identifier.
    pub id: i64,
    pub name: String,
    /// Headline shown under the name, e.g. "Pharm D | PhD Scholar".
    pub title: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub orcid: Option<String>,
    pub scopus: Option<String>,
    pub researchid: Option<String>,
}

/// Insert shape for [`Profile`]: everything except the store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub orcid: Option<String>,
    pub scopus: Option<String>,
    pub researchid: Option<String>,
}

impl NewProfile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut check = FieldCheck::default();
        check.require("name", &self.name);
        check.require("title", &self.title);
        check.require("bio", &self.bio);
        check.require("email", &self.email);
        check.require("location", &self.location);
        check.finish()
    }

    pub fn with_id(self, id: i64) -> Profile {
        Profile {
            id,
            name: self.name,
            title: self.title,
            bio: self.bio,
            email: self.email,
            location: self.location,
            linkedin: self.linkedin,
            orcid: self.orcid,
            scopus: self.scopus,
            researchid: self.researchid,
        }
    }
}
