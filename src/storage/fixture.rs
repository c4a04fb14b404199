//! Fixture dataset used to populate an empty store.
//!
//! Field values mirror the live site's content; the seed routine inserts
//! them exactly once.

use crate::domain::{
    NewAward, NewEducation, NewExperience, NewProfile, NewPublication, NewSkill, ValidationError,
};

/// The complete seed dataset: one profile plus the five content lists.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub profile: NewProfile,
    pub education: Vec<NewEducation>,
    pub experience: Vec<NewExperience>,
    pub skills: Vec<NewSkill>,
    pub awards: Vec<NewAward>,
    pub publications: Vec<NewPublication>,
}

impl Fixture {
    /// Every fixture row must satisfy its insert shape before seeding.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.profile.validate()?;
        for row in &self.education {
            row.validate()?;
        }
        for row in &self.experience {
            row.validate()?;
        }
        for row in &self.skills {
            row.validate()?;
        }
        for row in &self.awards {
            row.validate()?;
        }
        for row in &self.publications {
            row.validate()?;
        }
        Ok(())
    }
}

/// The site owner's portfolio content.
pub fn portfolio_fixture() -> Fixture {
    Fixture {
        profile: NewProfile {
            name: "NL. Swathi".into(),
            title: "Pharm D | PhD Scholar".into(),
            bio: "Dedicated researcher specializing in molecular docking, virtual screening, \
                  and patient counseling. Experienced in clinical research, epidemiology, and \
                  medical writing. Passionate about advancing healthcare through precision \
                  medicine and innovative drug design."
                .into(),
            email: "nlswathi2001@gmail.com".into(),
            location: "Chittoor, Andhra Pradesh, India".into(),
            linkedin: Some("https://linkedin.com/in/swathi-naraganti-06ba64203".into()),
            orcid: Some("https://orcid.org/0000-0002-3695-0732".into()),
            scopus: Some("https://www.scopus.com/authid/detail.uri?authorId=58336556300".into()),
            researchid: Some("https://researchid.co/nl.swathi".into()),
        },
        education: vec![
            NewEducation {
                degree: "PhD".into(),
                institution: "Manipal College of Nursing, Manipal Academy of Higher Education"
                    .into(),
                year: "Current".into(),
                details: Some("Manipal, Karnataka, India".into()),
            },
            NewEducation {
                degree: "Pharm D (Doctor Of Pharmacy)".into(),
                institution: "Jawaharlal Nehru Technological University, Anantapuramu".into(),
                year: "2025".into(),
                details: Some("Chittoor, India".into()),
            },
            NewEducation {
                degree: "Intermediate BiPc".into(),
                institution: "Sri Surya Junior College".into(),
                year: "2016".into(),
                details: Some("Completed with 98.3%".into()),
            },
        ],
        experience: vec![
            NewExperience {
                role: "Research Mentor and Article Editor".into(),
                company: "The Good Research Project".into(),
                period: "June 2024 - Present".into(),
                description: Some(
                    "Led and coordinated multiple research projects, mentored junior \
                     researchers, and managed article review processes."
                        .into(),
                ),
            },
            NewExperience {
                role: "Clinical Research Coordinator".into(),
                company: "Kairos R and D solutions".into(),
                period: "Dec 2023 - Present".into(),
                description: None,
            },
            NewExperience {
                role: "Content Writer and Leader".into(),
                company: "ThinkRoman".into(),
                period: "Dec 2022 - Present".into(),
                description: Some(
                    "Produced educational content focused on healthcare and research \
                     advancements."
                        .into(),
                ),
            },
            NewExperience {
                role: "Public Health and Epidemiology Research Intern".into(),
                company: "ICMR-NIE".into(),
                period: "Oct 2024".into(),
                description: Some(
                    "Conducted systematic review and meta-analysis in diabetes.".into(),
                ),
            },
            NewExperience {
                role: "Medical Writer and Research Trainee".into(),
                company: "EJY Health".into(),
                period: "Oct 2022 - July 2023".into(),
                description: None,
            },
        ],
        skills: vec![
            NewSkill {
                category: "Computational Biology".into(),
                items: vec![
                    "Molecular Docking".into(),
                    "Virtual Screening".into(),
                    "Library Preparation".into(),
                    "Systems Biology".into(),
                ],
            },
            NewSkill {
                category: "Clinical & Research".into(),
                items: vec![
                    "Patient Counseling".into(),
                    "Clinical Research".into(),
                    "Systematic Review".into(),
                    "Epidemiology".into(),
                ],
            },
            NewSkill {
                category: "Tools & Software".into(),
                items: vec![
                    "SPSS".into(),
                    "SAS Programming".into(),
                    "Bioinformatics Tools".into(),
                    "MS Office".into(),
                ],
            },
            NewSkill {
                category: "Communication".into(),
                items: vec![
                    "Medical Writing".into(),
                    "Scientific Writing".into(),
                    "Public Speaking".into(),
                    "Project Management".into(),
                ],
            },
        ],
        awards: vec![
            NewAward {
                title: "INSPIRE Award".into(),
                issuer: "Andhra Pradesh Government".into(),
                date: "Jul 2017".into(),
                description: Some(
                    "Awarded to top 1% students after Intermediate Examination".into(),
                ),
            },
            NewAward {
                title: "Second Prize in Pharmaceutical Chemistry".into(),
                issuer: "Bharath University".into(),
                date: "Sep 2022".into(),
                description: Some(
                    "Oral Presentation on In Silico Molecular Docking for Mycobacterium \
                     Tuberculosis"
                        .into(),
                ),
            },
            NewAward {
                title: "Rx Doctor Award".into(),
                issuer: "Rx Doctor".into(),
                date: "Dec 2023".into(),
                description: Some("Honored for outstanding contributions to patient care".into()),
            },
            NewAward {
                title: "First Prize in Patient Information Leaflet".into(),
                issuer: "International Conference".into(),
                date: "Dec 2023".into(),
                description: Some(
                    "Secured first place for creating an innovative patient information leaflet"
                        .into(),
                ),
            },
            NewAward {
                title: "Academic Excellence Award".into(),
                issuer: "Sri Surya Junior College".into(),
                date: "Jul 2017".into(),
                description: Some("Top scorer in Intermediate BiPC in Chittoor Range".into()),
            },
        ],
        publications: vec![
            NewPublication {
                title: "Review of Pancreatic Cells Trans Differentiation in Diabetes Treatment"
                    .into(),
                journal: Some("Internet".into()),
                year: Some("2022".into()),
                link: Some("https://www.lcebyhkzz.cn//article/view/856/328.php".into()),
                authors: Some("Swathi NL, et al.".into()),
            },
            NewPublication {
                title: "Personalized Interventions for Managing Diabetes Distress and Improving \
                        Glycemic Control"
                    .into(),
                journal: Some("World J Pharm Res".into()),
                year: Some("2024".into()),
                link: Some("https://www.wjpr.net/abstract_show/24219".into()),
                authors: Some("Swathi NL, et al.".into()),
            },
            NewPublication {
                title: "Precision Medicine and Epigenetics: Personalized Diabetes Care".into(),
                journal: Some("IGI Global".into()),
                year: Some("2024".into()),
                link: Some(
                    "https://www.igi-global.com/chapter/precision-medicine-and-epigenetics/341073"
                        .into(),
                ),
                authors: Some("Swathi NL, et al.".into()),
            },
            NewPublication {
                title: "Targeting the Invasion Protein A from the Type Three Secretion System \
                        of Salmonella Typhi"
                    .into(),
                journal: Some("Thesis".into()),
                year: Some("2024".into()),
                link: Some("https://zenodo.org/records/10826101".into()),
                authors: Some("Swathi NL".into()),
            },
            NewPublication {
                title: "Mindfulness Training for Cardiovascular Health in Type 2 Diabetes".into(),
                journal: Some("Current Problems in Cardiology".into()),
                year: Some("2024".into()),
                link: Some("https://doi.org/10.1016/j.cpcardiol.2024.102833".into()),
                authors: Some("Gandhi, A., ... Swathi NL.".into()),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_row_counts() {
        let fixture = portfolio_fixture();
        assert_eq!(fixture.education.len(), 3);
        assert_eq!(fixture.experience.len(), 5);
        assert_eq!(fixture.skills.len(), 4);
        assert_eq!(fixture.awards.len(), 5);
        assert_eq!(fixture.publications.len(), 5);
    }

    #[test]
    fn test_fixture_passes_validation() {
        assert!(portfolio_fixture().validate().is_ok());
    }
}
