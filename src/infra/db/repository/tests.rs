use crate::domain::{
    NewAward, NewEducation, NewExperience, NewMessage, NewProfile, NewPublication, NewSkill,
};
use crate::infra::db::Database;

fn sample_profile() -> NewProfile {
    NewProfile {
        name: "Test Person".into(),
        title: "Researcher".into(),
        bio: "Bio".into(),
        email: "test@example.com".into(),
        location: "Somewhere".into(),
        linkedin: Some("https://linkedin.com/in/test".into()),
        orcid: None,
        scopus: None,
        researchid: None,
    }
}

#[test]
fn test_profile_repository_singleton_read() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.profile_repo();

    assert!(repo.find_first()?.is_none());

    let conn = db.connection();
    let inserted = {
        let guard = conn.lock().unwrap();
        crate::infra::db::repository::ProfileRepository::insert_with(&guard, &sample_profile())?
    };
    assert_eq!(inserted.id, 1);

    let found = repo.find_first()?.expect("profile row");
    assert_eq!(found.name, "Test Person");
    assert_eq!(found.linkedin.as_deref(), Some("https://linkedin.com/in/test"));
    assert_eq!(found.orcid, None);
    Ok(())
}

#[test]
fn test_profile_repository_returns_first_of_many() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let conn = db.connection();
    {
        let guard = conn.lock().unwrap();
        let mut first = sample_profile();
        first.name = "First".into();
        crate::infra::db::repository::ProfileRepository::insert_with(&guard, &first)?;
        let mut second = sample_profile();
        second.name = "Second".into();
        crate::infra::db::repository::ProfileRepository::insert_with(&guard, &second)?;
    }

    let found = db.profile_repo().find_first()?.expect("profile row");
    assert_eq!(found.name, "First");
    Ok(())
}

#[test]
fn test_education_repository_roundtrip() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let conn = db.connection();
    {
        let guard = conn.lock().unwrap();
        crate::infra::db::repository::EducationRepository::insert_with(
            &guard,
            &NewEducation {
                degree: "PhD".into(),
                institution: "Some University".into(),
                year: "Current".into(),
                details: Some("Somewhere".into()),
            },
        )?;
    }

    let all = db.education_repo().find_all()?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].degree, "PhD");
    assert_eq!(all[0].year, "Current");
    Ok(())
}

#[test]
fn test_experience_and_award_repositories() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let conn = db.connection();
    {
        let guard = conn.lock().unwrap();
        crate::infra::db::repository::ExperienceRepository::insert_with(
            &guard,
            &NewExperience {
                role: "Mentor".into(),
                company: "Lab".into(),
                period: "2024".into(),
                // Empty string and absent are distinct optional values;
                // both must survive the roundtrip as-is.
                description: Some(String::new()),
            },
        )?;
        crate::infra::db::repository::AwardRepository::insert_with(
            &guard,
            &NewAward {
                title: "Prize".into(),
                issuer: "Committee".into(),
                date: "Jul 2017".into(),
                description: None,
            },
        )?;
    }

    let experience = db.experience_repo().find_all()?;
    assert_eq!(experience.len(), 1);
    assert_eq!(experience[0].description.as_deref(), Some(""));

    let awards = db.award_repo().find_all()?;
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0].issuer, "Committee");
    Ok(())
}

#[test]
fn test_skill_repository_preserves_item_order() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let conn = db.connection();
    {
        let guard = conn.lock().unwrap();
        crate::infra::db::repository::SkillRepository::insert_with(
            &guard,
            &NewSkill {
                category: "Tools".into(),
                items: vec!["SPSS".into(), "SAS Programming".into(), "MS Office".into()],
            },
        )?;
    }

    let skills = db.skill_repo().find_all()?;
    assert_eq!(skills.len(), 1);
    assert_eq!(
        skills[0].items,
        vec!["SPSS", "SAS Programming", "MS Office"]
    );
    Ok(())
}

#[test]
fn test_publication_repository_optional_fields() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let conn = db.connection();
    {
        let guard = conn.lock().unwrap();
        crate::infra::db::repository::PublicationRepository::insert_with(
            &guard,
            &NewPublication {
                title: "Thesis".into(),
                journal: None,
                year: Some("2024".into()),
                link: None,
                authors: Some("Swathi NL".into()),
            },
        )?;
    }

    let publications = db.publication_repo().find_all()?;
    assert_eq!(publications.len(), 1);
    assert_eq!(publications[0].journal, None);
    assert_eq!(publications[0].year.as_deref(), Some("2024"));
    Ok(())
}

#[test]
fn test_message_repository_assigns_id_and_timestamp() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.message_repo();

    let first = repo.insert(&NewMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello".into(),
    })?;
    let second = repo.insert(&NewMessage {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        message: "Hi".into(),
    })?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(!first.created_at.is_empty());
    assert!(second.created_at >= first.created_at);
    Ok(())
}
