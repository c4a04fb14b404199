//! Persistent storage variant over SQLite.

use std::path::Path;

use async_trait::async_trait;

use super::{Storage, StorageError, portfolio_fixture};
use crate::domain::{
    Award, Education, Experience, Message, NewMessage, Profile, Publication, Skill,
};
use crate::infra::db::Database;
use crate::infra::db::repository::{
    AwardRepository, EducationRepository, ExperienceRepository, ProfileRepository,
    PublicationRepository, SkillRepository,
};

/// Durable store backed by a SQLite file; survives process restarts.
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            db: Database::open_at(path)?,
        })
    }

    /// In-memory SQLite database, for exercising the persistent code path
    /// in tests without touching disk.
    pub fn open_in_memory() -> anyhow::Result<Self> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }
}

/// Recover the sqlite error behind an infra `anyhow::Error` so that
/// connection-level failures map to `Unavailable` rather than `Backend`.
fn map_backend(err: anyhow::Error) -> StorageError {
    match err.downcast::<rusqlite::Error>() {
        Ok(sqlite_err) => sqlite_err.into(),
        Err(other) => StorageError::Backend(other),
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn find_profile(&self) -> Result<Option<Profile>, StorageError> {
        self.db.profile_repo().find_first().map_err(map_backend)
    }

    async fn list_education(&self) -> Result<Vec<Education>, StorageError> {
        self.db.education_repo().find_all().map_err(map_backend)
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, StorageError> {
        self.db.experience_repo().find_all().map_err(map_backend)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, StorageError> {
        self.db.skill_repo().find_all().map_err(map_backend)
    }

    async fn list_awards(&self) -> Result<Vec<Award>, StorageError> {
        self.db.award_repo().find_all().map_err(map_backend)
    }

    async fn list_publications(&self) -> Result<Vec<Publication>, StorageError> {
        self.db.publication_repo().find_all().map_err(map_backend)
    }

    async fn create_message(&self, new: NewMessage) -> Result<Message, StorageError> {
        new.validate()?;
        self.db.message_repo().insert(&new).map_err(map_backend)
    }

    async fn seed(&self) -> Result<(), StorageError> {
        let fixture = portfolio_fixture();
        fixture.validate()?;

        let conn = self.db.connection();
        let mut guard = conn
            .lock()
            .expect("SqliteStorage: failed to acquire database lock");
        let tx = guard.transaction()?;

        // The profile row is the "already seeded" sentinel. Checking it
        // inside the same transaction as the inserts closes the double-seed
        // race between two concurrent startups and makes a failed seed
        // invisible.
        if ProfileRepository::find_first_with(&tx)?.is_some() {
            log::debug!("sqlite store already seeded");
            return Ok(());
        }

        ProfileRepository::insert_with(&tx, &fixture.profile).map_err(map_backend)?;
        for row in &fixture.education {
            EducationRepository::insert_with(&tx, row).map_err(map_backend)?;
        }
        for row in &fixture.experience {
            ExperienceRepository::insert_with(&tx, row).map_err(map_backend)?;
        }
        for row in &fixture.skills {
            SkillRepository::insert_with(&tx, row).map_err(map_backend)?;
        }
        for row in &fixture.awards {
            AwardRepository::insert_with(&tx, row).map_err(map_backend)?;
        }
        for row in &fixture.publications {
            PublicationRepository::insert_with(&tx, row).map_err(map_backend)?;
        }
        tx.commit()?;

        log::info!("seeded portfolio content into the sqlite store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(storage: &SqliteStorage, table: &str) -> i64 {
        let conn = storage.db.connection();
        let guard = conn.lock().unwrap();
        guard
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .unwrap()
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() -> anyhow::Result<()> {
        let storage = SqliteStorage::open_in_memory()?;

        storage.seed().await?;
        storage.seed().await?;

        assert_eq!(table_count(&storage, "profile"), 1);
        assert_eq!(table_count(&storage, "education"), 3);
        assert_eq!(table_count(&storage, "experience"), 5);
        assert_eq!(table_count(&storage, "skills"), 4);
        assert_eq!(table_count(&storage, "awards"), 5);
        assert_eq!(table_count(&storage, "publications"), 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_reads_on_unseeded_store_are_empty_not_errors() -> anyhow::Result<()> {
        let storage = SqliteStorage::open_in_memory()?;

        assert!(storage.find_profile().await?.is_none());
        assert!(storage.list_education().await?.is_empty());
        assert!(storage.list_experience().await?.is_empty());
        assert!(storage.list_skills().await?.is_empty());
        assert!(storage.list_awards().await?.is_empty());
        assert!(storage.list_publications().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_message_persists_row() -> anyhow::Result<()> {
        let storage = SqliteStorage::open_in_memory()?;

        let message = storage
            .create_message(NewMessage {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hello".into(),
            })
            .await?;

        assert_eq!(message.id, 1);
        assert!(!message.created_at.is_empty());
        assert_eq!(table_count(&storage, "messages"), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_message_rejects_blank_payload() -> anyhow::Result<()> {
        let storage = SqliteStorage::open_in_memory()?;

        let err = storage
            .create_message(NewMessage {
                name: String::new(),
                email: "a@b.com".into(),
                message: "hi".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Validation(ref v) if v.fields == vec!["name"]));
        assert_eq!(table_count(&storage, "messages"), 0);
        Ok(())
    }
}
