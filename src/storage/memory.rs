//! Transient in-memory storage variant.
//!
//! Fallback for when no database is configured; contents live for the
//! process lifetime only and are lost on restart.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{Storage, StorageError, portfolio_fixture};
use crate::domain::{
    Award, Education, Experience, Message, NewMessage, Profile, Publication, Skill,
};

pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    profile: Option<Profile>,
    education: Vec<Education>,
    experience: Vec<Experience>,
    skills: Vec<Skill>,
    awards: Vec<Award>,
    publications: Vec<Publication>,
    messages: Vec<Message>,
    next_message_id: i64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_message_id: 1,
                ..Inner::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .expect("MemoryStorage: failed to acquire state lock")
    }

    #[cfg(test)]
    fn message_count(&self) -> usize {
        self.lock().messages.len()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn find_profile(&self) -> Result<Option<Profile>, StorageError> {
        Ok(self.lock().profile.clone())
    }

    async fn list_education(&self) -> Result<Vec<Education>, StorageError> {
        Ok(self.lock().education.clone())
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, StorageError> {
        Ok(self.lock().experience.clone())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, StorageError> {
        Ok(self.lock().skills.clone())
    }

    async fn list_awards(&self) -> Result<Vec<Award>, StorageError> {
        Ok(self.lock().awards.clone())
    }

    async fn list_publications(&self) -> Result<Vec<Publication>, StorageError> {
        Ok(self.lock().publications.clone())
    }

    async fn create_message(&self, new: NewMessage) -> Result<Message, StorageError> {
        new.validate()?;

        // Id allocation and the append happen under one lock acquisition,
        // so ids are distinct and strictly increasing across concurrent
        // submissions.
        let mut inner = self.lock();
        let id = inner.next_message_id;
        inner.next_message_id += 1;
        let message = Message {
            id,
            name: new.name,
            email: new.email,
            message: new.message,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn seed(&self) -> Result<(), StorageError> {
        // One lock acquisition covers the presence check and the whole
        // batch append, mirroring the sqlite variant's transaction.
        let mut inner = self.lock();
        if inner.profile.is_some() {
            log::debug!("in-memory store already seeded");
            return Ok(());
        }

        let fixture = portfolio_fixture();
        fixture.validate()?;

        inner.profile = Some(fixture.profile.with_id(1));
        inner.education = number_rows(fixture.education, |row, id| row.with_id(id));
        inner.experience = number_rows(fixture.experience, |row, id| row.with_id(id));
        inner.skills = number_rows(fixture.skills, |row, id| row.with_id(id));
        inner.awards = number_rows(fixture.awards, |row, id| row.with_id(id));
        inner.publications = number_rows(fixture.publications, |row, id| row.with_id(id));

        log::info!("seeded portfolio content into the in-memory store");
        Ok(())
    }
}

/// Assign 1-based ids in insertion order.
fn number_rows<N, T>(rows: Vec<N>, with_id: impl Fn(N, i64) -> T) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| with_id(row, index as i64 + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_twice_keeps_single_fixture() -> anyhow::Result<()> {
        let storage = MemoryStorage::new();

        storage.seed().await?;
        storage.seed().await?;

        let profile = storage.find_profile().await?.expect("profile");
        assert_eq!(profile.id, 1);
        assert_eq!(storage.list_education().await?.len(), 3);
        assert_eq!(storage.list_experience().await?.len(), 5);
        assert_eq!(storage.list_skills().await?.len(), 4);
        assert_eq!(storage.list_awards().await?.len(), 5);
        assert_eq!(storage.list_publications().await?.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_unseeded_reads_are_empty() -> anyhow::Result<()> {
        let storage = MemoryStorage::new();

        assert!(storage.find_profile().await?.is_none());
        assert!(storage.list_education().await?.is_empty());
        assert!(storage.list_publications().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_message_ids_count_up_from_one() -> anyhow::Result<()> {
        let storage = MemoryStorage::new();

        for expected_id in 1..=3 {
            let message = storage
                .create_message(NewMessage {
                    name: "Ada".into(),
                    email: "ada@example.com".into(),
                    message: format!("message {expected_id}"),
                })
                .await?;
            assert_eq!(message.id, expected_id);
            assert!(!message.created_at.is_empty());
        }

        assert_eq!(storage.message_count(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_message_is_not_recorded() {
        let storage = MemoryStorage::new();

        let err = storage
            .create_message(NewMessage {
                name: "Ada".into(),
                email: String::new(),
                message: String::new(),
            })
            .await
            .unwrap_err();

        assert!(
            matches!(err, StorageError::Validation(ref v) if v.fields == vec!["email", "message"])
        );
        assert_eq!(storage.message_count(), 0);
    }
}
