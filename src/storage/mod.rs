//! Storage backends for portfolio content.
//!
//! One uniform contract, two interchangeable implementations: a persistent
//! SQLite store and a transient in-memory store. The variant is chosen once
//! at process start from the loaded [`AppConfig`]; nothing switches at
//! runtime.

mod fixture;
mod memory;
mod sqlite;

pub use fixture::{Fixture, portfolio_fixture};
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    Award, Education, Experience, Message, NewMessage, Profile, Publication, Skill,
    ValidationError,
};
use crate::infra::app_config::AppConfig;

/// Storage handle shared across request handlers.
pub type SharedStorage = Arc<dyn Storage>;

/// Failures surfaced by the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Client-supplied payload failed its shape check.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing store cannot be reached right now.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Any other backend failure.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;

        if let rusqlite::Error::SqliteFailure(failure, _) = &err {
            if matches!(
                failure.code,
                ErrorCode::CannotOpen | ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ) {
                return Self::Unavailable(err.to_string());
            }
        }
        Self::Backend(err.into())
    }
}

/// Uniform data-access contract shared by both storage variants.
///
/// Reads distinguish a legitimately empty store (`Ok` with no data) from a
/// failing one (`Err`); the write path always fails loudly rather than drop
/// a submitted message.
#[async_trait]
pub trait Storage: Send + Sync {
    /// First stored profile row, or `None` on an unseeded store.
    async fn find_profile(&self) -> Result<Option<Profile>, StorageError>;

    async fn list_education(&self) -> Result<Vec<Education>, StorageError>;
    async fn list_experience(&self) -> Result<Vec<Experience>, StorageError>;
    async fn list_skills(&self) -> Result<Vec<Skill>, StorageError>;
    async fn list_awards(&self) -> Result<Vec<Award>, StorageError>;
    async fn list_publications(&self) -> Result<Vec<Publication>, StorageError>;

    /// Validate, assign id and creation timestamp, and append a contact
    /// message.
    async fn create_message(&self, new: NewMessage) -> Result<Message, StorageError>;

    /// Populate an empty store with the fixture dataset.
    ///
    /// No-op when a profile row already exists, so it is safe to call on
    /// every process start. The presence check and the inserts run as one
    /// atomic unit; a failure leaves no partially seeded store behind.
    async fn seed(&self) -> Result<(), StorageError>;
}

/// Choose and open the storage variant for this process.
pub fn open(config: &AppConfig) -> anyhow::Result<SharedStorage> {
    match &config.database_path {
        Some(path) => {
            log::info!("using sqlite store at {}", path.display());
            Ok(Arc::new(SqliteStorage::open(path)?))
        }
        None => {
            log::warn!("no database configured; using the transient in-memory store");
            Ok(Arc::new(MemoryStorage::new()))
        }
    }
}
