//! SQLite database setup and connection management for the portfolio service.
//! Handles database initialization, schema creation, and connection management.

pub mod repository;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Database wrapper that manages the SQLite connection.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create or open the database at a specific path.
    pub fn open_at(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Create an in-memory database (useful for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema.
    ///
    /// Seven flat tables, auto-increment primary keys, no foreign keys
    /// between content tables.
    fn init(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .expect("Database: failed to acquire database lock");
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS profile (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                bio TEXT NOT NULL,
                email TEXT NOT NULL,
                location TEXT NOT NULL,
                linkedin TEXT,
                orcid TEXT,
                scopus TEXT,
                researchid TEXT
            );

            CREATE TABLE IF NOT EXISTS education (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                degree TEXT NOT NULL,
                institution TEXT NOT NULL,
                year TEXT NOT NULL,
                details TEXT
            );

            CREATE TABLE IF NOT EXISTS experience (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                role TEXT NOT NULL,
                company TEXT NOT NULL,
                period TEXT NOT NULL,
                description TEXT
            );

            CREATE TABLE IF NOT EXISTS skills (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL,
                items TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS awards (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                issuer TEXT NOT NULL,
                date TEXT NOT NULL,
                description TEXT
            );

            CREATE TABLE IF NOT EXISTS publications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                journal TEXT,
                year TEXT,
                link TEXT,
                authors TEXT
            );

            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Get a reference to the connection.
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    pub fn profile_repo(&self) -> repository::ProfileRepository {
        repository::ProfileRepository::new(self.connection())
    }

    pub fn education_repo(&self) -> repository::EducationRepository {
        repository::EducationRepository::new(self.connection())
    }

    pub fn experience_repo(&self) -> repository::ExperienceRepository {
        repository::ExperienceRepository::new(self.connection())
    }

    pub fn skill_repo(&self) -> repository::SkillRepository {
        repository::SkillRepository::new(self.connection())
    }

    pub fn award_repo(&self) -> repository::AwardRepository {
        repository::AwardRepository::new(self.connection())
    }

    pub fn publication_repo(&self) -> repository::PublicationRepository {
        repository::PublicationRepository::new(self.connection())
    }

    pub fn message_repo(&self) -> repository::MessageRepository {
        repository::MessageRepository::new(self.connection())
    }
}
