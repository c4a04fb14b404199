use super::DbConn;
use crate::domain::{Message, NewMessage};
use anyhow::Result;

/// Repository for contact-form messages. Append-only.
pub struct MessageRepository {
    conn: DbConn,
}

impl MessageRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Append a message, assigning its id and creation timestamp.
    pub fn insert(&self, new: &NewMessage) -> Result<Message> {
        let conn = self
            .conn
            .lock()
            .expect("MessageRepository: failed to acquire database lock");
        let created_at = chrono::Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO messages (name, email, message, created_at) VALUES (?1, ?2, ?3, ?4)",
            (&new.name, &new.email, &new.message, &created_at),
        )?;
        Ok(Message {
            id: conn.last_insert_rowid(),
            name: new.name.clone(),
            email: new.email.clone(),
            message: new.message.clone(),
            created_at,
        })
    }
}
