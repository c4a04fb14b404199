use super::DbConn;
use crate::domain::{Award, NewAward};
use anyhow::Result;
use rusqlite::Connection;

pub struct AwardRepository {
    conn: DbConn,
}

impl AwardRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn find_all(&self) -> Result<Vec<Award>> {
        let conn = self
            .conn
            .lock()
            .expect("AwardRepository: failed to acquire database lock");
        let mut stmt = conn.prepare("SELECT id, title, issuer, date, description FROM awards")?;
        let rows = stmt.query_map([], |row| {
            Ok(Award {
                id: row.get(0)?,
                title: row.get(1)?,
                issuer: row.get(2)?,
                date: row.get(3)?,
                description: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub(crate) fn insert_with(conn: &Connection, new: &NewAward) -> Result<Award> {
        conn.execute(
            "INSERT INTO awards (title, issuer, date, description) VALUES (?1, ?2, ?3, ?4)",
            (&new.title, &new.issuer, &new.date, &new.description),
        )?;
        Ok(new.clone().with_id(conn.last_insert_rowid()))
    }
}
