use super::DbConn;
use crate::domain::{Experience, NewExperience};
use anyhow::Result;
use rusqlite::Connection;

pub struct ExperienceRepository {
    conn: DbConn,
}

impl ExperienceRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn find_all(&self) -> Result<Vec<Experience>> {
        let conn = self
            .conn
            .lock()
            .expect("ExperienceRepository: failed to acquire database lock");
        let mut stmt =
            conn.prepare("SELECT id, role, company, period, description FROM experience")?;
        let rows = stmt.query_map([], |row| {
            Ok(Experience {
                id: row.get(0)?,
                role: row.get(1)?,
                company: row.get(2)?,
                period: row.get(3)?,
                description: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub(crate) fn insert_with(conn: &Connection, new: &NewExperience) -> Result<Experience> {
        conn.execute(
            "INSERT INTO experience (role, company, period, description) VALUES (?1, ?2, ?3, ?4)",
            (&new.role, &new.company, &new.period, &new.description),
        )?;
        Ok(new.clone().with_id(conn.last_insert_rowid()))
    }
}
