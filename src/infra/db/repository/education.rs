use super::DbConn;
use crate::domain::{Education, NewEducation};
use anyhow::Result;
use rusqlite::Connection;

pub struct EducationRepository {
    conn: DbConn,
}

impl EducationRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn find_all(&self) -> Result<Vec<Education>> {
        let conn = self
            .conn
            .lock()
            .expect("EducationRepository: failed to acquire database lock");
        let mut stmt =
            conn.prepare("SELECT id, degree, institution, year, details FROM education")?;
        let rows = stmt.query_map([], |row| {
            Ok(Education {
                id: row.get(0)?,
                degree: row.get(1)?,
                institution: row.get(2)?,
                year: row.get(3)?,
                details: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub(crate) fn insert_with(conn: &Connection, new: &NewEducation) -> Result<Education> {
        conn.execute(
            "INSERT INTO education (degree, institution, year, details) VALUES (?1, ?2, ?3, ?4)",
            (&new.degree, &new.institution, &new.year, &new.details),
        )?;
        Ok(new.clone().with_id(conn.last_insert_rowid()))
    }
}
