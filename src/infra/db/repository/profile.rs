use super::DbConn;
use crate::domain::{NewProfile, Profile};
use anyhow::Result;
use rusqlite::Connection;

/// Repository for the singleton profile row.
pub struct ProfileRepository {
    conn: DbConn,
}

impl ProfileRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// First stored profile row, or `None` on an unseeded store.
    pub fn find_first(&self) -> Result<Option<Profile>> {
        let conn = self
            .conn
            .lock()
            .expect("ProfileRepository: failed to acquire database lock");
        Self::find_first_with(&conn).map_err(Into::into)
    }

    pub(crate) fn find_first_with(conn: &Connection) -> rusqlite::Result<Option<Profile>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, title, bio, email, location, linkedin, orcid, scopus, researchid \
             FROM profile ORDER BY id LIMIT 1",
        )?;
        let mut rows = stmt.query_map([], |row| {
            Ok(Profile {
                id: row.get(0)?,
                name: row.get(1)?,
                title: row.get(2)?,
                bio: row.get(3)?,
                email: row.get(4)?,
                location: row.get(5)?,
                linkedin: row.get(6)?,
                orcid: row.get(7)?,
                scopus: row.get(8)?,
                researchid: row.get(9)?,
            })
        })?;
        rows.next().transpose()
    }

    pub(crate) fn insert_with(conn: &Connection, new: &NewProfile) -> Result<Profile> {
        conn.execute(
            r#"
            INSERT INTO profile (name, title, bio, email, location, linkedin, orcid, scopus, researchid)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            (
                &new.name,
                &new.title,
                &new.bio,
                &new.email,
                &new.location,
                &new.linkedin,
                &new.orcid,
                &new.scopus,
                &new.researchid,
            ),
        )?;
        Ok(new.clone().with_id(conn.last_insert_rowid()))
    }
}
