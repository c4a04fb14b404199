use super::DbConn;
use crate::domain::{NewPublication, Publication};
use anyhow::Result;
use rusqlite::Connection;

pub struct PublicationRepository {
    conn: DbConn,
}

impl PublicationRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn find_all(&self) -> Result<Vec<Publication>> {
        let conn = self
            .conn
            .lock()
            .expect("PublicationRepository: failed to acquire database lock");
        let mut stmt =
            conn.prepare("SELECT id, title, journal, year, link, authors FROM publications")?;
        let rows = stmt.query_map([], |row| {
            Ok(Publication {
                id: row.get(0)?,
                title: row.get(1)?,
                journal: row.get(2)?,
                year: row.get(3)?,
                link: row.get(4)?,
                authors: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub(crate) fn insert_with(conn: &Connection, new: &NewPublication) -> Result<Publication> {
        conn.execute(
            "INSERT INTO publications (title, journal, year, link, authors) VALUES (?1, ?2, ?3, ?4, ?5)",
            (&new.title, &new.journal, &new.year, &new.link, &new.authors),
        )?;
        Ok(new.clone().with_id(conn.last_insert_rowid()))
    }
}
