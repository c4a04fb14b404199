use super::DbConn;
use crate::domain::{NewSkill, Skill};
use anyhow::Result;
use rusqlite::Connection;

/// Repository for skill categories.
///
/// The `items` list is stored as a JSON text column.
pub struct SkillRepository {
    conn: DbConn,
}

impl SkillRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn find_all(&self) -> Result<Vec<Skill>> {
        let conn = self
            .conn
            .lock()
            .expect("SkillRepository: failed to acquire database lock");
        let mut stmt = conn.prepare("SELECT id, category, items FROM skills")?;
        let rows = stmt.query_map([], |row| {
            let items_json: String = row.get(2)?;
            Ok(Skill {
                id: row.get(0)?,
                category: row.get(1)?,
                items: serde_json::from_str(&items_json).unwrap_or_default(),
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub(crate) fn insert_with(conn: &Connection, new: &NewSkill) -> Result<Skill> {
        let items_json = serde_json::to_string(&new.items)?;
        conn.execute(
            "INSERT INTO skills (category, items) VALUES (?1, ?2)",
            (&new.category, &items_json),
        )?;
        Ok(new.clone().with_id(conn.last_insert_rowid()))
    }
}
