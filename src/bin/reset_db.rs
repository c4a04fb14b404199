use rusqlite::Connection;

const TABLES: [&str; 7] = [
    "messages",
    "publications",
    "awards",
    "skills",
    "experience",
    "education",
    "profile",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run()
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Determine database path
    let db_path = if let Ok(path) = std::env::var("PORTFOLIO_DB_PATH") {
        std::path::PathBuf::from(path)
    } else {
        let cwd = std::env::current_dir().unwrap_or_default();
        cwd.join(".portfolio").join("db.sqlite")
    };

    // Check if database exists
    if !db_path.exists() {
        println!("Database does not exist at: {}", db_path.display());
        println!("No reset needed.");
        return Ok(());
    }

    println!("Connecting to database at: {}", db_path.display());

    let conn = Connection::open(&db_path)?;

    let tables_exist: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='profile'",
        [],
        |row| row.get(0),
    )?;

    if tables_exist == 0 {
        println!("Tables do not exist. No reset needed.");
        return Ok(());
    }

    println!("Current record counts:");
    for table in TABLES {
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        println!("  {table}: {count}");
    }

    for table in TABLES {
        conn.execute(&format!("DELETE FROM {table}"), [])?;
        println!("Cleared {table} table");
    }

    println!("\nAfter reset:");
    let mut remaining = 0i64;
    for table in TABLES {
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        remaining += count;
        println!("  {table}: {count}");
    }

    if remaining == 0 {
        println!("\nDatabase successfully reset! All records have been deleted.");
    } else {
        eprintln!("\nWarning: Some records still exist in the database.");
    }

    println!("Database location: {}", db_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reset_db_run() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();
        unsafe {
            std::env::set_var("PORTFOLIO_DB_PATH", &path);
        }

        // Create the real schema, then a row to clear
        {
            portfolio_api::infra::db::Database::open_at(&path).unwrap();
            let conn = Connection::open(&path).unwrap();
            conn.execute(
                "INSERT INTO education (degree, institution, year) VALUES ('PhD', 'U', '2024')",
                [],
            )
            .unwrap();
        }

        run().unwrap();

        let conn = Connection::open(&path).unwrap();
        let count: i32 = conn
            .query_row("SELECT COUNT(*) FROM education", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);

        unsafe {
            std::env::remove_var("PORTFOLIO_DB_PATH");
        }
    }
}
