use std::path::PathBuf;

use portfolio_api::storage::{SqliteStorage, Storage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Determine database path
    let db_path = if let Ok(path) = std::env::var("PORTFOLIO_DB_PATH") {
        PathBuf::from(path)
    } else {
        let cwd = std::env::current_dir().unwrap_or_default();
        cwd.join(".portfolio").join("db.sqlite")
    };

    println!("Connecting to database at: {}", db_path.display());

    let storage = SqliteStorage::open(&db_path)?;
    storage.seed().await?;

    let conn = rusqlite::Connection::open(&db_path)?;
    println!("Record counts after seeding:");
    for table in [
        "profile",
        "education",
        "experience",
        "skills",
        "awards",
        "publications",
        "messages",
    ] {
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        println!("  {table}: {count}");
    }

    println!("\nSeed complete. Re-running this command is a no-op.");
    println!("Database location: {}", db_path.display());

    Ok(())
}
