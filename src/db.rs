use anyhow::Context;
use rusqlite::Connection;
use std::{fs, path::Path};
use tracing::info;

const SCHEMA: &str = include_str!("../db/schema.sql");
const SEED: &str = include_str!("../db/seed.sql");

pub fn open_database(path: &str) -> anyhow::Result<Connection> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
        }
    }
    let conn = Connection::open(path).with_context(|| format!("Failed to open database {}", path))?;
    info!("Opened database: {}", path);
    Ok(conn)
}

pub fn init_database(conn: &Connection, seed: bool) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)?;
    info!("Database schema initialized successfully");
    if seed {
        conn.execute_batch(SEED)?;
        info!("Reference code values seeded");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM code_values", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn schema_without_seed_is_empty() {
        let conn = Connection::open_in_memory().unwrap();
        init_database(&conn, false).unwrap();
        assert_eq!(count(&conn), 0);
    }

    #[test]
    fn seeding_twice_does_not_duplicate() {
        let conn = Connection::open_in_memory().unwrap();
        init_database(&conn, true).unwrap();
        let first = count(&conn);
        assert!(first > 0);
        init_database(&conn, true).unwrap();
        assert_eq!(count(&conn), first);
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("codes.db");
        let conn = open_database(path.to_str().unwrap()).unwrap();
        init_database(&conn, false).unwrap();
        assert!(path.exists());
    }
}
