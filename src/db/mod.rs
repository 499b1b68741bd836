// Database module

pub mod migrations;
pub mod schema;
pub mod seed;


use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::constants::{BUSY_TIMEOUT_MS, DB_FILENAME, JOURNAL_FOLDER};

/// Open (or create) a journal database at the given path.
/// Applies pragmas, runs migrations forward, and seeds lookup data.
pub fn open_db(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(db_path)?;

    // Per-connection pragmas
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
    conn.execute_batch(&format!("PRAGMA busy_timeout = {};", BUSY_TIMEOUT_MS))?;

    migrations::run_migrations(&conn)?;
    seed::seed_lookup_data(&conn)?;

    Ok(conn)
}

/// Open an existing journal database. Errors if the file is missing;
/// a missing journal is fatal for the session, never silently created.
pub fn open_existing_db(db_path: &Path) -> Result<Connection> {
    if !db_path.exists() {
        anyhow::bail!(
            "Journal database not found at {}. Create one first.",
            db_path.display()
        );
    }
    open_db(db_path)
}

/// Default journal location: ~/.reading-journal/journal.db
pub fn default_db_path() -> Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(home.home_dir().join(JOURNAL_FOLDER).join(DB_FILENAME))
}
