// Tauri commands organized by domain

pub mod books;
pub mod form;
pub mod journal;
pub mod lookups;
pub mod settings;

// Re-export all commands for easy registration
pub use books::*;
pub use form::*;
pub use journal::*;
pub use lookups::*;
pub use settings::*;

use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Mutex;

/// Journal path state managed by Tauri.
/// Stores only the database path, never a Connection; each command opens a
/// short-lived connection via connect() and drops it on return.
pub struct DbState(pub Mutex<Option<PathBuf>>);

impl DbState {
    /// Open a short-lived journal DB connection from the stored path.
    /// Returns an error if no journal is open.
    pub fn connect(&self) -> Result<Connection, String> {
        let guard = self.0.lock().map_err(|e| e.to_string())?;
        let db_path = guard.as_ref().ok_or("No journal open")?;
        crate::db::open_existing_db(db_path).map_err(|e| e.to_string())
    }

    /// Get the stored journal path, if any.
    pub fn journal_path(&self) -> Result<Option<PathBuf>, String> {
        let guard = self.0.lock().map_err(|e| e.to_string())?;
        Ok(guard.clone())
    }
}
