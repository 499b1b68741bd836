// Journal lifecycle commands: create, open, close.
// A missing journal file is fatal for open_journal; only create_journal
// makes a new one (the setup step the original kept as a separate script).

use std::path::PathBuf;
use tauri::State;

use super::DbState;
use crate::db;

fn resolve_path(path: Option<String>) -> Result<PathBuf, String> {
    match path {
        Some(p) => Ok(PathBuf::from(p)),
        None => db::default_db_path().map_err(|e| e.to_string()),
    }
}

/// Create a fresh journal database (migrated and seeded) and open it.
#[tauri::command]
pub fn create_journal(state: State<DbState>, path: Option<String>) -> Result<String, String> {
    let db_path = resolve_path(path)?;
    if db_path.exists() {
        return Err(format!("Journal already exists at {}", db_path.display()));
    }

    let conn = db::open_db(&db_path).map_err(|e| e.to_string())?;
    drop(conn);

    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    *guard = Some(db_path.clone());

    log::info!("Created journal at {}", db_path.display());
    Ok(db_path.display().to_string())
}

/// Open an existing journal. Errors if the file is missing; the main window
/// must not come up against a journal that was never set up.
#[tauri::command]
pub fn open_journal(state: State<DbState>, path: Option<String>) -> Result<String, String> {
    let db_path = resolve_path(path)?;

    // Validate before storing the path: migrates forward, checks version.
    let conn = db::open_existing_db(&db_path).map_err(|e| e.to_string())?;
    drop(conn);

    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    *guard = Some(db_path.clone());

    log::info!("Opened journal at {}", db_path.display());
    Ok(db_path.display().to_string())
}

#[tauri::command]
pub fn close_journal(state: State<DbState>) -> Result<(), String> {
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    *guard = None;
    Ok(())
}

#[tauri::command]
pub fn get_journal_path(state: State<DbState>) -> Result<Option<String>, String> {
    Ok(state
        .journal_path()?
        .map(|p| p.display().to_string()))
}
