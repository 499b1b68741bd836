// Lookup and suggestion commands backing the form's option lists.

use tauri::State;

use super::DbState;
use crate::db::schema::{self, LookupRow};
use crate::tags;

#[tauri::command]
pub fn list_sizes(state: State<DbState>) -> Result<Vec<LookupRow>, String> {
    let conn = state.connect()?;
    schema::list_sizes(&conn).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn list_categories(state: State<DbState>) -> Result<Vec<LookupRow>, String> {
    let conn = state.connect()?;
    schema::list_categories(&conn).map_err(|e| e.to_string())
}

/// Genres filtered by the selected category (the first cascade edge).
#[tauri::command]
pub fn list_genres(state: State<DbState>, category_id: i64) -> Result<Vec<LookupRow>, String> {
    let conn = state.connect()?;
    schema::list_genres_by_category(&conn, category_id).map_err(|e| e.to_string())
}

/// Subgenres as the union over all selected genres (the second cascade edge).
#[tauri::command]
pub fn list_subgenres(state: State<DbState>, genre_ids: Vec<i64>) -> Result<Vec<LookupRow>, String> {
    let conn = state.connect()?;
    schema::list_subgenres_by_genres(&conn, &genre_ids).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn list_sources(state: State<DbState>) -> Result<Vec<LookupRow>, String> {
    let conn = state.connect()?;
    schema::list_sources(&conn).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn list_discoveries(state: State<DbState>) -> Result<Vec<LookupRow>, String> {
    let conn = state.connect()?;
    schema::list_discoveries(&conn).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn list_months_later(state: State<DbState>) -> Result<Vec<LookupRow>, String> {
    let conn = state.connect()?;
    schema::list_months_later(&conn).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn list_reread(state: State<DbState>) -> Result<Vec<LookupRow>, String> {
    let conn = state.connect()?;
    schema::list_reread(&conn).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn list_icons(state: State<DbState>) -> Result<Vec<LookupRow>, String> {
    let conn = state.connect()?;
    schema::list_icons(&conn).map_err(|e| e.to_string())
}

/// Author autocomplete for the author line edit.
#[tauri::command]
pub fn suggest_authors(state: State<DbState>, fragment: String) -> Result<Vec<String>, String> {
    let conn = state.connect()?;
    schema::suggest_authors(&conn, &fragment).map_err(|e| e.to_string())
}

/// Vibe autocomplete. Takes the whole live text of the tag field: only the
/// trailing in-progress token is matched, and vibes already present among
/// the completed tokens are excluded.
#[tauri::command]
pub fn suggest_vibes(state: State<DbState>, text: String) -> Result<Vec<String>, String> {
    let conn = state.connect()?;
    let fragment = tags::current_fragment(&text);
    let chosen = tags::completed_tokens(&text);
    schema::suggest_vibes(&conn, &fragment, &chosen).map_err(|e| e.to_string())
}

/// Apply an accepted vibe suggestion to the field text. Returns the
/// rewritten text; the caret goes to the end.
#[tauri::command]
pub fn accept_vibe_suggestion(text: String, choice: String) -> Result<String, String> {
    Ok(tags::accept_suggestion(&text, &choice))
}
