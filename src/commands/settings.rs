// Form field visibility settings, stored in the journal itself.

use tauri::State;

use super::DbState;
use crate::db::schema::{self, FieldSetting};

#[tauri::command]
pub fn list_field_settings(state: State<DbState>) -> Result<Vec<FieldSetting>, String> {
    let conn = state.connect()?;
    schema::list_field_settings(&conn).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_field_setting(
    state: State<DbState>,
    name: String,
    enabled: bool,
) -> Result<(), String> {
    let conn = state.connect()?;
    schema::set_field_setting(&conn, &name, enabled).map_err(|e| e.to_string())
}
