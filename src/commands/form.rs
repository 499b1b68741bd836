// Declarative form description for the front end.

use serde::Serialize;
use tauri::State;

use super::DbState;
use crate::db::schema;
use crate::form::fields::{self, FieldDescriptor};
use crate::form::state::{self, BookForm};

/// A field descriptor merged with its stored visibility toggle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    #[serde(flatten)]
    pub descriptor: FieldDescriptor,
    pub enabled: bool,
}

/// Describe the Add-book form: every field in display order, with its
/// option source, dependency edge, and current enabled state.
#[tauri::command]
pub fn describe_form(state: State<DbState>) -> Result<Vec<FieldView>, String> {
    let conn = state.connect()?;
    let settings = schema::list_field_settings(&conn).map_err(|e| e.to_string())?;

    let views = fields::form_fields()
        .into_iter()
        .map(|descriptor| {
            let enabled = match descriptor.settings_option {
                Some(option) => settings
                    .iter()
                    .find(|s| s.name == option)
                    .map(|s| s.enabled)
                    .unwrap_or(true),
                // Fields without a toggle (Name) are always on.
                None => true,
            };
            FieldView { descriptor, enabled }
        })
        .collect();

    Ok(views)
}

/// The form values to restore after a reset (or on first display).
#[tauri::command]
pub fn default_form(state: State<DbState>) -> Result<BookForm, String> {
    let conn = state.connect()?;
    state::default_form(&conn).map_err(|e| e.to_string())
}
