// Book save command: the single write path of the application.

use tauri::State;

use super::DbState;
use crate::form::save::{self, SaveResponse};
use crate::form::state::BookForm;

/// Save one book. Validation failures come back as a normal response with
/// the offending field; database failures roll back in full and surface as
/// a generic error message carrying the underlying text.
#[tauri::command]
pub fn save_book(state: State<DbState>, form: BookForm) -> Result<SaveResponse, String> {
    let mut conn = state.connect()?;
    save::save_book(&mut conn, &form).map_err(|e| {
        log::error!("Save failed: {}", e);
        format!("Save failed: {}", e)
    })
}
