// The fully-populated Add-book form as submitted for saving, plus its
// validation. Validation runs before any database write; a failure names
// the offending field so the front end can highlight it.

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_FICTION, DATE_FORMAT, DEFAULT_SIZE, RATING_MAX};
use crate::db::schema;
use crate::error::FieldError;
use crate::form::fields::FieldId;
use crate::tags;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookForm {
    pub dnf: bool,
    pub name: String,
    pub author: String,
    pub icon_id: Option<i64>,
    pub size_id: Option<i64>,
    pub category_id: Option<i64>,
    pub genre_ids: Vec<i64>,
    pub subgenre_ids: Vec<i64>,
    /// Whether the subgenre section was visible (Fiction selected); hidden
    /// selections are discarded on save.
    pub subgenre_visible: bool,
    pub source_ids: Vec<i64>,
    pub discovery_ids: Vec<i64>,
    pub discovery_text: String,
    pub expectations: String,
    pub expectations_failed: String,
    pub date_start: Option<String>,
    pub date_finish: Option<String>,
    pub rating: u8,
    pub vibes: String,
    pub crush_list: String,
    pub months_later_id: Option<i64>,
    pub reread_id: Option<i64>,
    pub line: String,
    pub reminded: String,
    pub phys_copy: bool,
    pub notes: String,
}

/// Validated values that the save path needs in normalized form.
#[derive(Debug, Clone)]
pub struct ValidatedForm {
    pub name: String,
    pub date_start: Option<String>,
    pub date_finish: Option<String>,
}

fn parse_date(value: &Option<String>, field: FieldId) -> Result<Option<NaiveDate>, FieldError> {
    let raw = match value.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| FieldError {
            field,
            message: format!("Dates must be YYYY-MM-DD, got '{}'", raw),
        })
}

impl BookForm {
    /// Check the form without touching the database. Returns normalized
    /// values on success, the first offending field otherwise.
    pub fn validate(&self) -> Result<ValidatedForm, FieldError> {
        let name = tags::title_case(&self.name);
        if name.is_empty() {
            return Err(FieldError {
                field: FieldId::Name,
                message: "Enter the Name".to_string(),
            });
        }

        if self.rating > RATING_MAX {
            return Err(FieldError {
                field: FieldId::Rating,
                message: format!("Rating must be between 0 and {}", RATING_MAX),
            });
        }

        let start = parse_date(&self.date_start, FieldId::DateStart)?;
        let finish = parse_date(&self.date_finish, FieldId::DateFinish)?;
        if let (Some(start), Some(finish)) = (start, finish) {
            if start > finish {
                return Err(FieldError {
                    field: FieldId::DateStart,
                    message: "Date started can't be later than Date finished".to_string(),
                });
            }
        }

        Ok(ValidatedForm {
            name,
            date_start: start.map(|d| d.format(DATE_FORMAT).to_string()),
            date_finish: finish.map(|d| d.format(DATE_FORMAT).to_string()),
        })
    }
}

/// The form's reset state after a successful save: Fiction and the Novel
/// size preselected, the first option of each radio group checked,
/// everything else cleared.
pub fn default_form(conn: &Connection) -> crate::error::Result<BookForm> {
    let category_id = schema::list_categories(conn)?
        .into_iter()
        .find(|c| c.name == CATEGORY_FICTION)
        .map(|c| c.id);
    let size_id = schema::list_sizes(conn)?
        .into_iter()
        .find(|s| s.name == DEFAULT_SIZE)
        .map(|s| s.id);
    let months_later_id = schema::list_months_later(conn)?.first().map(|r| r.id);
    let reread_id = schema::list_reread(conn)?.first().map(|r| r.id);

    Ok(BookForm {
        category_id,
        size_id,
        months_later_id,
        reread_id,
        // Fiction is the default category, so the subgenre section starts visible.
        subgenre_visible: true,
        ..Default::default()
    })
}

/// Empty text becomes NULL in the database.
pub fn blank_to_none(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
