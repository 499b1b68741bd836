// The atomic save path.
//
// Validation happens before any write. Everything else — author upsert, the
// books insert, vibe upserts and associations — runs inside one transaction,
// so a failure anywhere leaves the journal untouched.

use rusqlite::Connection;
use serde::Serialize;

use crate::db::schema::{self, NewBook};
use crate::error::{FieldError, Result};
use crate::form::state::{blank_to_none, BookForm};
use crate::tags;

/// Outcome of a save attempt. Validation failures are part of the normal
/// response so the front end can highlight the field; database failures
/// surface as errors from `save_book` itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum SaveResponse {
    Saved { book_id: i64 },
    Invalid { field_error: FieldError },
}

/// Validate and persist one book with its vibe associations.
pub fn save_book(conn: &mut Connection, form: &BookForm) -> Result<SaveResponse> {
    let validated = match form.validate() {
        Ok(v) => v,
        Err(field_error) => return Ok(SaveResponse::Invalid { field_error }),
    };

    let tx = conn.transaction()?;

    // Author: find-or-create from the normalized name, if any was entered.
    let author_id = schema::find_or_create_author(&tx, &tags::title_case(&form.author))?;

    // The schema carries single FKs while the form multi-selects: the first
    // selection wins, the rest are discarded. Hidden subgenre selections
    // (Non-fiction) are dropped entirely.
    let genre_id = form.genre_ids.first().copied();
    let subgenre_id = if form.subgenre_visible {
        form.subgenre_ids.first().copied()
    } else {
        None
    };
    let source_id = form.source_ids.first().copied();
    let discovery_id = form.discovery_ids.first().copied();

    let book = NewBook {
        dnf: form.dnf,
        name: validated.name.clone(),
        author: author_id,
        size: form.size_id,
        category: form.category_id,
        genre: genre_id,
        subgenre: subgenre_id,
        source: source_id,
        discovery: discovery_id,
        discovery_text: blank_to_none(&form.discovery_text),
        icon: form.icon_id,
        expectations: blank_to_none(&form.expectations),
        expectations_failed: blank_to_none(&form.expectations_failed),
        date_start: validated.date_start,
        date_finish: validated.date_finish,
        rating: form.rating,
        crush_list: blank_to_none(&form.crush_list),
        months_later: form.months_later_id,
        reread: form.reread_id,
        line: blank_to_none(&form.line),
        reminded: blank_to_none(&form.reminded),
        phys_copy: form.phys_copy,
        notes: blank_to_none(&form.notes),
    };
    let book_id = schema::insert_book(&tx, &book)?;

    // Vibes: normalized, deduplicated tokens; each found-or-created, then
    // associated (duplicate associations ignored).
    for token in tags::final_tokens(&form.vibes) {
        if let Some(vibe_id) = schema::find_or_create_vibe(&tx, &token)? {
            schema::add_book_vibe(&tx, book_id, vibe_id)?;
        }
    }

    tx.commit()?;

    log::info!("Saved book {} ({})", book_id, validated.name);
    Ok(SaveResponse::Saved { book_id })
}
