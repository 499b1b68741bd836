// Database schema types and query helpers

use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::constants::SUGGESTION_LIMIT;
use crate::error::Result;

// ----- Lookup rows -----

/// One `(id, label)` pair from a lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRow {
    pub id: i64,
    pub name: String,
}

fn list_lookup(conn: &Connection, sql: &str) -> Result<Vec<LookupRow>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(LookupRow {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

/// Closed enumerations keep declaration (id) order.
pub fn list_sizes(conn: &Connection) -> Result<Vec<LookupRow>> {
    list_lookup(conn, "SELECT id, size_name FROM size ORDER BY id")
}

pub fn list_categories(conn: &Connection) -> Result<Vec<LookupRow>> {
    list_lookup(conn, "SELECT id, category_name FROM category ORDER BY id")
}

pub fn list_sources(conn: &Connection) -> Result<Vec<LookupRow>> {
    list_lookup(conn, "SELECT id, source FROM source ORDER BY id")
}

pub fn list_discoveries(conn: &Connection) -> Result<Vec<LookupRow>> {
    list_lookup(conn, "SELECT id, discovery_name FROM discovery ORDER BY id")
}

pub fn list_months_later(conn: &Connection) -> Result<Vec<LookupRow>> {
    list_lookup(conn, "SELECT id, name FROM months_later ORDER BY id")
}

pub fn list_reread(conn: &Connection) -> Result<Vec<LookupRow>> {
    list_lookup(conn, "SELECT id, name FROM reread ORDER BY id")
}

pub fn list_icons(conn: &Connection) -> Result<Vec<LookupRow>> {
    list_lookup(conn, "SELECT id, name FROM icon ORDER BY name")
}

/// Genres for one category, lexicographic.
pub fn list_genres_by_category(conn: &Connection, category_id: i64) -> Result<Vec<LookupRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, genre_name FROM genre WHERE category_id = ?1 ORDER BY genre_name",
    )?;
    let rows = stmt.query_map(params![category_id], |row| {
        Ok(LookupRow {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

/// Union of subgenres over a set of genre ids (the multi-selected genres),
/// lexicographic. Empty input yields an empty list without touching the DB.
pub fn list_subgenres_by_genres(conn: &Connection, genre_ids: &[i64]) -> Result<Vec<LookupRow>> {
    if genre_ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; genre_ids.len()].join(",");
    let sql = format!(
        "SELECT id, subgenre_name FROM subgenre WHERE genre_id IN ({}) ORDER BY subgenre_name",
        placeholders
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(genre_ids.iter()), |row| {
        Ok(LookupRow {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

// ----- Suggestions -----

/// Top author names containing the fragment, case-insensitively.
pub fn suggest_authors(conn: &Connection, fragment: &str) -> Result<Vec<String>> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Ok(Vec::new());
    }
    let like = format!("%{}%", fragment);
    let mut stmt = conn.prepare(
        "SELECT author_name FROM author WHERE author_name LIKE ?1
         ORDER BY author_name LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![like, SUGGESTION_LIMIT as i64], |row| row.get(0))?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

/// Top vibe names containing the fragment, minus names already chosen
/// earlier in the tag field (compared case-insensitively).
pub fn suggest_vibes(conn: &Connection, fragment: &str, exclude: &[String]) -> Result<Vec<String>> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Ok(Vec::new());
    }
    let like = format!("%{}%", fragment);
    let mut stmt = conn.prepare(
        "SELECT vibe_name FROM vibe WHERE vibe_name LIKE ?1
         ORDER BY vibe_name LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![like, SUGGESTION_LIMIT as i64], |row| row.get(0))?;
    let chosen: Vec<String> = exclude.iter().map(|s| s.to_lowercase()).collect();
    let suggestions = rows
        .collect::<std::result::Result<Vec<String>, _>>()?
        .into_iter()
        .filter(|name| !chosen.contains(&name.to_lowercase()))
        .collect();
    Ok(suggestions)
}

// ----- Find-or-create (upsert by natural key) -----

/// Find an author by name or create it, returning the id.
/// Lookup is case-insensitive; blank input is a no-op returning None.
pub fn find_or_create_author(conn: &Connection, name: &str) -> Result<Option<i64>> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM author WHERE lower(author_name) = lower(?1)",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    if let Some(id) = existing {
        return Ok(Some(id));
    }
    conn.execute("INSERT INTO author(author_name) VALUES (?1)", params![name])?;
    Ok(Some(conn.last_insert_rowid()))
}

/// Find a vibe by name or create it with prefilled = 0, returning the id.
/// Lookup is case-insensitive; blank input is a no-op returning None.
pub fn find_or_create_vibe(conn: &Connection, name: &str) -> Result<Option<i64>> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM vibe WHERE lower(vibe_name) = lower(?1)",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    if let Some(id) = existing {
        return Ok(Some(id));
    }
    conn.execute(
        "INSERT INTO vibe(vibe_name, prefilled) VALUES (?1, 0)",
        params![name],
    )?;
    Ok(Some(conn.last_insert_rowid()))
}

// ----- Books -----

/// Resolved field values for one new book row. Every optional field maps
/// to NULL when absent; dates are ISO `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub dnf: bool,
    pub name: String,
    pub author: Option<i64>,
    pub size: Option<i64>,
    pub category: Option<i64>,
    pub genre: Option<i64>,
    pub subgenre: Option<i64>,
    pub source: Option<i64>,
    pub discovery: Option<i64>,
    pub discovery_text: Option<String>,
    pub icon: Option<i64>,
    pub expectations: Option<String>,
    pub expectations_failed: Option<String>,
    pub date_start: Option<String>,
    pub date_finish: Option<String>,
    pub rating: u8,
    pub crush_list: Option<String>,
    pub months_later: Option<i64>,
    pub reread: Option<i64>,
    pub line: Option<String>,
    pub reminded: Option<String>,
    pub phys_copy: bool,
    pub notes: Option<String>,
}

pub fn insert_book(conn: &Connection, book: &NewBook) -> Result<i64> {
    conn.execute(
        "INSERT INTO books (dnf, name, author, size, category, genre, subgenre, source,
                            discovery, discovery_text, icon, expectations, expectations_failed,
                            date_start, date_finish, rating, crush_list, months_later, reread,
                            line, reminded, phys_copy, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17,
                 ?18, ?19, ?20, ?21, ?22, ?23)",
        params![
            book.dnf as i64,
            book.name,
            book.author,
            book.size,
            book.category,
            book.genre,
            book.subgenre,
            book.source,
            book.discovery,
            book.discovery_text,
            book.icon,
            book.expectations,
            book.expectations_failed,
            book.date_start,
            book.date_finish,
            book.rating as i64,
            book.crush_list,
            book.months_later,
            book.reread,
            book.line,
            book.reminded,
            book.phys_copy as i64,
            book.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// A stored book row, as read back for display and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub dnf: bool,
    pub name: String,
    pub author: Option<i64>,
    pub size: Option<i64>,
    pub category: Option<i64>,
    pub genre: Option<i64>,
    pub subgenre: Option<i64>,
    pub source: Option<i64>,
    pub discovery: Option<i64>,
    pub discovery_text: Option<String>,
    pub date_start: Option<String>,
    pub date_finish: Option<String>,
    pub rating: Option<i64>,
    pub months_later: Option<i64>,
    pub reread: Option<i64>,
    pub phys_copy: bool,
    pub notes: Option<String>,
    pub remember_check_due_at: Option<String>,
}

pub fn get_book(conn: &Connection, id: i64) -> Result<Option<Book>> {
    let result = conn
        .query_row(
            "SELECT id, dnf, name, author, size, category, genre, subgenre, source, discovery,
                    discovery_text, date_start, date_finish, rating, months_later, reread,
                    phys_copy, notes, remember_check_due_at
             FROM books WHERE id = ?1",
            params![id],
            |row| {
                Ok(Book {
                    id: row.get(0)?,
                    dnf: row.get::<_, i64>(1)? != 0,
                    name: row.get(2)?,
                    author: row.get(3)?,
                    size: row.get(4)?,
                    category: row.get(5)?,
                    genre: row.get(6)?,
                    subgenre: row.get(7)?,
                    source: row.get(8)?,
                    discovery: row.get(9)?,
                    discovery_text: row.get(10)?,
                    date_start: row.get(11)?,
                    date_finish: row.get(12)?,
                    rating: row.get(13)?,
                    months_later: row.get(14)?,
                    reread: row.get(15)?,
                    phys_copy: row.get::<_, i64>(16)? != 0,
                    notes: row.get(17)?,
                    remember_check_due_at: row.get(18)?,
                })
            },
        )
        .optional()?;
    Ok(result)
}

pub fn count_books(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
    Ok(count)
}

// ----- Book vibes -----

/// Associate a vibe with a book; duplicate associations are ignored.
pub fn add_book_vibe(conn: &Connection, book_id: i64, vibe_id: i64) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO book_vibes(book_id, vibe_id) VALUES (?1, ?2)",
        params![book_id, vibe_id],
    )?;
    Ok(())
}

pub fn list_book_vibe_names(conn: &Connection, book_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT v.vibe_name FROM book_vibes bv
         JOIN vibe v ON v.id = bv.vibe_id
         WHERE bv.book_id = ?1
         ORDER BY v.vibe_name",
    )?;
    let rows = stmt.query_map(params![book_id], |row| row.get(0))?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

// ----- Field settings -----

/// One per-field visibility toggle for the Add book form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSetting {
    pub id: i64,
    pub name: String,
    pub enabled: bool,
}

pub fn list_field_settings(conn: &Connection) -> Result<Vec<FieldSetting>> {
    let mut stmt = conn.prepare(
        "SELECT o.id, o.name, COALESCE(s.value, 1) FROM settings_options o
         LEFT JOIN settings s ON s.parameter_id = o.id
         ORDER BY o.id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(FieldSetting {
            id: row.get(0)?,
            name: row.get(1)?,
            enabled: row.get::<_, i64>(2)? != 0,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

/// Flip one form-field toggle by its settings_options name.
pub fn set_field_setting(conn: &Connection, name: &str, enabled: bool) -> Result<()> {
    let updated = conn.execute(
        "UPDATE settings SET value = ?1
         WHERE parameter_id = (SELECT id FROM settings_options WHERE name = ?2)",
        params![enabled as i64, name],
    )?;
    if updated == 0 {
        return Err(crate::error::JournalError::UnknownSetting(name.to_string()));
    }
    Ok(())
}
