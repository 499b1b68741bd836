// Database migrations
// Migrations are forward-only. Never edit or delete a migration after it ships.
// Lookup seed rows live in seed.rs, not here; migrations only shape the schema.

use anyhow::Result;
use rusqlite::Connection;

/// All migrations in order. Each migration is a SQL string.
const MIGRATIONS: &[&str] = &[
    // Migration 1: Initial schema
    r#"
    -- Lookup / reference tables
    CREATE TABLE author (
        id INTEGER PRIMARY KEY,
        author_name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE size (
        id INTEGER PRIMARY KEY,
        size_name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE category (
        id INTEGER PRIMARY KEY,
        category_name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE genre (
        id INTEGER PRIMARY KEY,
        category_id INTEGER NOT NULL,
        genre_name TEXT NOT NULL,
        UNIQUE(category_id, genre_name),
        FOREIGN KEY(category_id) REFERENCES category(id) ON DELETE RESTRICT ON UPDATE CASCADE
    );

    CREATE TABLE subgenre (
        id INTEGER PRIMARY KEY,
        genre_id INTEGER NOT NULL,
        subgenre_name TEXT NOT NULL,
        UNIQUE(genre_id, subgenre_name),
        FOREIGN KEY(genre_id) REFERENCES genre(id) ON DELETE RESTRICT ON UPDATE CASCADE
    );

    CREATE TABLE source (
        id INTEGER PRIMARY KEY,
        source TEXT NOT NULL UNIQUE
    );

    CREATE TABLE discovery (
        id INTEGER PRIMARY KEY,
        discovery_name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE icon (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        path TEXT NOT NULL,
        builtin INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE vibe (
        id INTEGER PRIMARY KEY,
        vibe_name TEXT NOT NULL UNIQUE,
        prefilled INTEGER NOT NULL DEFAULT 1
    );

    CREATE TABLE months_later (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE reread (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    );

    -- Per-field visibility toggles for the Add book form
    CREATE TABLE settings_options (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE settings (
        parameter_id INTEGER PRIMARY KEY,
        value INTEGER NOT NULL DEFAULT 1,
        FOREIGN KEY(parameter_id) REFERENCES settings_options(id) ON DELETE CASCADE ON UPDATE CASCADE
    );

    -- Books (main table)
    CREATE TABLE books (
        id INTEGER PRIMARY KEY,
        dnf INTEGER NOT NULL DEFAULT 0,
        name TEXT NOT NULL,
        author INTEGER,
        size INTEGER,
        category INTEGER,
        genre INTEGER,
        subgenre INTEGER,
        source INTEGER,
        discovery INTEGER,
        discovery_text TEXT,
        icon INTEGER,
        expectations TEXT,
        expectations_failed TEXT,
        date_start DATE,
        date_finish DATE,
        rating INTEGER,
        crush_list TEXT,
        months_later INTEGER,
        reread INTEGER,
        line TEXT,
        reminded TEXT,
        phys_copy INTEGER NOT NULL DEFAULT 0,
        notes TEXT,
        remember_check_due_at DATE,
        FOREIGN KEY(author) REFERENCES author(id) ON DELETE SET NULL ON UPDATE CASCADE,
        FOREIGN KEY(size) REFERENCES size(id) ON DELETE SET NULL ON UPDATE CASCADE,
        FOREIGN KEY(category) REFERENCES category(id) ON DELETE SET NULL ON UPDATE CASCADE,
        FOREIGN KEY(genre) REFERENCES genre(id) ON DELETE SET NULL ON UPDATE CASCADE,
        FOREIGN KEY(subgenre) REFERENCES subgenre(id) ON DELETE SET NULL ON UPDATE CASCADE,
        FOREIGN KEY(source) REFERENCES source(id) ON DELETE SET NULL ON UPDATE CASCADE,
        FOREIGN KEY(discovery) REFERENCES discovery(id) ON DELETE SET NULL ON UPDATE CASCADE,
        FOREIGN KEY(icon) REFERENCES icon(id) ON DELETE SET NULL ON UPDATE CASCADE,
        FOREIGN KEY(months_later) REFERENCES months_later(id) ON DELETE SET NULL ON UPDATE CASCADE,
        FOREIGN KEY(reread) REFERENCES reread(id) ON DELETE SET NULL ON UPDATE CASCADE
    );

    -- Many-to-many: books <-> vibes
    CREATE TABLE book_vibes (
        book_id INTEGER NOT NULL,
        vibe_id INTEGER NOT NULL,
        PRIMARY KEY (book_id, vibe_id),
        FOREIGN KEY(book_id) REFERENCES books(id) ON DELETE CASCADE ON UPDATE CASCADE,
        FOREIGN KEY(vibe_id) REFERENCES vibe(id) ON DELETE RESTRICT ON UPDATE CASCADE
    );

    -- Indexes for common queries
    CREATE INDEX idx_books_name ON books(name);
    CREATE INDEX idx_books_author ON books(author);
    CREATE INDEX idx_books_dates ON books(date_start, date_finish);
    CREATE INDEX idx_books_genres ON books(category, genre, subgenre);

    -- remember_check_due_at = date_finish + 90 days, owned by the storage
    -- layer so every write path stays consistent.
    CREATE TRIGGER trg_books_set_remember_after_insert
    AFTER INSERT ON books
    WHEN NEW.date_finish IS NOT NULL
    BEGIN
      UPDATE books
      SET remember_check_due_at = date(NEW.date_finish, '+90 day')
      WHERE id = NEW.id;
    END;

    CREATE TRIGGER trg_books_set_remember_after_update
    AFTER UPDATE OF date_finish ON books
    WHEN NEW.date_finish IS NOT NULL
    BEGIN
      UPDATE books
      SET remember_check_due_at = date(NEW.date_finish, '+90 day')
      WHERE id = NEW.id;
    END;
    "#,
];

/// Get current schema version from database
fn get_schema_version(conn: &Connection) -> Result<u32> {
    let version: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

/// Run all pending migrations (crash-safe)
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;
    let target_version = MIGRATIONS.len() as u32;

    // Refuse to open a DB created by a newer build
    if current_version > target_version {
        anyhow::bail!(
            "Journal schema version {} is newer than this build supports (max {}). Please upgrade Reading Journal.",
            current_version,
            target_version
        );
    }

    if current_version == target_version {
        return Ok(());
    }

    // Apply pending migrations one-by-one
    for (i, migration) in MIGRATIONS.iter().enumerate() {
        let migration_version = (i + 1) as u32;
        if migration_version <= current_version {
            continue;
        }

        conn.execute_batch(migration)?;
        conn.execute_batch(&format!("PRAGMA user_version = {}", migration_version))?;

        log::info!("Applied migration {}", migration_version);
    }

    Ok(())
}
