// Cascade and save-path tests against an in-memory journal.

use rusqlite::Connection;

use crate::db::schema;
use crate::db::{migrations, seed};
use crate::form::cascade::CascadeState;
use crate::form::fields::FieldId;
use crate::form::save::{save_book, SaveResponse};
use crate::form::state::{default_form, BookForm};

/// Set up an in-memory DB with migrations and seed data applied.
fn setup_test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
    migrations::run_migrations(&conn).unwrap();
    seed::seed_lookup_data(&conn).unwrap();
    conn
}

fn category_id(conn: &Connection, name: &str) -> i64 {
    conn.query_row(
        "SELECT id FROM category WHERE category_name = ?1",
        [name],
        |row| row.get(0),
    )
    .unwrap()
}

fn genre_id(conn: &Connection, category: &str, genre: &str) -> i64 {
    conn.query_row(
        "SELECT g.id FROM genre g JOIN category c ON c.id = g.category_id
         WHERE c.category_name = ?1 AND g.genre_name = ?2",
        [category, genre],
        |row| row.get(0),
    )
    .unwrap()
}

fn subgenre_id(conn: &Connection, genre_id: i64, name: &str) -> i64 {
    conn.query_row(
        "SELECT id FROM subgenre WHERE genre_id = ?1 AND subgenre_name = ?2",
        rusqlite::params![genre_id, name],
        |row| row.get(0),
    )
    .unwrap()
}

// ----- Cascade -----

#[test]
fn test_default_cascade_is_fiction_with_no_selection() {
    let conn = setup_test_db();
    let state = CascadeState::new(&conn).unwrap();
    assert_eq!(state.category().name, "Fiction");
    assert!(state.genre_ids().is_empty());
    assert!(state.subgenre_visible());
    assert_eq!(state.genre_options(&conn).unwrap().len(), 11);
}

#[test]
fn test_category_switch_clears_selection_and_hides_subgenres() {
    let conn = setup_test_db();
    let mut state = CascadeState::new(&conn).unwrap();

    let fantasy = genre_id(&conn, "Fiction", "fantasy");
    let subgenres = state.set_genres(&conn, vec![fantasy]).unwrap();
    assert_eq!(subgenres.len(), 10);
    state
        .set_subgenres(&conn, vec![subgenres[0].id])
        .unwrap();
    assert_eq!(state.subgenre_ids().len(), 1);

    let nonfiction = category_id(&conn, "Non-fiction");
    let genres = state.set_category(&conn, nonfiction).unwrap();

    assert!(state.genre_ids().is_empty());
    assert!(state.subgenre_ids().is_empty());
    assert!(!state.subgenre_visible());
    assert_eq!(genres.len(), 16);
    assert!(genres.iter().any(|g| g.name == "Memoir"));
    assert!(genres.iter().all(|g| g.name != "fantasy"));
}

#[test]
fn test_subgenre_list_is_union_of_selected_genres() {
    let conn = setup_test_db();
    let mut state = CascadeState::new(&conn).unwrap();

    let fantasy = genre_id(&conn, "Fiction", "fantasy");
    let horror = genre_id(&conn, "Fiction", "horror");
    let both = state.set_genres(&conn, vec![fantasy, horror]).unwrap();
    assert_eq!(both.len(), 18); // 10 fantasy + 8 horror
    assert!(both.iter().any(|s| s.name == "High/Epic fantasy"));
    assert!(both.iter().any(|s| s.name == "Cosmic horror"));

    // deselecting everything clears the list
    let none = state.set_genres(&conn, vec![]).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_unreachable_subgenre_selection_is_pruned_on_genre_change() {
    let conn = setup_test_db();
    let mut state = CascadeState::new(&conn).unwrap();

    let fantasy = genre_id(&conn, "Fiction", "fantasy");
    state.set_genres(&conn, vec![fantasy]).unwrap();
    let high_epic = subgenre_id(&conn, fantasy, "High/Epic fantasy");
    state.set_subgenres(&conn, vec![high_epic]).unwrap();

    let horror = genre_id(&conn, "Fiction", "horror");
    state.set_genres(&conn, vec![horror]).unwrap();
    assert!(state.subgenre_ids().is_empty());
}

#[test]
fn test_default_form_preselects_fiction_and_novel() {
    let conn = setup_test_db();
    let form = default_form(&conn).unwrap();

    assert_eq!(form.category_id, Some(category_id(&conn, "Fiction")));
    assert!(form.subgenre_visible);
    assert!(form.genre_ids.is_empty());
    assert!(form.name.is_empty());
    assert_eq!(form.rating, 0);

    let size_name: String = conn
        .query_row(
            "SELECT size_name FROM size WHERE id = ?1",
            [form.size_id.unwrap()],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(size_name, "Novel — 200-450 pages");

    // First radio option checked for the recall questions
    assert_eq!(form.months_later_id, Some(schema::list_months_later(&conn).unwrap()[0].id));
    assert_eq!(form.reread_id, Some(schema::list_reread(&conn).unwrap()[0].id));
}

// ----- Save -----

#[test]
fn test_save_with_empty_name_writes_nothing() {
    let mut conn = setup_test_db();
    let form = BookForm {
        vibes: "Dark, Epic".to_string(),
        ..Default::default()
    };
    let response = save_book(&mut conn, &form).unwrap();
    match response {
        SaveResponse::Invalid { field_error } => {
            assert_eq!(field_error.field, FieldId::Name);
        }
        SaveResponse::Saved { .. } => panic!("empty name must not save"),
    }
    assert_eq!(schema::count_books(&conn).unwrap(), 0);
}

#[test]
fn test_save_with_inverted_dates_writes_nothing() {
    let mut conn = setup_test_db();
    let form = BookForm {
        name: "Some Book".to_string(),
        date_start: Some("2025-02-01".to_string()),
        date_finish: Some("2025-01-01".to_string()),
        ..Default::default()
    };
    let response = save_book(&mut conn, &form).unwrap();
    assert!(matches!(response, SaveResponse::Invalid { .. }));
    assert_eq!(schema::count_books(&conn).unwrap(), 0);
}

#[test]
fn test_save_collapses_multiselect_and_dedupes_vibes() {
    let mut conn = setup_test_db();
    let fiction = category_id(&conn, "Fiction");
    let fantasy = genre_id(&conn, "Fiction", "fantasy");
    let high_epic = subgenre_id(&conn, fantasy, "High/Epic fantasy");

    let form = BookForm {
        name: "The Fifth Season".to_string(),
        author: "N. K. Jemisin".to_string(),
        category_id: Some(fiction),
        genre_ids: vec![fantasy],
        subgenre_ids: vec![high_epic],
        subgenre_visible: true,
        vibes: "dark, Dark, Epic".to_string(),
        rating: 9,
        ..Default::default()
    };

    let response = save_book(&mut conn, &form).unwrap();
    let book_id = match response {
        SaveResponse::Saved { book_id } => book_id,
        SaveResponse::Invalid { field_error } => panic!("unexpected: {:?}", field_error),
    };

    assert_eq!(schema::count_books(&conn).unwrap(), 1);
    let book = schema::get_book(&conn, book_id).unwrap().unwrap();
    assert_eq!(book.genre, Some(fantasy));
    assert_eq!(book.subgenre, Some(high_epic));
    assert_eq!(book.rating, Some(9));

    // Case-insensitive dedup: "dark" and "Dark" collapse to one vibe.
    let vibes = schema::list_book_vibe_names(&conn, book_id).unwrap();
    assert_eq!(vibes, vec!["Dark", "Epic"]);
}

#[test]
fn test_save_keeps_first_of_each_multiselection() {
    let mut conn = setup_test_db();
    let fiction = category_id(&conn, "Fiction");
    let fantasy = genre_id(&conn, "Fiction", "fantasy");
    let horror = genre_id(&conn, "Fiction", "horror");
    let sources = schema::list_sources(&conn).unwrap();

    let form = BookForm {
        name: "Book".to_string(),
        category_id: Some(fiction),
        genre_ids: vec![fantasy, horror],
        source_ids: vec![sources[2].id, sources[0].id],
        ..Default::default()
    };

    let response = save_book(&mut conn, &form).unwrap();
    let book_id = match response {
        SaveResponse::Saved { book_id } => book_id,
        _ => panic!("expected save"),
    };
    let book = schema::get_book(&conn, book_id).unwrap().unwrap();
    assert_eq!(book.genre, Some(fantasy));
    assert_eq!(book.source, Some(sources[2].id));
}

#[test]
fn test_hidden_subgenre_selection_is_discarded() {
    let mut conn = setup_test_db();
    let nonfiction = category_id(&conn, "Non-fiction");
    let fantasy = genre_id(&conn, "Fiction", "fantasy");
    let high_epic = subgenre_id(&conn, fantasy, "High/Epic fantasy");

    // Stale subgenre ids from a previous Fiction selection must not persist
    // once the section is hidden.
    let form = BookForm {
        name: "Book".to_string(),
        category_id: Some(nonfiction),
        subgenre_ids: vec![high_epic],
        subgenre_visible: false,
        ..Default::default()
    };

    let response = save_book(&mut conn, &form).unwrap();
    let book_id = match response {
        SaveResponse::Saved { book_id } => book_id,
        _ => panic!("expected save"),
    };
    let book = schema::get_book(&conn, book_id).unwrap().unwrap();
    assert_eq!(book.subgenre, None);
}

#[test]
fn test_save_creates_author_and_user_vibe_rows() {
    let mut conn = setup_test_db();
    let form = BookForm {
        name: "Book".to_string(),
        author: "jane doe".to_string(),
        vibes: "Rafe-style".to_string(),
        ..Default::default()
    };
    save_book(&mut conn, &form).unwrap();

    let author: String = conn
        .query_row("SELECT author_name FROM author", [], |row| row.get(0))
        .unwrap();
    assert_eq!(author, "Jane Doe");

    let (vibe, prefilled): (String, i64) = conn
        .query_row(
            "SELECT vibe_name, prefilled FROM vibe WHERE vibe_name = 'Rafe-style'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(vibe, "Rafe-style");
    assert_eq!(prefilled, 0);
}

#[test]
fn test_failed_save_rolls_back_everything() {
    let mut conn = setup_test_db();
    // A genre id that violates the FK constraint forces the insert to fail
    // after the author upsert already ran inside the same transaction.
    let form = BookForm {
        name: "Book".to_string(),
        author: "Rolled Back".to_string(),
        genre_ids: vec![999_999],
        ..Default::default()
    };

    let result = save_book(&mut conn, &form);
    assert!(result.is_err());
    assert_eq!(schema::count_books(&conn).unwrap(), 0);

    // The author upsert shares the transaction, so it is gone too.
    let authors: i64 = conn
        .query_row("SELECT COUNT(*) FROM author", [], |row| row.get(0))
        .unwrap();
    assert_eq!(authors, 0);
}

#[test]
fn test_save_is_retryable_after_correction() {
    let mut conn = setup_test_db();
    let mut form = BookForm {
        date_start: Some("2025-02-01".to_string()),
        date_finish: Some("2025-01-01".to_string()),
        name: "Book".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        save_book(&mut conn, &form).unwrap(),
        SaveResponse::Invalid { .. }
    ));

    form.date_finish = Some("2025-03-01".to_string());
    assert!(matches!(
        save_book(&mut conn, &form).unwrap(),
        SaveResponse::Saved { .. }
    ));
    assert_eq!(schema::count_books(&conn).unwrap(), 1);
}
