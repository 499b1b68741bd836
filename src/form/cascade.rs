// Cascading selection state: category -> genre -> subgenre.
//
// The whole cascade is derivable from (category, selected genre ids); option
// lists are always re-queried, never stored. Subgenres exist for Fiction only,
// so the subgenre section is visible exactly when Fiction is selected.

use rusqlite::Connection;

use crate::constants::CATEGORY_FICTION;
use crate::db::schema::{self, LookupRow};
use crate::error::{JournalError, Result};

#[derive(Debug, Clone)]
pub struct CascadeState {
    category: LookupRow,
    genre_ids: Vec<i64>,
    subgenre_ids: Vec<i64>,
}

impl CascadeState {
    /// Default state: Fiction selected, no genres or subgenres.
    pub fn new(conn: &Connection) -> Result<Self> {
        let category = schema::list_categories(conn)?
            .into_iter()
            .find(|c| c.name == CATEGORY_FICTION)
            .ok_or_else(|| JournalError::Other("Category seed data missing".to_string()))?;
        Ok(CascadeState {
            category,
            genre_ids: Vec::new(),
            subgenre_ids: Vec::new(),
        })
    }

    pub fn category(&self) -> &LookupRow {
        &self.category
    }

    pub fn genre_ids(&self) -> &[i64] {
        &self.genre_ids
    }

    pub fn subgenre_ids(&self) -> &[i64] {
        &self.subgenre_ids
    }

    /// Subgenre section shows only while Fiction is the chosen category.
    pub fn subgenre_visible(&self) -> bool {
        self.category.name == CATEGORY_FICTION
    }

    /// Switch category: clears genre and subgenre selections and returns the
    /// genre options for the new category.
    pub fn set_category(&mut self, conn: &Connection, category_id: i64) -> Result<Vec<LookupRow>> {
        let category = schema::list_categories(conn)?
            .into_iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| {
                JournalError::Other(format!("Unknown category id {}", category_id))
            })?;
        self.category = category;
        self.genre_ids.clear();
        self.subgenre_ids.clear();
        self.genre_options(conn)
    }

    /// Replace the genre selection. Subgenre selections no longer reachable
    /// from the new genre set are pruned. Returns the union subgenre list.
    pub fn set_genres(&mut self, conn: &Connection, genre_ids: Vec<i64>) -> Result<Vec<LookupRow>> {
        self.genre_ids = genre_ids;
        let options = available_subgenres(conn, &self.genre_ids)?;
        self.subgenre_ids
            .retain(|id| options.iter().any(|o| o.id == *id));
        Ok(options)
    }

    /// Replace the subgenre selection, keeping only ids offered by the
    /// current genre set.
    pub fn set_subgenres(&mut self, conn: &Connection, subgenre_ids: Vec<i64>) -> Result<()> {
        let options = available_subgenres(conn, &self.genre_ids)?;
        self.subgenre_ids = subgenre_ids
            .into_iter()
            .filter(|id| options.iter().any(|o| o.id == *id))
            .collect();
        Ok(())
    }

    pub fn genre_options(&self, conn: &Connection) -> Result<Vec<LookupRow>> {
        schema::list_genres_by_category(conn, self.category.id)
    }

    pub fn subgenre_options(&self, conn: &Connection) -> Result<Vec<LookupRow>> {
        available_subgenres(conn, &self.genre_ids)
    }
}

/// Pure derivation: which subgenres are selectable given a genre selection.
pub fn available_subgenres(conn: &Connection, genre_ids: &[i64]) -> Result<Vec<LookupRow>> {
    schema::list_subgenres_by_genres(conn, genre_ids)
}
