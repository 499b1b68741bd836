// Reading Journal CLI binary
//
// Admin entry point for setting up and inspecting a journal database
// without launching the desktop app.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod constants;
mod db;
mod error;
mod form;
mod tags;

use db::schema;

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Reading Journal - set up and inspect the journal database", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and prefill a new journal database
    Init {
        /// Database path (defaults to ~/.reading-journal/journal.db)
        #[arg(short, long)]
        db: Option<PathBuf>,
    },

    /// Show journal status: schema version, lookup counts, book count
    Check {
        /// Database path (defaults to ~/.reading-journal/journal.db)
        #[arg(short, long)]
        db: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db } => cmd_init(db),
        Commands::Check { db } => cmd_check(db),
    }
}

fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    match db {
        Some(p) => Ok(p),
        None => db::default_db_path(),
    }
}

fn cmd_init(db_path: Option<PathBuf>) -> Result<()> {
    let db_path = resolve_db_path(db_path)?;

    if db_path.exists() {
        anyhow::bail!("Journal already exists at {}", db_path.display());
    }

    let conn = db::open_db(&db_path)?;
    let categories = schema::list_categories(&conn)?;

    println!("Created journal at {}", db_path.display());
    println!(
        "Prefilled {} categories, {} sizes, {} vibes.",
        categories.len(),
        schema::list_sizes(&conn)?.len(),
        conn.query_row("SELECT COUNT(*) FROM vibe", [], |row| row.get::<_, i64>(0))?,
    );
    Ok(())
}

fn cmd_check(db_path: Option<PathBuf>) -> Result<()> {
    let db_path = resolve_db_path(db_path)?;
    let conn = db::open_existing_db(&db_path)?;

    let version: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    println!("Journal:        {}", db_path.display());
    println!("Schema version: {}", version);
    println!("Books:          {}", schema::count_books(&conn)?);

    for category in schema::list_categories(&conn)? {
        let genres = schema::list_genres_by_category(&conn, category.id)?;
        println!("{}: {} genres", category.name, genres.len());
    }

    Ok(())
}
