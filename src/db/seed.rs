// Lookup table seed data.
//
// Every insert is INSERT OR IGNORE keyed on the natural name, so re-running
// the seed pass against an existing journal never duplicates or errors.

use anyhow::Result;
use rusqlite::{params, Connection};

const SIZES: [&str; 5] = [
    "Short story — 4-30 pages",
    "Novelette — 30-80 pages",
    "Novella — 80-200 pages",
    "Novel — 200-450 pages",
    "Epic — 450+ pages",
];

const CATEGORIES: [&str; 2] = ["Fiction", "Non-fiction"];

const SOURCES: [&str; 4] = [
    "E-book",
    "Audiobook",
    "Physical (mine)",
    "Physical (borrowed)",
];

const DISCOVERIES: [&str; 6] = ["Friend", "Social media", "Review", "Store", "Library", "Other"];

const MONTHS_LATER: [&str; 3] = ["Hell yes", "Vaguely", "Who???"];

const REREAD: [&str; 3] = ["Absolutely", "Maybe in crisis", "Nah"];

const VIBES: [&str; 21] = [
    "Dark",
    "Gritty",
    "Light",
    "Epic",
    "Intimate",
    "Creepy",
    "Playful",
    "Witty",
    "Passionate",
    "Tragic",
    "Melancholy",
    "Hopeful",
    "Optimistic",
    "Cynical",
    "Satirical",
    "Tense",
    "Fast-paced",
    "Slow-burn",
    "Chaotic",
    "Wild",
    "Cozy",
];

// One toggle per Add-book form field (see form::fields for the mapping).
const SETTINGS_OPTIONS: [&str; 23] = [
    "Icon",
    "DNF",
    "Author",
    "Size",
    "Category",
    "Genre",
    "Subgenre",
    "Source",
    "Where did I hear about it",
    "My expectations",
    "Date started",
    "Date finished",
    "Rating",
    "How different it is from my expectations",
    "Vibe",
    "Character crush list",
    "Do I remember it three months later?",
    "Would I reread it?",
    "That line that got me",
    "What it reminded me of",
    "Do I need a physical copy?",
    "Notes",
    "Rating_scale",
];

// Fiction genres are stored lowercase, matching the original journal data.
const FICTION_GENRES: [&str; 11] = [
    "literary",
    "fantasy",
    "science fiction",
    "romance",
    "mystery",
    "crime",
    "thriller",
    "horror",
    "historical",
    "adventure",
    "young adult",
];

const NONFICTION_GENRES: [&str; 16] = [
    "Biography",
    "Memoir",
    "History",
    "Self-help",
    "Personal development",
    "Science",
    "Popular science",
    "Philosophy",
    "Religion",
    "Politics",
    "Business",
    "Economics",
    "Travel writing",
    "Essays",
    "True crime",
    "Guides",
];

// Subgenres exist for fiction genres only.
const SUBGENRES: [(&str, &[&str]); 11] = [
    (
        "literary",
        &[
            "Psychological fiction",
            "Social commentary",
            "Experimental/Avant-garde",
            "Philosophical fiction",
            "Stream of consciousness",
            "Bildungsroman (coming-of-age)",
            "Metafiction",
        ],
    ),
    (
        "fantasy",
        &[
            "High/Epic fantasy",
            "Low fantasy",
            "Urban fantasy",
            "Dark fantasy",
            "Sword & sorcery",
            "Fairy tale retelling",
            "Grimdark",
            "Historical fantasy",
            "Mythic fantasy",
            "Portal fantasy",
        ],
    ),
    (
        "science fiction",
        &[
            "Hard sci-fi",
            "Soft sci-fi",
            "Space opera",
            "Cyberpunk",
            "Biopunk",
            "Dystopian",
            "Utopian",
            "Time travel",
            "Alternate history",
            "Post-apocalyptic",
        ],
    ),
    (
        "romance",
        &[
            "Contemporary romance",
            "Historical romance",
            "Regency romance",
            "Paranormal romance",
            "Fantasy romance",
            "Romantic suspense",
            "Erotica",
            "Comedy romance (romcom)",
            "Inspirational romance",
            "Gothic romance",
        ],
    ),
    (
        "mystery",
        &[
            "Cozy mystery",
            "Whodunit",
            "Police procedural",
            "Amateur sleuth",
            "Locked-room mystery",
            "Historical mystery",
            "Noir mystery",
            "Paranormal mystery",
        ],
    ),
    (
        "crime",
        &[
            "Detective fiction",
            "Noir / Hardboiled",
            "Legal thriller",
            "Mafia / Organized crime",
            "Heist / Caper",
            "Psychological crime",
            "Domestic crime",
        ],
    ),
    (
        "thriller",
        &[
            "Psychological thriller",
            "Political thriller",
            "Spy/Espionage",
            "Techno-thriller",
            "Legal thriller",
            "Conspiracy thriller",
            "Medical thriller",
            "Action thriller",
            "Eco-thriller",
        ],
    ),
    (
        "horror",
        &[
            "Gothic horror",
            "Supernatural horror",
            "Psychological horror",
            "Body horror",
            "Splatterpunk",
            "Cosmic horror",
            "Folk horror",
            "Survival horror",
        ],
    ),
    (
        "historical",
        &[
            "Historical romance",
            "Historical adventure",
            "Historical mystery",
            "Historical fantasy",
            "Alternate history",
            "War fiction",
            "Biographical historical novels",
            "Family sagas",
        ],
    ),
    (
        "adventure",
        &[
            "Survival adventure",
            "Swashbuckler",
            "Quest adventure",
            "Lost world adventure",
            "Military adventure",
            "Sea adventure",
            "Pulp adventure",
            "Exploration",
        ],
    ),
    (
        "young adult",
        &[
            "Contemporary YA",
            "Fantasy YA",
            "Sci-Fi YA",
            "Dystopian YA",
            "Romance YA",
            "Paranormal YA",
            "Mystery/Thriller YA",
            "Coming-of-age YA",
        ],
    ),
];

fn insert_names(conn: &Connection, sql: &str, names: &[&str]) -> Result<()> {
    let mut stmt = conn.prepare(sql)?;
    for name in names {
        stmt.execute(params![name])?;
    }
    Ok(())
}

/// Prefill every lookup table. Safe to call on every open.
pub fn seed_lookup_data(conn: &Connection) -> Result<()> {
    insert_names(conn, "INSERT OR IGNORE INTO size(size_name) VALUES (?1)", &SIZES)?;
    insert_names(
        conn,
        "INSERT OR IGNORE INTO category(category_name) VALUES (?1)",
        &CATEGORIES,
    )?;
    insert_names(conn, "INSERT OR IGNORE INTO source(source) VALUES (?1)", &SOURCES)?;
    insert_names(
        conn,
        "INSERT OR IGNORE INTO discovery(discovery_name) VALUES (?1)",
        &DISCOVERIES,
    )?;
    insert_names(
        conn,
        "INSERT OR IGNORE INTO months_later(name) VALUES (?1)",
        &MONTHS_LATER,
    )?;
    insert_names(conn, "INSERT OR IGNORE INTO reread(name) VALUES (?1)", &REREAD)?;
    insert_names(
        conn,
        "INSERT OR IGNORE INTO vibe(vibe_name) VALUES (?1)",
        &VIBES,
    )?;
    insert_names(
        conn,
        "INSERT OR IGNORE INTO settings_options(name) VALUES (?1)",
        &SETTINGS_OPTIONS,
    )?;

    // Default every form toggle ON
    conn.execute(
        "INSERT OR IGNORE INTO settings(parameter_id, value) SELECT id, 1 FROM settings_options",
        [],
    )?;

    // Genres per category
    let fiction_id: i64 = conn.query_row(
        "SELECT id FROM category WHERE category_name = 'Fiction'",
        [],
        |row| row.get(0),
    )?;
    let nonfiction_id: i64 = conn.query_row(
        "SELECT id FROM category WHERE category_name = 'Non-fiction'",
        [],
        |row| row.get(0),
    )?;

    let mut genre_stmt =
        conn.prepare("INSERT OR IGNORE INTO genre(category_id, genre_name) VALUES (?1, ?2)")?;
    for name in FICTION_GENRES {
        genre_stmt.execute(params![fiction_id, name])?;
    }
    for name in NONFICTION_GENRES {
        genre_stmt.execute(params![nonfiction_id, name])?;
    }
    drop(genre_stmt);

    // Subgenres per fiction genre
    let mut sub_stmt =
        conn.prepare("INSERT OR IGNORE INTO subgenre(genre_id, subgenre_name) VALUES (?1, ?2)")?;
    for (genre_name, subgenres) in SUBGENRES {
        let genre_id: i64 = conn.query_row(
            "SELECT id FROM genre WHERE category_id = ?1 AND genre_name = ?2",
            params![fiction_id, genre_name],
            |row| row.get(0),
        )?;
        for name in subgenres {
            sub_stmt.execute(params![genre_id, name])?;
        }
    }

    Ok(())
}
