// Reading Journal constants

// Paths
pub const JOURNAL_FOLDER: &str = ".reading-journal";
pub const DB_FILENAME: &str = "journal.db";

// Database
pub const BUSY_TIMEOUT_MS: u32 = 5_000;

// Tag input
pub const TOKEN_DELIMITERS: [char; 2] = [',', ';'];
pub const SUGGESTION_LIMIT: usize = 3;

// Business rules
pub const REMEMBER_CHECK_OFFSET_DAYS: i64 = 90;
pub const RATING_MAX: u8 = 10;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Seed labels referenced by the form defaults
pub const CATEGORY_FICTION: &str = "Fiction";
pub const DEFAULT_SIZE: &str = "Novel — 200-450 pages";
