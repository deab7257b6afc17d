//! Key-value preference storage.
//!
//! # Responsibility
//! - Persist small UI preferences (currently the color scheme).
//! - Keep SQL details inside the preference boundary.
//!
//! # Invariants
//! - Keys are non-blank after trim.
//! - `set_preference` overwrites any previous value for the key.

use crate::db::{open_db, open_db_in_memory, DbError};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type PreferenceResult<T> = Result<T, PreferenceError>;

#[derive(Debug)]
pub enum PreferenceError {
    InvalidKey(String),
    /// Connection was not migrated before use.
    MissingPreferenceTable,
    Db(DbError),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid preference key: `{key}`"),
            Self::MissingPreferenceTable => write!(f, "preferences table is missing"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PreferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for PreferenceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PreferenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for persisted preferences.
pub trait PreferenceRepository {
    fn get_preference(&self, key: &str) -> PreferenceResult<Option<String>>;
    fn set_preference(&mut self, key: &str, value: &str) -> PreferenceResult<()>;
}

/// SQLite-backed preference repository owning its connection.
pub struct SqlitePreferenceRepository {
    conn: Connection,
}

impl SqlitePreferenceRepository {
    /// Wraps a migrated connection.
    pub fn try_new(conn: Connection) -> PreferenceResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'preferences'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(PreferenceError::MissingPreferenceTable);
        }
        Ok(Self { conn })
    }

    /// Opens (or creates) the preference database at `path`.
    pub fn open(path: impl AsRef<Path>) -> PreferenceResult<Self> {
        Self::try_new(open_db(path)?)
    }

    pub fn open_in_memory() -> PreferenceResult<Self> {
        Self::try_new(open_db_in_memory()?)
    }
}

impl PreferenceRepository for SqlitePreferenceRepository {
    fn get_preference(&self, key: &str) -> PreferenceResult<Option<String>> {
        let key = normalize_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_preference(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        let key = normalize_key(key)?;
        self.conn.execute(
            "INSERT INTO preferences (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local preference map; contents are lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceRepository {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one stored value, as if persisted by an earlier session.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl PreferenceRepository for MemoryPreferenceRepository {
    fn get_preference(&self, key: &str) -> PreferenceResult<Option<String>> {
        let key = normalize_key(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn set_preference(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        let key = normalize_key(key)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn normalize_key(key: &str) -> PreferenceResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(PreferenceError::InvalidKey(key.to_string()));
    }
    Ok(trimmed)
}
