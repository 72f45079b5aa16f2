//! Key/value preference storage.
//!
//! # Responsibility
//! - Read and upsert single string preferences (e.g. the site theme).
//!
//! # Invariants
//! - One row per key; writes replace the previous value.

use crate::repo::message_repo::{table_exists, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Preference key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Repository interface for preference values.
pub trait PreferenceRepository {
    /// Returns the stored value for `key`, if any.
    fn get_preference(&self, key: &str) -> RepoResult<Option<String>>;
    /// Inserts or replaces the value for `key`.
    fn set_preference(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed preference repository.
pub struct SqlitePreferenceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, "preferences")? {
            return Err(RepoError::MissingRequiredTable("preferences"));
        }
        Ok(Self { conn })
    }
}

impl PreferenceRepository for SqlitePreferenceRepository<'_> {
    fn get_preference(&self, key: &str) -> RepoResult<Option<String>> {
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

    fn set_preference(&self, key: &str, value: &str) -> RepoResult<()> {
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
