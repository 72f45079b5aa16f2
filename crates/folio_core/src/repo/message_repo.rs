//! Contact message repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist validated contact submissions into `messages`.
//! - Provide newest-first listing, read/unread management and counters.
//!
//! # Invariants
//! - Listing order is `created_at DESC, rowid DESC` (newest insert first).
//! - `mark_as_read` only transitions unread rows; it reports whether a row
//!   changed.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::contact::{ContactMessage, ContactSubmission, MessageId, MessageStats};
use log::{info, warn};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const MESSAGE_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    message,
    created_at,
    is_read
FROM messages";

const MESSAGES_DEFAULT_LIMIT: u32 = 50;
const MESSAGES_LIMIT_MAX: u32 = 200;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for message and preference persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for message listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageListQuery {
    /// Only return messages not yet marked as read.
    pub unread_only: bool,
    /// Maximum rows to return. Defaults to 50 and clamps to 200.
    pub limit: Option<u32>,
}

/// Repository interface for contact message storage.
pub trait MessageRepository {
    /// Persists one submission as-is and returns the stored row.
    fn save_message(&self, submission: &ContactSubmission) -> RepoResult<ContactMessage>;
    /// Gets one message by id.
    fn get_message(&self, id: MessageId) -> RepoResult<Option<ContactMessage>>;
    /// Lists messages newest first.
    fn list_messages(&self, query: &MessageListQuery) -> RepoResult<Vec<ContactMessage>>;
    /// Marks one unread message as read. Returns whether a row changed.
    fn mark_as_read(&self, id: MessageId) -> RepoResult<bool>;
    /// Deletes one message. Returns whether a row was removed.
    fn delete_message(&self, id: MessageId) -> RepoResult<bool>;
    /// Returns total/unread/read counters.
    fn message_stats(&self) -> RepoResult<MessageStats>;
}

/// SQLite-backed message repository.
pub struct SqliteMessageRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMessageRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, "messages")? {
            return Err(RepoError::MissingRequiredTable("messages"));
        }
        Ok(Self { conn })
    }
}

impl MessageRepository for SqliteMessageRepository<'_> {
    fn save_message(&self, submission: &ContactSubmission) -> RepoResult<ContactMessage> {
        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO messages (id, name, email, message) VALUES (?1, ?2, ?3, ?4);",
            params![
                id.to_string(),
                submission.name.as_str(),
                submission.email.as_str(),
                submission.message.as_str(),
            ],
        )?;
        info!("event=message_save module=repo status=ok message_id={id}");

        self.get_message(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("saved message {id} missing in read-back"))
        })
    }

    fn get_message(&self, id: MessageId) -> RepoResult<Option<ContactMessage>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MESSAGE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_message_row(row)?));
        }
        Ok(None)
    }

    fn list_messages(&self, query: &MessageListQuery) -> RepoResult<Vec<ContactMessage>> {
        let mut sql = format!("{MESSAGE_SELECT_SQL} WHERE 1 = 1");
        if query.unread_only {
            sql.push_str(" AND is_read = 0");
        }
        sql.push_str(" ORDER BY created_at DESC, rowid DESC LIMIT ?");
        let bind_values = vec![Value::Integer(i64::from(normalize_message_limit(
            query.limit,
        )))];

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut messages = Vec::new();
        while let Some(row) = rows.next()? {
            messages.push(parse_message_row(row)?);
        }
        Ok(messages)
    }

    fn mark_as_read(&self, id: MessageId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE messages SET is_read = 1 WHERE id = ?1 AND is_read = 0;",
            [id.to_string()],
        )?;
        if changed == 0 {
            warn!("event=message_mark_read module=repo status=noop message_id={id}");
            return Ok(false);
        }
        info!("event=message_mark_read module=repo status=ok message_id={id}");
        Ok(true)
    }

    fn delete_message(&self, id: MessageId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM messages WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            warn!("event=message_delete module=repo status=noop message_id={id}");
            return Ok(false);
        }
        info!("event=message_delete module=repo status=ok message_id={id}");
        Ok(true)
    }

    fn message_stats(&self) -> RepoResult<MessageStats> {
        let (total, unread): (i64, i64) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(CASE WHEN is_read = 0 THEN 1 ELSE 0 END), 0)
             FROM messages;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let total = non_negative(total, "COUNT(*)")?;
        let unread = non_negative(unread, "unread count")?;
        Ok(MessageStats {
            total,
            unread,
            read: total - unread,
        })
    }
}

/// Applies default and upper bound to a caller-provided list limit.
pub fn normalize_message_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => MESSAGES_DEFAULT_LIMIT,
        Some(value) => value.min(MESSAGES_LIMIT_MAX),
    }
}

fn parse_message_row(row: &Row<'_>) -> RepoResult<ContactMessage> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in messages.id"))
    })?;

    let is_read = match row.get::<_, i64>("is_read")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_read value `{other}` in messages.is_read"
            )));
        }
    };

    Ok(ContactMessage {
        id,
        name: row.get("name")?,
        email: row.get("email")?,
        message: row.get("message")?,
        created_at: row.get("created_at")?,
        is_read,
    })
}

fn non_negative(value: i64, what: &str) -> RepoResult<u64> {
    u64::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("negative {what} value `{value}`")))
}

pub(crate) fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::normalize_message_limit;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(normalize_message_limit(None), 50);
        assert_eq!(normalize_message_limit(Some(0)), 50);
        assert_eq!(normalize_message_limit(Some(5)), 5);
        assert_eq!(normalize_message_limit(Some(10_000)), 200);
    }
}
