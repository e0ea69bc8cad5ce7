//! Bookmark repository contracts and implementations.
//!
//! # Responsibility
//! - Load and save the full bookmark array through one storage key,
//!   mirroring the browser's `localStorage` layout.
//! - Degrade malformed persisted state to the built-in default set.
//!
//! # Invariants
//! - The persisted value under `bookmarks` is always a JSON array of records.
//! - The SQLite `load` never fails on decode errors; it logs and falls back
//!   instead. The in-memory variant has no persisted state to fall back from.

use crate::db::DbError;
use crate::model::bookmark::{default_bookmarks, Bookmark};
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the JSON-serialized bookmark array.
pub const BOOKMARKS_KEY: &str = "bookmarks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for bookmark persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
    /// Connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize bookmarks: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: expected schema version {expected_version}, found {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
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

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Storage contract for the bookmark array.
pub trait BookmarkRepository {
    /// Loads the full store.
    fn load(&self) -> RepoResult<Vec<Bookmark>>;
    /// Replaces the persisted store with the provided records.
    fn save(&self, bookmarks: &[Bookmark]) -> RepoResult<()>;
}

/// SQLite-backed repository storing the array under one key-value row.
///
/// Absent or unreadable persisted state yields the built-in default set;
/// `load` logs the fallback instead of failing.
pub struct SqliteBookmarkRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookmarkRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl BookmarkRepository for SqliteBookmarkRepository<'_> {
    fn load(&self) -> RepoResult<Vec<Bookmark>> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [BOOKMARKS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = stored else {
            info!("event=store_load module=repo status=ok source=default");
            return Ok(default_bookmarks());
        };

        match serde_json::from_str::<Vec<Bookmark>>(&raw) {
            Ok(bookmarks) => {
                info!(
                    "event=store_load module=repo status=ok source=persisted count={}",
                    bookmarks.len()
                );
                Ok(bookmarks)
            }
            Err(err) => {
                warn!(
                    "event=store_load module=repo status=fallback reason=malformed_state error={err}"
                );
                Ok(default_bookmarks())
            }
        }
    }

    fn save(&self, bookmarks: &[Bookmark]) -> RepoResult<()> {
        let serialized = serde_json::to_string(bookmarks)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![BOOKMARKS_KEY, serialized],
        )?;
        Ok(())
    }
}

/// In-memory repository for the non-persisting widget variants and tests.
///
/// Serves exactly the records it holds; nothing was ever persisted, so there
/// is no default-set fallback.
#[derive(Debug, Default)]
pub struct MemoryBookmarkRepository {
    rows: RefCell<Vec<Bookmark>>,
}

impl MemoryBookmarkRepository {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory store pre-populated with records.
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            rows: RefCell::new(bookmarks),
        }
    }
}

impl BookmarkRepository for MemoryBookmarkRepository {
    fn load(&self) -> RepoResult<Vec<Bookmark>> {
        Ok(self.rows.borrow().clone())
    }

    fn save(&self, bookmarks: &[Bookmark]) -> RepoResult<()> {
        *self.rows.borrow_mut() = bookmarks.to_vec();
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let has_table: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'kv_store';",
            [],
            |row| row.get(0),
        )
        .optional()?;
    if has_table.is_none() {
        return Err(RepoError::MissingRequiredTable("kv_store"));
    }

    Ok(())
}
