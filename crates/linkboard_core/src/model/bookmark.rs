//! Bookmark domain model.
//!
//! # Responsibility
//! - Define the canonical record stored, filtered, imported and exported.
//! - Provide the built-in fallback set used when persisted state is absent
//!   or unreadable.
//!
//! # Invariants
//! - `id` is the creation timestamp in epoch milliseconds. Uniqueness is not
//!   strictly enforced: two creations in the same millisecond may collide.
//! - `title` and `url` are non-empty after trimming for every record that
//!   passes `validate()`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identity of one bookmark record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookmarkId = i64;

/// Canonical bookmark record owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Creation timestamp in epoch milliseconds, doubling as identity.
    pub id: BookmarkId,
    /// User-visible label. Non-empty for validated records.
    pub title: String,
    /// Link target. Non-empty for validated records.
    pub url: String,
    /// Optional grouping label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional human-readable creation date (`YYYY-MM-DD`).
    #[serde(
        default,
        rename = "dateAdded",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_added: Option<String>,
}

/// Field-level validation failure for user-supplied bookmark data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkValidationError {
    EmptyTitle,
    EmptyUrl,
}

impl Display for BookmarkValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "bookmark title must not be empty"),
            Self::EmptyUrl => write!(f, "bookmark url must not be empty"),
        }
    }
}

impl Error for BookmarkValidationError {}

impl Bookmark {
    /// Creates a bookmark with a fresh timestamp id and today's date.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_id(now_epoch_ms(), title, url)
    }

    /// Creates a bookmark with a caller-provided id.
    ///
    /// Used by import paths where the creation instant is assigned in a
    /// batch, and by tests that need deterministic identities.
    pub fn with_id(id: BookmarkId, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            category: None,
            date_added: Some(today()),
        }
    }

    /// Checks the required-field invariants.
    pub fn validate(&self) -> Result<(), BookmarkValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookmarkValidationError::EmptyTitle);
        }
        if self.url.trim().is_empty() {
            return Err(BookmarkValidationError::EmptyUrl);
        }
        Ok(())
    }
}

/// Current instant in epoch milliseconds, the id scheme for new records.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Built-in fallback set used when no persisted state exists or the
/// persisted state cannot be decoded.
pub fn default_bookmarks() -> Vec<Bookmark> {
    let base = now_epoch_ms();
    vec![
        Bookmark::with_id(base + 1, "Tailwind CSS", "https://tailwindcss.com"),
        Bookmark::with_id(base + 2, "Google Fonts", "https://fonts.google.com"),
        Bookmark::with_id(base + 3, "MDN Web Docs", "https://developer.mozilla.org"),
    ]
}
