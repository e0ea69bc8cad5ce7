//! Bookmark command handlers.
//!
//! # Responsibility
//! - Own the ordered store and the current query string as one explicit
//!   object; there is no second "filtered" collection kept in sync by
//!   convention.
//! - Provide the command surface a host event loop drives: add, delete,
//!   set-query, import-batch, exports.
//!
//! # Invariants
//! - The visible set is always derived from (store, query) on demand.
//! - Validation failures reject the command with no state change.
//! - Every successful mutation is persisted through the repository before
//!   the command returns.

use crate::export::{export_html, export_json, export_text};
use crate::import::BookmarkDraft;
use crate::model::bookmark::{
    now_epoch_ms, today, Bookmark, BookmarkId, BookmarkValidationError,
};
use crate::repo::bookmark_repo::{BookmarkRepository, RepoError, RepoResult};
use crate::search::filter::filter_bookmarks;
use log::info;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for bookmark commands.
#[derive(Debug)]
pub enum ServiceError {
    /// Required fields missing or blank; the store is unchanged.
    Validation(BookmarkValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<BookmarkValidationError> for ServiceError {
    fn from(value: BookmarkValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Owns the bookmark store and executes commands against it.
pub struct BookmarkService<R: BookmarkRepository> {
    repo: R,
    bookmarks: Vec<Bookmark>,
    query: String,
}

impl<R: BookmarkRepository> BookmarkService<R> {
    /// Loads the store through the repository and starts with a blank query.
    pub fn new(repo: R) -> RepoResult<Self> {
        let bookmarks = repo.load()?;
        Ok(Self {
            repo,
            bookmarks,
            query: String::new(),
        })
    }

    /// Adds one bookmark at the front of the store.
    ///
    /// # Contract
    /// - `title` and `url` are trimmed; blank values reject the command
    ///   with no state change.
    /// - The new id is the current instant in epoch ms. Uniqueness is not
    ///   enforced.
    pub fn add_bookmark(
        &mut self,
        title: &str,
        url: &str,
        category: Option<&str>,
    ) -> Result<BookmarkId, ServiceError> {
        let mut bookmark = Bookmark::new(title.trim(), url.trim());
        bookmark.category = category
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        bookmark.validate()?;

        let id = bookmark.id;
        // Newest first, matching the original unshift ordering.
        self.bookmarks.insert(0, bookmark);
        self.repo.save(&self.bookmarks)?;
        info!("event=bookmark_add module=service status=ok id={id}");
        Ok(id)
    }

    /// Deletes at most one bookmark by id.
    ///
    /// Returns whether a record was removed. Deleting an id that is absent
    /// (including one already deleted) is a no-op returning `false`.
    pub fn delete_bookmark(&mut self, id: BookmarkId) -> Result<bool, ServiceError> {
        let Some(position) = self.bookmarks.iter().position(|b| b.id == id) else {
            return Ok(false);
        };

        self.bookmarks.remove(position);
        self.repo.save(&self.bookmarks)?;
        info!("event=bookmark_delete module=service status=ok id={id}");
        Ok(true)
    }

    /// Replaces the current query string.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The derived view: store records matching the current query.
    pub fn visible(&self) -> Vec<Bookmark> {
        filter_bookmarks(&self.bookmarks, &self.query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Merges reviewed import candidates into the store.
    ///
    /// Fresh ids are assigned from one base timestamp plus the candidate's
    /// index; candidate dates are kept when present. Returns the number of
    /// merged records.
    pub fn import_batch(&mut self, drafts: Vec<BookmarkDraft>) -> Result<usize, ServiceError> {
        if drafts.is_empty() {
            return Ok(0);
        }

        let base = now_epoch_ms();
        let count = drafts.len();
        let mut merged = Vec::with_capacity(count);
        for (index, draft) in drafts.into_iter().enumerate() {
            let bookmark = Bookmark {
                id: base + index as i64,
                title: draft.title,
                url: draft.url,
                category: draft.category,
                date_added: draft.date_added.or_else(|| Some(today())),
            };
            // All candidates are checked before the store is touched; a bad
            // one rejects the whole batch rather than merging partially.
            bookmark.validate()?;
            merged.push(bookmark);
        }

        self.bookmarks.append(&mut merged);
        self.repo.save(&self.bookmarks)?;
        info!("event=import_merge module=service status=ok count={count}");
        Ok(count)
    }

    /// Derived category grouping: category name to record count.
    ///
    /// Uncategorized records stay in the store but do not appear here.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for bookmark in &self.bookmarks {
            if let Some(category) = &bookmark.category {
                *counts.entry(category.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Renders the store as the pretty-printed JSON envelope.
    pub fn export_json(&self) -> String {
        export_json(&self.bookmarks)
    }

    /// Renders the store as a Netscape bookmark HTML fragment.
    pub fn export_html(&self) -> String {
        export_html(&self.bookmarks)
    }

    /// Renders the store as a numbered plain-text listing.
    pub fn export_text(&self) -> String {
        export_text(&self.bookmarks)
    }

    /// Full store contents, newest first.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
