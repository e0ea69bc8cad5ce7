//! Core domain logic for Linkboard, a client-side bookmark manager.
//! This crate is the single source of truth for store, filter, import,
//! export and icon-motion behavior; rendering and event wiring live in the
//! host.

pub mod db;
pub mod export;
pub mod import;
pub mod logging;
pub mod model;
pub mod motion;
pub mod repo;
pub mod search;
pub mod service;

pub use export::{export_html, export_json, export_text};
pub use import::{parse_import, BookmarkDraft, ImportError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::bookmark::{
    default_bookmarks, Bookmark, BookmarkId, BookmarkValidationError,
};
pub use motion::engine::{
    scatter, AnimationHandle, Bounds, IconMotion, IconSeed, MotionEngine,
};
pub use repo::bookmark_repo::{
    BookmarkRepository, MemoryBookmarkRepository, RepoError, RepoResult,
    SqliteBookmarkRepository,
};
pub use search::filter::filter_bookmarks;
pub use service::bookmark_service::{BookmarkService, ServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
