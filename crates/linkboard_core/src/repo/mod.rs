//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract between command handlers and persistence.
//! - Isolate key-value store details from service orchestration.
//!
//! # Invariants
//! - Repositories persist the whole bookmark array as one unit; there is no
//!   per-record write path.
//! - Unreadable persisted state degrades to the built-in default set instead
//!   of failing.

pub mod bookmark_repo;
