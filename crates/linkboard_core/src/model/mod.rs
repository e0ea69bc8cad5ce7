//! Domain model for the bookmark store.
//!
//! # Responsibility
//! - Define the canonical bookmark record shared by store, import and export.
//! - Own field-level validation for user-supplied data.
//!
//! # Invariants
//! - `id` is the record's identity; the store owns every record exclusively.
//! - Category grouping is derived from records, never stored separately.

pub mod bookmark;
