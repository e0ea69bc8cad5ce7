//! Search entry points.
//!
//! # Responsibility
//! - Expose the substring filter used to compute the visible set.
//! - Keep result shaping inside core, away from rendering concerns.

pub mod filter;
