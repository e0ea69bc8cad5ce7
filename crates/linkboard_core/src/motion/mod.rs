//! Floating-icon motion integration.
//!
//! # Responsibility
//! - Advance per-icon linear motion one step per host-driven tick.
//! - Own the icon-set lifecycle so stale animation handles can never update
//!   a torn-down set.
//!
//! # Invariants
//! - Icon state is ephemeral view data; it is never persisted and is
//!   recreated whenever the visible set changes.
//! - A handle returned by `rebuild` stops working the moment the set is
//!   rebuilt or stopped.

pub mod engine;
