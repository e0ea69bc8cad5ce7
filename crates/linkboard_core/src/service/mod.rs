//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations and derived views into command handlers.
//! - Keep host UI loops decoupled from storage and codec details.

pub mod bookmark_service;
