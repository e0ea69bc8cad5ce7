//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `linkboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use linkboard_core::{default_log_level, init_logging, BookmarkService, MemoryBookmarkRepository};

fn main() {
    let log_dir = std::env::temp_dir().join("linkboard-logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: log directory is not valid UTF-8"),
    }

    println!("linkboard_core version={}", linkboard_core::core_version());

    let repo = MemoryBookmarkRepository::with_bookmarks(linkboard_core::default_bookmarks());
    match BookmarkService::new(repo) {
        Ok(mut service) => {
            service.set_query("docs");
            println!(
                "linkboard_core store={} visible_for_docs={}",
                service.len(),
                service.visible().len()
            );
        }
        Err(err) => eprintln!("failed to load store: {err}"),
    }
}
