//! Export encoding for the bookmark store.
//!
//! # Responsibility
//! - Render the store as a pretty-printed JSON envelope, a
//!   Netscape-bookmark-file-compatible HTML fragment, and a numbered
//!   plain-text listing.
//!
//! # Invariants
//! - Every format is re-importable by the matching decoder in
//!   [`crate::import`]; the JSON round-trip preserves the record set up to
//!   id regeneration.

use crate::model::bookmark::Bookmark;
use chrono::Utc;
use serde::Serialize;

/// Envelope version written by [`export_json`].
pub const EXPORT_VERSION: &str = "1.0";

#[derive(Debug, Serialize)]
struct JsonEnvelope<'a> {
    version: &'static str,
    created: String,
    bookmarks: &'a [Bookmark],
}

/// Renders the store as a pretty-printed `{version, created, bookmarks}`
/// envelope.
pub fn export_json(bookmarks: &[Bookmark]) -> String {
    let envelope = JsonEnvelope {
        version: EXPORT_VERSION,
        created: Utc::now().to_rfc3339(),
        bookmarks,
    };
    // Plain records with string/number fields always serialize.
    serde_json::to_string_pretty(&envelope)
        .unwrap_or_else(|_| format!("{{\"version\": \"{EXPORT_VERSION}\", \"bookmarks\": []}}"))
}

/// Renders the store as a Netscape bookmark file fragment.
pub fn export_html(bookmarks: &[Bookmark]) -> String {
    let mut out = String::from(
        "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
         <META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
         <TITLE>Bookmarks</TITLE>\n\
         <H1>Bookmarks</H1>\n\
         <DL><p>\n",
    );

    for bookmark in bookmarks {
        // Ids are creation instants in epoch ms; ADD_DATE wants seconds.
        let add_date = bookmark.id / 1000;
        out.push_str(&format!(
            "    <DT><A HREF=\"{}\" ADD_DATE=\"{}\">{}</A>\n",
            escape(&bookmark.url),
            add_date,
            escape(&bookmark.title)
        ));
    }

    out.push_str("</DL><p>\n");
    out
}

/// Renders the store as a numbered plain-text listing.
pub fn export_text(bookmarks: &[Bookmark]) -> String {
    let entries: Vec<String> = bookmarks
        .iter()
        .enumerate()
        .map(|(index, bookmark)| {
            format!("{}. {}\n   {}", index + 1, bookmark.title, bookmark.url)
        })
        .collect();
    entries.join("\n\n")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
