//! Netscape bookmark HTML decoding.
//!
//! Extracts `(url, title)` pairs from the fixed `<DT><A HREF="...">` tag
//! pattern used by browser bookmark exports. Anything the pattern does not
//! match simply contributes no entries.

use super::BookmarkDraft;
use once_cell::sync::Lazy;
use regex::Regex;

static BOOKMARK_ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<dt[^>]*>\s*<a\s[^>]*?href\s*=\s*"([^"]*)"[^>]*>([^<]*)</a>"#)
        .expect("valid bookmark anchor regex")
});

/// Decodes a bookmark-export HTML fragment into candidate records.
pub fn parse(input: &str) -> Vec<BookmarkDraft> {
    BOOKMARK_ANCHOR_RE
        .captures_iter(input)
        .filter_map(|caps| {
            let url = unescape(caps.get(1)?.as_str().trim());
            let title = unescape(caps.get(2)?.as_str().trim());
            if url.is_empty() || title.is_empty() {
                return None;
            }
            Some(BookmarkDraft::new(title, url))
        })
        .collect()
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
