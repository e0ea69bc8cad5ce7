//! Freeform plain-text decoding.
//!
//! Line-oriented heuristic: a line starting with `http://` or `https://` is
//! a URL and pairs with the most recently seen non-URL, non-purely-numeric
//! line as its title. Leading `1.`/`1)` list numbering is stripped from
//! title lines so the crate's own numbered export round-trips. Titles that
//! never meet a URL are discarded silently.

use super::BookmarkDraft;
use once_cell::sync::Lazy;
use regex::Regex;

static LIST_NUMBERING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s+").expect("valid list numbering regex"));
static PURELY_NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("valid numeric line regex"));

/// Decodes freeform text into candidate records.
pub fn parse(input: &str) -> Vec<BookmarkDraft> {
    let mut drafts = Vec::new();
    let mut pending_title: Option<String> = None;

    for raw_line in input.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if is_url_line(line) {
            if let Some(title) = &pending_title {
                drafts.push(BookmarkDraft::new(title.clone(), line));
            }
            continue;
        }

        if PURELY_NUMERIC_RE.is_match(line) {
            continue;
        }

        let title = LIST_NUMBERING_RE.replace(line, "").trim().to_string();
        if !title.is_empty() {
            pending_title = Some(title);
        }
    }

    drafts
}

fn is_url_line(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://")
}
