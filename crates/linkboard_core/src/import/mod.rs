//! Import decoding for externally supplied bookmark payloads.
//!
//! # Responsibility
//! - Decode JSON, Netscape-dialect HTML and freeform text payloads into
//!   candidate records for review before merge.
//! - Dispatch in fixed priority order: JSON-looking input first, then
//!   HTML-looking input, then the text heuristic as fallback.
//!
//! # Invariants
//! - Individual decoders never fail; unusable input yields zero candidates.
//! - The first decoder producing a non-empty result wins; zero candidates
//!   from all three is an unrecognized-format error, with no partial merge.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod html;
pub mod json;
pub mod text;

/// Candidate record produced by a decoder, before ids are assigned.
///
/// Ids are regenerated on merge, so decoders never carry one over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub category: Option<String>,
    pub date_added: Option<String>,
}

impl BookmarkDraft {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            category: None,
            date_added: None,
        }
    }
}

/// Import failure surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// No decoder recognized any bookmark in the payload.
    UnrecognizedFormat,
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedFormat => {
                write!(f, "no bookmarks recognized in import payload")
            }
        }
    }
}

impl Error for ImportError {}

/// Decodes one payload by trying the decoders in fixed priority order.
///
/// JSON runs first when the payload looks like JSON, HTML runs next when it
/// looks like markup, and the text heuristic always runs last. The first
/// non-empty candidate list wins.
pub fn parse_import(input: &str) -> Result<Vec<BookmarkDraft>, ImportError> {
    let trimmed = input.trim();

    let mut drafts = if looks_like_json(trimmed) {
        json::parse(trimmed)
    } else {
        Vec::new()
    };

    if drafts.is_empty() && looks_like_html(trimmed) {
        drafts = html::parse(trimmed);
    }

    if drafts.is_empty() {
        drafts = text::parse(trimmed);
    }

    if drafts.is_empty() {
        return Err(ImportError::UnrecognizedFormat);
    }
    Ok(drafts)
}

fn looks_like_json(input: &str) -> bool {
    input.starts_with('[') || input.starts_with('{')
}

fn looks_like_html(input: &str) -> bool {
    let lowered = input.to_lowercase();
    lowered.contains("<a ") && lowered.contains("href")
}
