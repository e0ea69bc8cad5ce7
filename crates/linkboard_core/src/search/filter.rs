//! Case-insensitive substring filtering over the bookmark store.
//!
//! # Responsibility
//! - Map (store, query) to the visible subset, deterministically.
//!
//! # Invariants
//! - The result is always a subset of the input, in input order.
//! - A blank query matches every record.
//!
//! Working sets are tiny (tens of entries), so a linear scan per keystroke
//! is acceptable and no index is kept.

use crate::model::bookmark::Bookmark;

/// Returns the records whose title or url contains `query`,
/// case-insensitively.
pub fn filter_bookmarks<'a>(bookmarks: &'a [Bookmark], query: &str) -> Vec<&'a Bookmark> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return bookmarks.iter().collect();
    }

    bookmarks
        .iter()
        .filter(|bookmark| {
            bookmark.title.to_lowercase().contains(&needle)
                || bookmark.url.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::filter_bookmarks;
    use crate::model::bookmark::Bookmark;

    fn sample() -> Vec<Bookmark> {
        vec![
            Bookmark::with_id(1, "GitHub", "https://github.com"),
            Bookmark::with_id(2, "Rust Book", "https://doc.rust-lang.org/book"),
            Bookmark::with_id(3, "Lobsters", "https://lobste.rs"),
        ]
    }

    #[test]
    fn matches_title_case_insensitively() {
        let store = sample();
        let visible = filter_bookmarks(&store, "git");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "GitHub");
    }

    #[test]
    fn matches_url_substring() {
        let store = sample();
        let visible = filter_bookmarks(&store, "RUST-LANG");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn no_match_yields_empty_set() {
        let store = sample();
        assert!(filter_bookmarks(&store, "xyz").is_empty());
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let store = sample();
        let visible = filter_bookmarks(&store, "   ");
        let ids: Vec<_> = visible.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn result_is_exactly_the_matching_subset() {
        let store = sample();
        for query in ["o", "book", "https", "GITHUB", ""] {
            let visible = filter_bookmarks(&store, query);
            let needle = query.trim().to_lowercase();
            let expected: Vec<_> = store
                .iter()
                .filter(|b| {
                    needle.is_empty()
                        || b.title.to_lowercase().contains(&needle)
                        || b.url.to_lowercase().contains(&needle)
                })
                .collect();
            assert_eq!(visible, expected, "query `{query}`");
        }
    }
}
