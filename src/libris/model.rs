use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry as delivered by the book provider. Never mutated by the
/// core; a full snapshot is persisted when the book is favorited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
    pub file: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A saved reading position. At most one per book; re-saving overwrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub book_id: String,
    pub page: u32,
    pub saved_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(book_id: impl Into<String>, page: u32) -> Self {
        Self {
            book_id: book_id.into(),
            // Page numbers are 1-based on the wire and in the UI
            page: page.max(1),
            saved_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreFilter {
    All,
    Tag(String),
}

impl GenreFilter {
    /// Parses the UI filter value: "all" (any case) means no genre filter.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            GenreFilter::All
        } else {
            GenreFilter::Tag(raw.to_string())
        }
    }
}

/// The active search/genre predicate for the catalog view. Derived view
/// state, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub genre: GenreFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            genre: GenreFilter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmark_page_is_at_least_one() {
        let bm = Bookmark::new("1", 0);
        assert_eq!(bm.page, 1);
    }

    #[test]
    fn genre_filter_parses_all_case_insensitively() {
        assert_eq!(GenreFilter::parse("all"), GenreFilter::All);
        assert_eq!(GenreFilter::parse("All"), GenreFilter::All);
        assert_eq!(
            GenreFilter::parse("fiction"),
            GenreFilter::Tag("fiction".into())
        );
    }
}
