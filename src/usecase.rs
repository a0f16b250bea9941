//! User-facing operations.
//!
//! Each use case is constructed with the capabilities it needs (repository,
//! selector, opener) and performs one operation end to end via `execute`.
//! Validation happens up front through the domain value types, so a failing
//! input never reaches persistence.

/// Add a bookmark from raw input.
pub mod add;
pub use add::{AddBookmark, AddBookmarkInput};

/// Filter by tags and pick a bookmark interactively.
pub mod search;
pub use search::{SearchBookmark, SearchBookmarkInput};

/// Filter, pick, re-verify, and delete a bookmark.
pub mod delete;
pub use delete::{DeleteBookmark, DeleteBookmarkInput};

/// Open a bookmark in an external application.
pub mod open;
pub use open::{OpenBookmark, OpenBookmarkInput};

#[cfg(test)]
pub(crate) mod stubs;

use crate::domain::{Bookmark, BookmarkTag, ValidationError};

/// A raw tag that failed validation, with its position in the input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid tag at index {index}")]
pub struct InvalidTagError {
    /// Zero-based position of the offending tag.
    pub index: usize,
    /// The underlying validation failure.
    #[source]
    pub source: ValidationError,
}

/// Validates raw tags in order, stopping at the first invalid one.
fn parse_tags(raw: &[String]) -> Result<Vec<BookmarkTag>, InvalidTagError> {
    raw.iter()
        .enumerate()
        .map(|(index, raw)| {
            BookmarkTag::new(raw).map_err(|source| InvalidTagError { index, source })
        })
        .collect()
}

/// Keeps the bookmarks whose tag set is a superset of `filter`, preserving
/// order. An empty filter keeps everything.
fn filter_by_tags(bookmarks: &[Bookmark], filter: &[BookmarkTag]) -> Vec<Bookmark> {
    bookmarks
        .iter()
        .filter(|bookmark| bookmark.matches_tags(filter))
        .cloned()
        .collect()
}
