//! Interactive pick-one-of-many capability.
//!
//! The use cases only depend on the [`Selector`] trait; the terminal
//! adapters live in the submodules.

use std::io;

use crate::domain::{Bookmark, BookmarkTag};

/// Confirmation decorator for destructive selections.
pub mod confirm;
pub use confirm::ConfirmedSelector;

/// Fuzzy-finder terminal adapter.
pub mod fuzzy;
pub use fuzzy::FuzzySelector;

/// Errors raised while selecting a bookmark.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// The candidate list was empty; there is nothing to select.
    #[error("no bookmarks to select from")]
    Empty,

    /// The user explicitly cancelled the selection.
    ///
    /// Callers treat this as a quiet no-op, not a failure.
    #[error("selection cancelled")]
    Cancelled,

    /// The underlying prompt failed.
    #[error("selection prompt failed")]
    Io(#[from] io::Error),
}

impl From<dialoguer::Error> for SelectError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(err) => Self::Io(err),
        }
    }
}

/// The interactive "pick one of many" boundary.
///
/// # Contract
///
/// - an empty candidate list fails with [`SelectError::Empty`];
/// - a user-initiated abort fails with [`SelectError::Cancelled`];
/// - otherwise exactly one element of the candidate list is returned,
///   unmodified.
pub trait Selector {
    /// Picks one bookmark out of `candidates`.
    ///
    /// # Errors
    ///
    /// See the trait-level contract.
    fn select(&self, candidates: &[Bookmark]) -> Result<Bookmark, SelectError>;
}

fn join_tags(tags: &[BookmarkTag]) -> String {
    tags.iter()
        .map(BookmarkTag::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line rendering of a bookmark for list-style prompts.
pub(crate) fn display_line(bookmark: &Bookmark) -> String {
    format!(
        "{} | {} | {} | {}",
        bookmark.title(),
        bookmark.url(),
        join_tags(bookmark.tags()),
        bookmark.description()
    )
}

/// Multi-line detail rendering, shown before confirmation prompts.
pub(crate) fn detail_block(bookmark: &Bookmark) -> String {
    let mut block = format!("  Title: {}\n  URL:   {}", bookmark.title(), bookmark.url());
    if !bookmark.description().is_empty() {
        block.push_str(&format!("\n  Desc:  {}", bookmark.description()));
    }
    if !bookmark.tags().is_empty() {
        block.push_str(&format!("\n  Tags:  {}", join_tags(bookmark.tags())));
    }
    block
}
