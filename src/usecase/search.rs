use super::InvalidTagError;
use crate::domain::{Bookmark, Repository, RepositoryError};
use crate::selector::{SelectError, Selector};

/// Raw filter input for [`SearchBookmark`]. An empty tag list means no
/// filtering.
#[derive(Debug, Clone, Default)]
pub struct SearchBookmarkInput {
    /// Raw filter tags; a bookmark must carry every one of them.
    pub tags: Vec<String>,
}

/// Errors raised while searching for a bookmark.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A filter tag failed validation.
    #[error(transparent)]
    Tag(#[from] InvalidTagError),

    /// The collection could not be listed.
    #[error("failed to list bookmarks")]
    Repository(#[from] RepositoryError),

    /// The selector failed for a reason other than cancellation.
    #[error("failed to select a bookmark")]
    Selection(#[source] SelectError),
}

/// Filters the collection by tags and lets the user pick one bookmark.
pub struct SearchBookmark<'a> {
    repo: &'a dyn Repository,
    selector: &'a dyn Selector,
}

impl<'a> SearchBookmark<'a> {
    /// Creates the use case with its repository and selector.
    pub const fn new(repo: &'a dyn Repository, selector: &'a dyn Selector) -> Self {
        Self { repo, selector }
    }

    /// Runs the operation.
    ///
    /// Returns `Ok(None)` when the user cancels the selection; cancellation
    /// is not an error at this layer. An empty filtered list is passed to
    /// the selector as-is, which reports it as
    /// [`SelectError::Empty`].
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad filter tag (with its index), a
    /// repository error if listing fails, or a selection error for any
    /// selector failure other than cancellation.
    pub fn execute(&self, input: SearchBookmarkInput) -> Result<Option<Bookmark>, Error> {
        let tags = super::parse_tags(&input.tags)?;
        let bookmarks = self.repo.list()?;
        let candidates = super::filter_by_tags(&bookmarks, &tags);

        tracing::debug!(
            total = bookmarks.len(),
            matching = candidates.len(),
            "filtered bookmarks"
        );

        match self.selector.select(&candidates) {
            Ok(bookmark) => Ok(Some(bookmark)),
            Err(SelectError::Cancelled) => Ok(None),
            Err(err) => Err(Error::Selection(err)),
        }
    }
}
