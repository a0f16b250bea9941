use super::InvalidTagError;
use crate::domain::{Bookmark, BookmarkId, Repository, RepositoryError};
use crate::selector::{SelectError, Selector};

/// Raw filter input for [`DeleteBookmark`]. An empty tag list means no
/// filtering.
#[derive(Debug, Clone, Default)]
pub struct DeleteBookmarkInput {
    /// Raw filter tags; a bookmark must carry every one of them.
    pub tags: Vec<String>,
}

/// Errors raised while deleting a bookmark.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A filter tag failed validation.
    #[error(transparent)]
    Tag(#[from] InvalidTagError),

    /// The collection could not be listed or written.
    #[error("failed to delete bookmark")]
    Repository(#[from] RepositoryError),

    /// The selector failed for a reason other than cancellation.
    #[error("failed to select a bookmark")]
    Selection(#[source] SelectError),

    /// The selected bookmark was not in the originally listed collection.
    ///
    /// The selector returned an item outside its candidate set; this is an
    /// internal consistency violation, not user error. Nothing is deleted.
    #[error("bookmark with ID {id} not found")]
    NotFound {
        /// Identifier of the phantom selection.
        id: BookmarkId,
    },
}

/// Filters the collection by tags, lets the user pick one bookmark, and
/// deletes it.
///
/// Confirmation is not this use case's concern; the CLI composes a
/// confirming selector on top
/// ([`ConfirmedSelector`](crate::selector::ConfirmedSelector)).
pub struct DeleteBookmark<'a> {
    repo: &'a dyn Repository,
    selector: &'a dyn Selector,
}

impl<'a> DeleteBookmark<'a> {
    /// Creates the use case with its repository and selector.
    pub const fn new(repo: &'a dyn Repository, selector: &'a dyn Selector) -> Self {
        Self { repo, selector }
    }

    /// Runs the operation, returning the deleted bookmark.
    ///
    /// Returns `Ok(None)` when the user cancels the selection. Before
    /// deleting, the selected identifier is re-verified against the
    /// unfiltered list fetched at the start; a selection outside that set
    /// fails with [`Error::NotFound`] and nothing is deleted.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad filter tag (with its index), a
    /// repository error if listing or deleting fails, a selection error for
    /// any selector failure other than cancellation, or [`Error::NotFound`]
    /// for a selection outside the candidate set.
    pub fn execute(&self, input: DeleteBookmarkInput) -> Result<Option<Bookmark>, Error> {
        let tags = super::parse_tags(&input.tags)?;
        let bookmarks = self.repo.list()?;
        let candidates = super::filter_by_tags(&bookmarks, &tags);

        let selected = match self.selector.select(&candidates) {
            Ok(bookmark) => bookmark,
            Err(SelectError::Cancelled) => return Ok(None),
            Err(err) => return Err(Error::Selection(err)),
        };

        if !bookmarks
            .iter()
            .any(|bookmark| bookmark.id() == selected.id())
        {
            return Err(Error::NotFound { id: selected.id() });
        }

        self.repo.delete(selected.id())?;

        tracing::info!(id = %selected.id(), title = %selected.title(), "deleted bookmark");
        Ok(Some(selected))
    }
}
