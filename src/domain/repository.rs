use super::bookmark::{Bookmark, BookmarkId};

/// Error returned by repository operations.
///
/// Storage adapters wrap their own typed errors in this; callers only need
/// to know that persistence failed and why, not which backend was involved.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct RepositoryError(#[from] anyhow::Error);

impl RepositoryError {
    /// Wraps any error as a repository failure.
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }
}

/// The persistence boundary for the bookmark collection.
///
/// Production code supplies a file-backed adapter
/// ([`JsonStorage`](crate::storage::JsonStorage)); tests supply in-memory
/// stubs.
pub trait Repository {
    /// Appends one bookmark to the durable collection.
    ///
    /// On success the bookmark is immediately visible to subsequent
    /// [`list`](Repository::list) calls. Either fully succeeds or fully
    /// fails; a failed add leaves the collection untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the collection cannot be read or
    /// written.
    fn add(&self, bookmark: &Bookmark) -> Result<(), RepositoryError>;

    /// Returns all stored bookmarks in storage order.
    ///
    /// Returns an empty list (not an error) when no collection exists yet.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the collection cannot be read.
    fn list(&self) -> Result<Vec<Bookmark>, RepositoryError>;

    /// Removes the bookmark with the matching identifier.
    ///
    /// Succeeds as a no-op if no such bookmark exists; callers needing an
    /// existence guarantee must check beforehand.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the collection cannot be read or
    /// written.
    fn delete(&self, id: BookmarkId) -> Result<(), RepositoryError>;
}
