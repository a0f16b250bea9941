use super::InvalidTagError;
use crate::domain::{
    Bookmark, BookmarkDescription, BookmarkTitle, BookmarkUrl, Repository, RepositoryError,
    ValidationError,
};

/// Raw, unvalidated input for [`AddBookmark`].
#[derive(Debug, Clone, Default)]
pub struct AddBookmarkInput {
    /// The URL to bookmark.
    pub url: String,
    /// The display title.
    pub title: String,
    /// Free-form description; may be empty.
    pub description: String,
    /// Raw tags, in order.
    pub tags: Vec<String>,
}

/// Errors raised while adding a bookmark.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL failed validation.
    #[error("invalid URL")]
    Url(#[source] ValidationError),

    /// The title failed validation.
    #[error("invalid title")]
    Title(#[source] ValidationError),

    /// A tag failed validation.
    #[error(transparent)]
    Tag(#[from] InvalidTagError),

    /// The bookmark could not be persisted.
    #[error("failed to add bookmark")]
    Repository(#[from] RepositoryError),
}

/// Validates raw input, constructs a bookmark, and persists it.
///
/// Validation short-circuits before any persistence attempt; a failing input
/// leaves the repository untouched.
pub struct AddBookmark<'a> {
    repo: &'a dyn Repository,
}

impl<'a> AddBookmark<'a> {
    /// Creates the use case with its repository.
    pub const fn new(repo: &'a dyn Repository) -> Self {
        Self { repo }
    }

    /// Runs the operation, returning the persisted bookmark.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad URL, title, or tag (in that
    /// order, tags with their index), or a repository error if persistence
    /// fails.
    pub fn execute(&self, input: AddBookmarkInput) -> Result<Bookmark, Error> {
        let url = BookmarkUrl::new(input.url).map_err(Error::Url)?;
        let title = BookmarkTitle::new(&input.title).map_err(Error::Title)?;
        let description = BookmarkDescription::new(&input.description);
        let tags = super::parse_tags(&input.tags)?;

        let bookmark = Bookmark::create(url, title, description, tags);
        self.repo.add(&bookmark)?;

        tracing::info!(id = %bookmark.id(), title = %bookmark.title(), "added bookmark");
        Ok(bookmark)
    }
}
