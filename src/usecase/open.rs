use crate::domain::Bookmark;
use crate::opener::{OpenError, Opener};

/// Input for [`OpenBookmark`]: an already-valid bookmark.
#[derive(Debug, Clone)]
pub struct OpenBookmarkInput {
    /// The bookmark to open.
    pub bookmark: Bookmark,
}

/// Opens a bookmark's URL through the opener capability.
pub struct OpenBookmark<'a> {
    opener: &'a dyn Opener,
}

impl<'a> OpenBookmark<'a> {
    /// Creates the use case with its opener.
    pub const fn new(opener: &'a dyn Opener) -> Self {
        Self { opener }
    }

    /// Runs the operation.
    ///
    /// # Errors
    ///
    /// Returns whatever [`OpenError`] the opener reports.
    pub fn execute(&self, input: OpenBookmarkInput) -> Result<(), OpenError> {
        self.opener.open(&input.bookmark)
    }
}
