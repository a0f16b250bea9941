//! The boundary that launches a URL in an external application.

use std::io;

use crate::domain::Bookmark;

/// Error raised when a bookmark cannot be opened.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    /// The external application could not be launched.
    #[error("failed to launch the browser")]
    Launch(#[from] io::Error),
}

/// The "launch this URL" capability.
pub trait Opener {
    /// Opens the bookmark's URL in an external application.
    ///
    /// # Errors
    ///
    /// Returns an [`OpenError`] if the application cannot be launched.
    fn open(&self, bookmark: &Bookmark) -> Result<(), OpenError>;
}

/// Opens bookmarks in the platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl BrowserOpener {
    /// Creates a browser opener.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Opener for BrowserOpener {
    fn open(&self, bookmark: &Bookmark) -> Result<(), OpenError> {
        tracing::info!(url = %bookmark.url(), "opening in default browser");
        open::that(bookmark.url().as_str())?;
        Ok(())
    }
}
