//! Personal bookmark management.
//!
//! Bookmarks are stored as a JSON collection in a per-user data directory
//! and manipulated through small, self-contained use cases: add, search,
//! delete, and open.

pub mod domain;
pub use domain::{
    Bookmark, BookmarkDescription, BookmarkId, BookmarkTag, BookmarkTitle, BookmarkUrl,
    Repository, RepositoryError, ValidationError,
};

/// JSON-file persistence for the bookmark collection.
pub mod storage;
pub use storage::JsonStorage;

/// Interactive pick-one-of-many capability.
pub mod selector;
pub use selector::{SelectError, Selector};

/// "Launch this URL" capability.
pub mod opener;
pub use opener::{OpenError, Opener};

/// User-facing operations composing the domain, storage, and capabilities.
pub mod usecase;
pub use usecase::{AddBookmark, DeleteBookmark, OpenBookmark, SearchBookmark};
