//! Domain models for bookmark management.
//!
//! This module contains the validated value types, the [`Bookmark`]
//! aggregate, and the [`Repository`] persistence boundary.

/// Bookmark value types and the aggregate entity.
pub mod bookmark;
pub use bookmark::{
    Bookmark, BookmarkDescription, BookmarkId, BookmarkTag, BookmarkTitle, BookmarkUrl,
    ValidationError,
};

/// The persistence capability consumed by the use cases.
pub mod repository;
pub use repository::{Repository, RepositoryError};
