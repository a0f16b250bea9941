use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

/// Error returned when a raw value fails bookmark field validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The identifier is not a syntactically valid UUID.
    #[error("invalid bookmark ID '{0}': not a valid UUID")]
    Id(String),

    /// The URL is empty.
    #[error("URL cannot be empty")]
    EmptyUrl,

    /// The URL does not parse as an absolute URL with a scheme and host.
    #[error("invalid URL '{0}': expected an absolute URL with a scheme and host")]
    Url(String),

    /// The title is empty after trimming whitespace.
    #[error("title cannot be empty")]
    EmptyTitle,

    /// The tag is empty after trimming whitespace.
    #[error("tag cannot be empty")]
    EmptyTag,
}

/// Opaque unique identifier of a bookmark.
///
/// Generated fresh when a bookmark is created; parsed back from its UUID
/// string form when loading from storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookmarkId(Uuid);

impl BookmarkId {
    /// Parses an identifier from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Id`] if the string is not a valid UUID.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| ValidationError::Id(raw.to_owned()))
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// An absolute URL.
///
/// The raw string is preserved verbatim; validation only checks that it
/// parses with a non-empty scheme and host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkUrl(String);

impl BookmarkUrl {
    /// Validates a raw URL string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyUrl`] if the string is empty, or
    /// [`ValidationError::Url`] if it does not parse as an absolute URL with
    /// a host.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        let parsed = Url::parse(&raw).map_err(|_| ValidationError::Url(raw.clone()))?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ValidationError::Url(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the URL string exactly as it was supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BookmarkUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkUrl {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Display title of a bookmark. Stored trimmed; never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkTitle(String);

impl BookmarkTitle {
    /// Trims the raw title and validates that something remains.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] if the trimmed string is
    /// empty.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BookmarkTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkTitle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkTitle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Free-form description of a bookmark. Stored trimmed; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkDescription(String);

impl BookmarkDescription {
    /// Trims the raw description. Always succeeds.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_owned())
    }

    /// Returns the trimmed description.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the description is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for BookmarkDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkDescription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single tag label. Stored trimmed; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookmarkTag(String);

impl BookmarkTag {
    /// Trims the raw tag and validates that something remains.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTag`] if the trimmed string is empty.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTag);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the trimmed tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BookmarkTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A saved reference to a URL with a title, optional description, and tags.
///
/// Every field has been validated by its value-type constructor, so a
/// `Bookmark` is correct by construction. Bookmarks are immutable once
/// created; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    id: BookmarkId,
    url: BookmarkUrl,
    title: BookmarkTitle,
    description: BookmarkDescription,
    tags: Vec<BookmarkTag>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// Creates a new bookmark with a freshly generated identifier.
    ///
    /// Both timestamps are set to the current time.
    #[must_use]
    pub fn create(
        url: BookmarkUrl,
        title: BookmarkTitle,
        description: BookmarkDescription,
        tags: Vec<BookmarkTag>,
    ) -> Self {
        let now = Utc::now();
        Self::new(BookmarkId::generate(), url, title, description, tags, now, now)
    }

    /// Reconstructs a bookmark from already-validated parts.
    ///
    /// Used when loading from storage, where the identifier and timestamps
    /// are known.
    #[must_use]
    pub const fn new(
        id: BookmarkId,
        url: BookmarkUrl,
        title: BookmarkTitle,
        description: BookmarkDescription,
        tags: Vec<BookmarkTag>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url,
            title,
            description,
            tags,
            created_at,
            updated_at,
        }
    }

    /// The bookmark's unique identifier.
    #[must_use]
    pub const fn id(&self) -> BookmarkId {
        self.id
    }

    /// The bookmarked URL.
    #[must_use]
    pub const fn url(&self) -> &BookmarkUrl {
        &self.url
    }

    /// The display title.
    #[must_use]
    pub const fn title(&self) -> &BookmarkTitle {
        &self.title
    }

    /// The description. May be empty.
    #[must_use]
    pub const fn description(&self) -> &BookmarkDescription {
        &self.description
    }

    /// The tags, in the order they were supplied. Duplicates are permitted.
    #[must_use]
    pub fn tags(&self) -> &[BookmarkTag] {
        &self.tags
    }

    /// When the bookmark was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the bookmark was last updated.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Checks whether this bookmark carries every tag in `filter`.
    ///
    /// This is AND semantics: the bookmark's tag set must be a superset of
    /// the filter set. The bookmark may have additional tags, and an empty
    /// filter matches unconditionally.
    #[must_use]
    pub fn matches_tags(&self, filter: &[BookmarkTag]) -> bool {
        let tag_set: std::collections::HashSet<&str> =
            self.tags.iter().map(BookmarkTag::as_str).collect();
        filter.iter().all(|tag| tag_set.contains(tag.as_str()))
    }
}
