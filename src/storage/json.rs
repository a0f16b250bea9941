use std::{
    fs, io,
    io::Write as _,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Bookmark, BookmarkDescription, BookmarkId, BookmarkTag, BookmarkTitle, BookmarkUrl,
    Repository, RepositoryError, ValidationError,
};

const FILE_NAME: &str = "bookmarks.json";

/// Errors raised by the JSON storage adapter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No per-user data directory could be determined for this platform.
    #[error("could not determine a per-user data directory")]
    DataDir,

    /// The data directory could not be created.
    #[error("failed to create data directory {}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// The collection file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        /// The collection file path.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// The collection file is not valid JSON.
    #[error("failed to parse {}", path.display())]
    Parse {
        /// The collection file path.
        path: PathBuf,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A stored record failed domain validation on load.
    #[error("invalid bookmark record at index {index} in {}", path.display())]
    Record {
        /// The collection file path.
        path: PathBuf,
        /// Zero-based position of the offending record.
        index: usize,
        /// The field that failed validation.
        #[source]
        source: ValidationError,
    },

    /// The collection file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        /// The collection file path.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },
}

impl From<Error> for RepositoryError {
    fn from(err: Error) -> Self {
        Self::new(err)
    }
}

/// File-backed [`Repository`].
///
/// The whole collection is read into memory per operation and written back
/// as a pretty-printed JSON array. Writes go through a temporary file in the
/// destination directory followed by an atomic rename, so a crash mid-write
/// never leaves a torn file behind.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Opens storage at an explicit file path, creating its parent directory
    /// if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateDir`] if the parent directory cannot be
    /// created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        Ok(Self { path })
    }

    /// Opens storage at the platform's per-user data directory
    /// (`<data dir>/bkm/bookmarks.json`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataDir`] if no data directory can be determined, or
    /// [`Error::CreateDir`] if it cannot be created.
    pub fn open_default() -> Result<Self, Error> {
        let dirs = ProjectDirs::from("", "", "bkm").ok_or(Error::DataDir)?;
        Self::open(dirs.data_dir().join(FILE_NAME))
    }

    /// The path of the collection file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Bookmark>, Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(Error::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let records: Vec<BookmarkRecord> =
            serde_json::from_str(&contents).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            })?;

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record.into_bookmark().map_err(|source| Error::Record {
                    path: self.path.clone(),
                    index,
                    source,
                })
            })
            .collect()
    }

    fn write_all(&self, bookmarks: &[Bookmark]) -> Result<(), Error> {
        let records: Vec<BookmarkRecord> = bookmarks.iter().map(BookmarkRecord::from).collect();
        let data =
            serde_json::to_vec_pretty(&records).expect("bookmark records always serialize");

        let write_err = |source: io::Error| Error::Write {
            path: self.path.clone(),
            source,
        };

        let dir = self
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        temp.write_all(&data).map_err(write_err)?;
        temp.persist(&self.path).map_err(|err| write_err(err.error))?;

        tracing::debug!(path = %self.path.display(), count = bookmarks.len(), "wrote collection");
        Ok(())
    }
}

impl Repository for JsonStorage {
    fn add(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
        let mut bookmarks = self.read_all()?;
        bookmarks.push(bookmark.clone());
        self.write_all(&bookmarks)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<Bookmark>, RepositoryError> {
        Ok(self.read_all()?)
    }

    fn delete(&self, id: BookmarkId) -> Result<(), RepositoryError> {
        let mut bookmarks = self.read_all()?;
        bookmarks.retain(|bookmark| bookmark.id() != id);
        self.write_all(&bookmarks)?;
        Ok(())
    }
}

/// On-disk form of a single bookmark.
#[derive(Debug, Serialize, Deserialize)]
struct BookmarkRecord {
    id: String,
    url: String,
    title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookmarkRecord {
    /// Re-validates a stored record through the domain constructors.
    fn into_bookmark(self) -> Result<Bookmark, ValidationError> {
        let id = BookmarkId::new(&self.id)?;
        let url = BookmarkUrl::new(self.url)?;
        let title = BookmarkTitle::new(&self.title)?;
        let description = BookmarkDescription::new(&self.description);
        let tags = self
            .tags
            .iter()
            .map(|raw| BookmarkTag::new(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Bookmark::new(
            id,
            url,
            title,
            description,
            tags,
            self.created_at,
            self.updated_at,
        ))
    }
}

impl From<&Bookmark> for BookmarkRecord {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id().to_string(),
            url: bookmark.url().as_str().to_owned(),
            title: bookmark.title().as_str().to_owned(),
            description: bookmark.description().as_str().to_owned(),
            tags: bookmark
                .tags()
                .iter()
                .map(|tag| tag.as_str().to_owned())
                .collect(),
            created_at: bookmark.created_at(),
            updated_at: bookmark.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(dir: &tempfile::TempDir) -> JsonStorage {
        JsonStorage::open(dir.path().join(FILE_NAME)).unwrap()
    }

    fn sample(title: &str, tags: &[&str]) -> Bookmark {
        Bookmark::create(
            BookmarkUrl::new("https://example.com/a?b=c").unwrap(),
            BookmarkTitle::new(title).unwrap(),
            BookmarkDescription::new("some notes"),
            tags.iter().map(|raw| BookmarkTag::new(raw).unwrap()).collect(),
        )
    }

    #[test]
    fn list_without_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(storage(&dir).list().unwrap(), Vec::new());
    }

    #[test]
    fn add_then_list_round_trips_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        let bookmark = sample("Example", &["a", "b"]);

        storage.add(&bookmark).unwrap();
        let listed = storage.list().unwrap();

        assert_eq!(listed, vec![bookmark]);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        let first = sample("first", &[]);
        let second = sample("second", &["x"]);

        storage.add(&first).unwrap();
        storage.add(&second).unwrap();

        assert_eq!(storage.list().unwrap(), vec![first, second]);
    }

    #[test]
    fn delete_removes_only_the_matching_bookmark() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        let keep = sample("keep", &[]);
        let drop = sample("drop", &[]);
        storage.add(&keep).unwrap();
        storage.add(&drop).unwrap();

        storage.delete(drop.id()).unwrap();

        assert_eq!(storage.list().unwrap(), vec![keep]);
    }

    #[test]
    fn delete_of_unknown_id_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        let bookmark = sample("kept", &[]);
        storage.add(&bookmark).unwrap();

        storage.delete(BookmarkId::generate()).unwrap();

        assert_eq!(storage.list().unwrap(), vec![bookmark]);
    }

    #[test]
    fn empty_description_and_tags_are_omitted_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        let bookmark = Bookmark::create(
            BookmarkUrl::new("https://example.com").unwrap(),
            BookmarkTitle::new("bare").unwrap(),
            BookmarkDescription::new(""),
            Vec::new(),
        );
        storage.add(&bookmark).unwrap();

        let raw = fs::read_to_string(storage.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value.as_array().unwrap()[0];

        assert!(record.get("description").is_none());
        assert!(record.get("tags").is_none());
        assert_eq!(record["url"], "https://example.com");
        assert_eq!(record["title"], "bare");
    }

    #[test]
    fn reads_records_with_omitted_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        fs::write(
            storage.path(),
            r#"[{
                "id": "a2aa9ae6-9d0a-4ce2-a1a1-0a50c3db86f9",
                "url": "https://example.com",
                "title": "bare",
                "created_at": "2024-01-02T03:04:05Z",
                "updated_at": "2024-01-02T03:04:05Z"
            }]"#,
        )
        .unwrap();

        let listed = storage.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].description().is_empty());
        assert!(listed[0].tags().is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        fs::write(storage.path(), "{ not json").unwrap();

        let err = storage.read_all().unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn invalid_record_reports_its_index() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        fs::write(
            storage.path(),
            r#"[
                {
                    "id": "a2aa9ae6-9d0a-4ce2-a1a1-0a50c3db86f9",
                    "url": "https://example.com",
                    "title": "ok",
                    "created_at": "2024-01-02T03:04:05Z",
                    "updated_at": "2024-01-02T03:04:05Z"
                },
                {
                    "id": "not-a-uuid",
                    "url": "https://example.com",
                    "title": "bad",
                    "created_at": "2024-01-02T03:04:05Z",
                    "updated_at": "2024-01-02T03:04:05Z"
                }
            ]"#,
        )
        .unwrap();

        let err = storage.read_all().unwrap_err();
        assert!(matches!(err, Error::Record { index: 1, .. }));
    }

    #[test]
    fn open_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeply").join("nested").join(FILE_NAME);

        let storage = JsonStorage::open(&nested).unwrap();

        assert!(nested.parent().unwrap().is_dir());
        assert_eq!(storage.list().unwrap(), Vec::new());
    }
}
