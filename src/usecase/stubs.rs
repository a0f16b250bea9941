//! In-memory test doubles for the repository, selector, and opener
//! capabilities.

use std::cell::{Cell, RefCell};
use std::io;

use crate::domain::{
    Bookmark, BookmarkDescription, BookmarkId, BookmarkTag, BookmarkTitle, BookmarkUrl,
    Repository, RepositoryError,
};
use crate::opener::{OpenError, Opener};
use crate::selector::{SelectError, Selector};

/// Builds a valid bookmark for tests.
pub(crate) fn bookmark(title: &str, tags: &[&str]) -> Bookmark {
    Bookmark::create(
        BookmarkUrl::new(format!("https://example.com/{title}")).unwrap(),
        BookmarkTitle::new(title).unwrap(),
        BookmarkDescription::new(""),
        tags.iter().map(|raw| BookmarkTag::new(raw).unwrap()).collect(),
    )
}

/// A `Vec`-backed repository. Single-threaded tests only, so interior
/// mutability through `RefCell` suffices.
#[derive(Debug, Default)]
pub(crate) struct MemoryRepository {
    bookmarks: RefCell<Vec<Bookmark>>,
    delete_calls: Cell<usize>,
}

impl MemoryRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            bookmarks: RefCell::new(bookmarks),
            delete_calls: Cell::new(0),
        }
    }

    pub(crate) fn bookmarks(&self) -> Vec<Bookmark> {
        self.bookmarks.borrow().clone()
    }

    pub(crate) fn delete_calls(&self) -> usize {
        self.delete_calls.get()
    }
}

impl Repository for MemoryRepository {
    fn add(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
        self.bookmarks.borrow_mut().push(bookmark.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Bookmark>, RepositoryError> {
        Ok(self.bookmarks.borrow().clone())
    }

    fn delete(&self, id: BookmarkId) -> Result<(), RepositoryError> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        self.bookmarks
            .borrow_mut()
            .retain(|bookmark| bookmark.id() != id);
        Ok(())
    }
}

/// A repository whose every operation fails.
#[derive(Debug, Default)]
pub(crate) struct FailingRepository;

impl FailingRepository {
    fn error() -> RepositoryError {
        RepositoryError::new(anyhow::anyhow!("storage offline"))
    }
}

impl Repository for FailingRepository {
    fn add(&self, _bookmark: &Bookmark) -> Result<(), RepositoryError> {
        Err(Self::error())
    }

    fn list(&self) -> Result<Vec<Bookmark>, RepositoryError> {
        Err(Self::error())
    }

    fn delete(&self, _id: BookmarkId) -> Result<(), RepositoryError> {
        Err(Self::error())
    }
}

/// What a [`ScriptedSelector`] does once invoked.
#[derive(Debug)]
pub(crate) enum Behaviour {
    /// Return the candidate at this index.
    Pick(usize),
    /// Signal user cancellation.
    Cancel,
    /// Fail with an I/O error.
    Fail,
    /// Return this bookmark regardless of the candidates (a misbehaving
    /// selector, for the post-selection existence check).
    Forge(Bookmark),
}

/// A selector with scripted behaviour that records the candidate lists it
/// was given.
#[derive(Debug)]
pub(crate) struct ScriptedSelector {
    behaviour: Behaviour,
    seen: RefCell<Vec<Vec<Bookmark>>>,
}

impl ScriptedSelector {
    pub(crate) fn pick(index: usize) -> Self {
        Self::with(Behaviour::Pick(index))
    }

    pub(crate) fn cancel() -> Self {
        Self::with(Behaviour::Cancel)
    }

    pub(crate) fn fail() -> Self {
        Self::with(Behaviour::Fail)
    }

    pub(crate) fn forge(bookmark: Bookmark) -> Self {
        Self::with(Behaviour::Forge(bookmark))
    }

    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            seen: RefCell::new(Vec::new()),
        }
    }

    /// The candidates passed to the most recent `select` call.
    pub(crate) fn last_candidates(&self) -> Vec<Bookmark> {
        self.seen.borrow().last().cloned().unwrap_or_default()
    }
}

impl Selector for ScriptedSelector {
    fn select(&self, candidates: &[Bookmark]) -> Result<Bookmark, SelectError> {
        self.seen.borrow_mut().push(candidates.to_vec());

        if candidates.is_empty() {
            return Err(SelectError::Empty);
        }

        match &self.behaviour {
            Behaviour::Pick(index) => Ok(candidates[*index].clone()),
            Behaviour::Cancel => Err(SelectError::Cancelled),
            Behaviour::Fail => Err(SelectError::Io(io::Error::other("terminal unavailable"))),
            Behaviour::Forge(bookmark) => Ok(bookmark.clone()),
        }
    }
}

/// An opener that records the URLs it was asked to open.
#[derive(Debug, Default)]
pub(crate) struct RecordingOpener {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingOpener {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Opener for RecordingOpener {
    fn open(&self, bookmark: &Bookmark) -> Result<(), OpenError> {
        if self.fail {
            return Err(OpenError::Launch(io::Error::other("no browser")));
        }
        self.opened
            .borrow_mut()
            .push(bookmark.url().as_str().to_owned());
        Ok(())
    }
}
