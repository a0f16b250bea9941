use dialoguer::FuzzySelect;

use super::{SelectError, Selector, display_line};
use crate::domain::Bookmark;

/// Terminal fuzzy-finder over the candidate bookmarks.
///
/// Each candidate is rendered as a single `title | url | tags | description`
/// line, so any field can be matched against.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzySelector;

impl FuzzySelector {
    /// Creates a fuzzy selector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Selector for FuzzySelector {
    fn select(&self, candidates: &[Bookmark]) -> Result<Bookmark, SelectError> {
        if candidates.is_empty() {
            return Err(SelectError::Empty);
        }

        let lines: Vec<String> = candidates.iter().map(display_line).collect();
        let picked = FuzzySelect::new()
            .with_prompt("Select a bookmark")
            .items(&lines)
            .default(0)
            .interact_opt()?;

        picked.map_or(Err(SelectError::Cancelled), |index| {
            Ok(candidates[index].clone())
        })
    }
}
