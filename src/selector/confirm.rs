use dialoguer::Confirm;

use super::{SelectError, Selector, detail_block};
use crate::domain::Bookmark;

/// Decorator that asks for explicit confirmation after the inner selection.
///
/// The selected bookmark's details are printed first, then a yes/no prompt.
/// Declining (or dismissing the prompt) cancels the selection, which callers
/// already treat as a quiet no-op. Used by the CLI so that deletion only
/// proceeds after the user has confirmed the exact bookmark.
#[derive(Debug, Clone)]
pub struct ConfirmedSelector<S> {
    inner: S,
    prompt: String,
}

impl<S> ConfirmedSelector<S> {
    /// Wraps `inner`, confirming each pick with the given yes/no prompt.
    pub fn new(inner: S, prompt: impl Into<String>) -> Self {
        Self {
            inner,
            prompt: prompt.into(),
        }
    }
}

impl<S: Selector> Selector for ConfirmedSelector<S> {
    fn select(&self, candidates: &[Bookmark]) -> Result<Bookmark, SelectError> {
        let bookmark = self.inner.select(candidates)?;

        println!("\n{}\n", detail_block(&bookmark));
        let confirmed = Confirm::new()
            .with_prompt(self.prompt.clone())
            .default(false)
            .interact_opt()?;

        if confirmed == Some(true) {
            Ok(bookmark)
        } else {
            Err(SelectError::Cancelled)
        }
    }
}
