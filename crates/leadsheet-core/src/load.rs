//! Load state for the one-shot fetch.

use crate::store::LeadBook;

/// The only message shown to the user when a fetch fails. The underlying
/// cause is logged, never displayed.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load leads from the spreadsheet.";

/// Outcome of the start-up (or refresh) fetch as seen by the presentation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(LeadBook),
    Failed(String),
}

impl LoadState {
    /// Fold a fetch result into a load state. Any error collapses into the
    /// generic failure message.
    pub fn from_fetch<E: std::fmt::Display>(result: Result<String, E>) -> Self {
        match result {
            Ok(text) => {
                let book = LeadBook::from_csv(&text);
                tracing::debug!(leads = book.len(), "load: succeeded");
                LoadState::Loaded(book)
            }
            Err(err) => {
                tracing::error!(error = %err, "load: fetch failed");
                LoadState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        }
    }

    pub fn book(&self) -> Option<&LeadBook> {
        match self {
            LoadState::Loaded(book) => Some(book),
            _ => None,
        }
    }

    pub fn book_mut(&mut self) -> Option<&mut LeadBook> {
        match self {
            LoadState::Loaded(book) => Some(book),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
