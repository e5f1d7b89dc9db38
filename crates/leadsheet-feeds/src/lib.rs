//! leadsheet-feeds: lead source adapters for leadsheet.
//!
//! Each feed fetches the raw text of a spreadsheet export exactly once per
//! call. [`load`] folds that into a [`LoadState`] so the presentation only
//! ever sees "loading", "loaded" or the generic failure message.

pub mod error;
pub mod file;
pub mod sheet;

pub use error::FetchError;
pub use file::FileFeed;
pub use sheet::SheetFeed;

use leadsheet_core::LoadState;

/// Trait implemented by each lead source.
pub trait LeadFeed: Send + Sync {
    /// Fetch the full export body. No retries, no pagination.
    fn fetch(&self) -> impl std::future::Future<Output = Result<String, FetchError>> + Send;

    /// Short human-readable description, used in logs and the header bar.
    fn describe(&self) -> String;
}

/// Any feed the binary can be configured with.
#[derive(Debug, Clone)]
pub enum Source {
    Sheet(SheetFeed),
    File(FileFeed),
}

impl LeadFeed for Source {
    async fn fetch(&self) -> Result<String, FetchError> {
        match self {
            Source::Sheet(feed) => feed.fetch().await,
            Source::File(feed) => feed.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::Sheet(feed) => feed.describe(),
            Source::File(feed) => feed.describe(),
        }
    }
}

/// Run the one-shot ingestion pipeline against `feed`.
pub async fn load<F: LeadFeed>(feed: &F) -> LoadState {
    tracing::debug!(source = %feed.describe(), "load: fetching");
    LoadState::from_fetch(feed.fetch().await)
}

/// Bytes that are not UTF-8 become U+FFFD so one bad cell cannot sink the
/// whole export.
pub(crate) fn decode(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if let std::borrow::Cow::Owned(_) = text {
        tracing::warn!("export contained invalid UTF-8, replaced with U+FFFD");
    }
    text.into_owned()
}
