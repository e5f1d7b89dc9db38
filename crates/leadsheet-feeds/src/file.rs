//! Local file feed: reads a previously downloaded CSV export.

use crate::{FetchError, LeadFeed};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LeadFeed for FileFeed {
    async fn fetch(&self) -> Result<String, FetchError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| FetchError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(crate::decode(&bytes))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
