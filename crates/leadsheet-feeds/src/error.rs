//! Fetch errors. Every variant collapses into the same user-facing message;
//! the detail only reaches the debug log.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("sheet export returned HTTP {0}")]
    Status(u16),
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
