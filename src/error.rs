// src/error.rs
// Error taxonomy for the overlay core.
//
// Everything here is handled locally (logged, then degraded); nothing is
// expected to cross the embedder boundary as a panic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    /// Network failure, non-2xx status, or JSON decode failure while
    /// fetching from the news API.
    #[error("news detail fetch failed: {0:#}")]
    FetchFailed(anyhow::Error),

    /// A link entry that could not be parsed as an absolute URL.
    #[error("malformed link entry: {url}")]
    MalformedLink { url: String },

    /// An expected page region (overlay, sidebar) is absent from the
    /// injected page handle.
    #[error("missing page element: {what}")]
    MissingElement { what: &'static str },
}

impl OverlayError {
    pub fn fetch<E: Into<anyhow::Error>>(e: E) -> Self {
        Self::FetchFailed(e.into())
    }
}
