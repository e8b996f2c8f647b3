//! Transport-agnostic view of the book request API.
//!
//! # Design
//! - Controllers talk to [`BookApi`] only, so they run against in-memory fakes.
//! - Every call returns `Result<_, ApiError>`; callers decide whether to show or swallow.

use async_trait::async_trait;
use bookrequest_api_models::{ActiveDownloads, BookDetail, BookSummary, StatusSnapshot};
use thiserror::Error;

/// Coarse classification of API failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Network-level failure (no response).
    Transport,
    /// Non-2xx response.
    Status,
    /// Response body did not match the expected shape.
    Decode,
}

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {detail}")]
    Transport {
        /// Transport error message.
        detail: String,
    },
    /// The server answered with a non-success status.
    #[error("server responded with {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Status text reported by the browser.
        detail: String,
    },
    /// The body could not be decoded.
    #[error("malformed response: {detail}")]
    Decode {
        /// Decoder error message.
        detail: String,
    },
}

impl ApiError {
    /// Classification of this failure.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Transport { .. } => ApiErrorKind::Transport,
            Self::Status { .. } => ApiErrorKind::Status,
            Self::Decode { .. } => ApiErrorKind::Decode,
        }
    }

    /// Human-readable detail without the kind prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Transport { detail } | Self::Status { detail, .. } | Self::Decode { detail } => {
                detail
            }
        }
    }
}

/// Calls the UI makes against the book request server.
#[async_trait(?Send)]
pub trait BookApi {
    /// Run a catalog search with a prebuilt query string.
    async fn search(&self, query: &str) -> Result<Vec<BookSummary>, ApiError>;
    /// Fetch full metadata for one book.
    async fn book_info(&self, id: &str) -> Result<BookDetail, ApiError>;
    /// Ask the server to queue a download.
    async fn queue_download(&self, id: &str) -> Result<(), ApiError>;
    /// Cancel a queued or running download.
    async fn cancel_download(&self, id: &str) -> Result<(), ApiError>;
    /// Fetch the bucketed queue status.
    async fn status(&self) -> Result<StatusSnapshot, ApiError>;
    /// Drop finished entries from the queue.
    async fn clear_completed(&self) -> Result<(), ApiError>;
    /// Fetch the list of downloads in flight.
    async fn active_downloads(&self) -> Result<ActiveDownloads, ApiError>;
}
