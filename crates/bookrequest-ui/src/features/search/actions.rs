//! Search controller.

use crate::core::api::{ApiError, BookApi};
use bookrequest_api_models::BookSummary;

/// Result of one search trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The built query was empty; no request was sent.
    Skipped,
    /// The server returned these results (possibly none).
    Found(Vec<BookSummary>),
    /// The request failed; rendered like an empty result.
    Failed(ApiError),
}

impl SearchOutcome {
    /// Results to render; failures and skipped searches render as empty.
    #[must_use]
    pub fn into_results(self) -> Vec<BookSummary> {
        match self {
            Self::Found(results) => results,
            Self::Skipped | Self::Failed(_) => Vec::new(),
        }
    }
}

/// Run a search for a prebuilt query. Empty queries never reach the network.
pub async fn run_search<A>(api: &A, query: &str) -> SearchOutcome
where
    A: BookApi + ?Sized,
{
    if query.is_empty() {
        return SearchOutcome::Skipped;
    }
    match api.search(query).await {
        Ok(results) => SearchOutcome::Found(results),
        Err(err) => SearchOutcome::Failed(err),
    }
}
