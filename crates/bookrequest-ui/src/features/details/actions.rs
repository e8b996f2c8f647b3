//! Detail and download controllers.

use crate::core::api::{ApiError, BookApi};
use crate::core::display::{UNTITLED, or_placeholder};
use crate::features::queue::actions::refresh;
use crate::features::queue::state::StatusRefresh;
use bookrequest_api_models::{BookDetail, BookSummary};

/// Fetch full metadata for the modal.
///
/// # Errors
/// Returns the [`ApiError`] from the info endpoint unchanged.
pub async fn load_details<A>(api: &A, id: &str) -> Result<BookDetail, ApiError>
where
    A: BookApi + ?Sized,
{
    api.book_info(id).await
}

/// Result of a download request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The server accepted the request.
    Queued {
        /// Title used in the confirmation toast.
        title: String,
    },
    /// The request failed; callers keep this out of sight.
    Failed(ApiError),
}

/// Ask the server to queue a book, using the summary already on screen.
pub async fn queue_download<A>(api: &A, book: &BookSummary) -> DownloadOutcome
where
    A: BookApi + ?Sized,
{
    match api.queue_download(&book.id).await {
        Ok(()) => DownloadOutcome::Queued {
            title: or_placeholder(book.title.as_deref(), UNTITLED),
        },
        Err(err) => DownloadOutcome::Failed(err),
    }
}

/// A download request and the status refresh that follows a success.
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadFollowUp {
    /// Result of the download request.
    pub outcome: DownloadOutcome,
    /// Status refresh; only issued when the download was queued.
    pub refresh: Option<StatusRefresh>,
}

/// Queue a download, then refresh status once if the server accepted it.
pub async fn download_then_refresh<A>(api: &A, book: &BookSummary) -> DownloadFollowUp
where
    A: BookApi + ?Sized,
{
    let outcome = queue_download(api, book).await;
    let refreshed = match outcome {
        DownloadOutcome::Queued { .. } => Some(refresh(api).await),
        DownloadOutcome::Failed(_) => None,
    };
    DownloadFollowUp {
        outcome,
        refresh: refreshed,
    }
}

/// Confirmation toast text for a queued download.
#[must_use]
pub fn queued_message(title: &str) -> String {
    format!("Queued for download: {title}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FakeApi, book, offline};
    use crate::features::details::state::{DetailsState, finish_download, open_details};

    #[tokio::test]
    async fn download_uses_summary_without_refetching() {
        let api = FakeApi::default();
        let outcome = queue_download(&api, &book("42", "Dune")).await;
        assert_eq!(
            outcome,
            DownloadOutcome::Queued {
                title: "Dune".into()
            }
        );
        assert_eq!(api.calls(), ["download:42"]);
        assert_eq!(queued_message("Dune"), "Queued for download: Dune");
    }

    #[tokio::test]
    async fn download_failure_is_reported_not_raised() {
        let api = FakeApi {
            download: Err(offline()),
            ..FakeApi::default()
        };
        let outcome = queue_download(&api, &book("42", "Dune")).await;
        assert_eq!(outcome, DownloadOutcome::Failed(offline()));
    }

    #[tokio::test]
    async fn details_hit_info_endpoint() {
        let api = FakeApi::default();
        assert!(load_details(&api, "7").await.is_err());
        assert_eq!(api.count("info"), 1);
    }

    #[tokio::test]
    async fn queued_download_closes_modal_and_refreshes_once() {
        let api = FakeApi::default();
        let mut details = DetailsState::default();
        open_details(&mut details, "42");

        let follow_up = download_then_refresh(&api, &book("42", "Dune")).await;
        assert_eq!(api.calls(), ["download:42", "status", "active"]);
        assert!(follow_up.refresh.is_some());

        finish_download(&mut details, &follow_up.outcome);
        assert_eq!(details, DetailsState::Closed);
    }

    #[tokio::test]
    async fn failed_download_skips_refresh_and_keeps_modal() {
        let api = FakeApi {
            download: Err(offline()),
            ..FakeApi::default()
        };
        let mut details = DetailsState::default();
        open_details(&mut details, "42");

        let follow_up = download_then_refresh(&api, &book("42", "Dune")).await;
        assert_eq!(api.calls(), ["download:42"]);
        assert_eq!(follow_up.refresh, None);

        finish_download(&mut details, &follow_up.outcome);
        assert_eq!(details, DetailsState::Loading { id: "42".into() });
    }
}
