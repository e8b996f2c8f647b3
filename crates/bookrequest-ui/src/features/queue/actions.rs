//! Status refresh and queue command controllers.

use crate::core::api::{ApiError, BookApi};
use crate::features::queue::state::StatusRefresh;

/// Commands emitted by the queue panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueAction {
    /// Reload status and badge.
    Refresh,
    /// Cancel one queued or downloading item.
    Cancel(String),
    /// Drop finished items from the server queue.
    ClearCompleted,
}

/// Result of a dispatched queue action.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionOutcome {
    /// Error from the cancel/clear call, for console logging only.
    pub command_error: Option<ApiError>,
    /// The refresh that always follows.
    pub refresh: StatusRefresh,
}

/// Fetch status, then the active count when status succeeded.
pub async fn refresh<A>(api: &A) -> StatusRefresh
where
    A: BookApi + ?Sized,
{
    match api.status().await {
        Ok(snapshot) => {
            let active = api.active_downloads().await.map(|payload| payload.count());
            StatusRefresh {
                status: Ok(snapshot),
                active: Some(active),
            }
        }
        Err(err) => StatusRefresh {
            status: Err(err),
            active: None,
        },
    }
}

/// Run a queue action followed by exactly one status refresh.
pub async fn dispatch<A>(api: &A, action: QueueAction) -> ActionOutcome
where
    A: BookApi + ?Sized,
{
    let command = match action {
        QueueAction::Refresh => Ok(()),
        QueueAction::Cancel(id) => api.cancel_download(&id).await,
        QueueAction::ClearCompleted => api.clear_completed().await,
    };
    ActionOutcome {
        command_error: command.err(),
        refresh: refresh(api).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FakeApi, offline, status};
    use bookrequest_api_models::ActiveDownloads;

    #[tokio::test]
    async fn refresh_reads_status_then_badge() {
        let api = FakeApi {
            status: Ok(status(r#"{"downloading": {"1": {}}}"#)),
            active: Ok(ActiveDownloads {
                active_downloads: vec![serde_json::json!("1"), serde_json::json!("2")],
            }),
            ..FakeApi::default()
        };
        let result = refresh(&api).await;
        assert_eq!(api.calls(), ["status", "active"]);
        assert_eq!(result.active, Some(Ok(2)));
    }

    #[tokio::test]
    async fn refresh_skips_badge_when_status_fails() {
        let api = FakeApi {
            status: Err(offline()),
            ..FakeApi::default()
        };
        let result = refresh(&api).await;
        assert_eq!(api.calls(), ["status"]);
        assert_eq!(result.active, None);
        assert!(result.status.is_err());
    }

    #[tokio::test]
    async fn cancel_then_single_refresh() {
        let api = FakeApi::default();
        let outcome = dispatch(&api, QueueAction::Cancel("a b".into())).await;
        assert_eq!(api.calls(), ["cancel:a b", "status", "active"]);
        assert_eq!(outcome.command_error, None);
    }

    #[tokio::test]
    async fn clear_failure_still_refreshes_once() {
        let api = FakeApi {
            clear: Err(offline()),
            ..FakeApi::default()
        };
        let outcome = dispatch(&api, QueueAction::ClearCompleted).await;
        assert_eq!(outcome.command_error, Some(offline()));
        assert_eq!(api.count("clear"), 1);
        assert_eq!(api.count("status"), 1);
    }

    #[tokio::test]
    async fn cancel_failure_still_refreshes_once() {
        let api = FakeApi {
            cancel: Err(offline()),
            ..FakeApi::default()
        };
        let outcome = dispatch(&api, QueueAction::Cancel("1".into())).await;
        assert!(outcome.command_error.is_some());
        assert_eq!(api.count("status"), 1);
    }

    #[tokio::test]
    async fn plain_refresh_issues_no_command() {
        let api = FakeApi::default();
        let outcome = dispatch(&api, QueueAction::Refresh).await;
        assert_eq!(api.calls(), ["status", "active"]);
        assert!(outcome.refresh.status.is_ok());
    }
}
