//! HTTP client for the book request API (gloo-net).

use crate::core::api::{ApiError, BookApi};
use crate::core::endpoints::{
    ACTIVE_DOWNLOADS_PATH, CLEAR_COMPLETED_PATH, STATUS_PATH, cancel_path, download_path,
    info_path, search_path,
};
use async_trait::async_trait;
use bookrequest_api_models::{ActiveDownloads, BookDetail, BookSummary, StatusSnapshot};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = send(Request::get(&self.url(path))).await?;
        // Decoded from text so object key order survives.
        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode {
            detail: err.to_string(),
        })
    }

    async fn get_ack(&self, path: &str) -> Result<(), ApiError> {
        send(Request::get(&self.url(path))).await.map(drop)
    }

    async fn delete_ack(&self, path: &str) -> Result<(), ApiError> {
        send(Request::delete(&self.url(path))).await.map(drop)
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(transport)?;
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            detail: response.status_text(),
        })
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport {
        detail: err.to_string(),
    }
}

#[async_trait(?Send)]
impl BookApi for ApiClient {
    async fn search(&self, query: &str) -> Result<Vec<BookSummary>, ApiError> {
        self.get_json(&search_path(query)).await
    }

    async fn book_info(&self, id: &str) -> Result<BookDetail, ApiError> {
        self.get_json(&info_path(id)).await
    }

    async fn queue_download(&self, id: &str) -> Result<(), ApiError> {
        self.get_ack(&download_path(id)).await
    }

    async fn cancel_download(&self, id: &str) -> Result<(), ApiError> {
        self.delete_ack(&cancel_path(id)).await
    }

    async fn status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get_json(STATUS_PATH).await
    }

    async fn clear_completed(&self) -> Result<(), ApiError> {
        self.delete_ack(CLEAR_COMPLETED_PATH).await
    }

    async fn active_downloads(&self) -> Result<ActiveDownloads, ApiError> {
        self.get_json(ACTIVE_DOWNLOADS_PATH).await
    }
}
