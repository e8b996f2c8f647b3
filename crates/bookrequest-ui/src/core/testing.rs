//! In-memory fakes for controller tests.

use crate::core::api::{ApiError, BookApi};
use crate::core::theme::PreferenceStore;
use async_trait::async_trait;
use bookrequest_api_models::{ActiveDownloads, BookDetail, BookSummary, StatusSnapshot};
use std::cell::RefCell;
use std::collections::HashMap;

/// Scripted [`BookApi`] that records every call it receives.
pub(crate) struct FakeApi {
    pub(crate) search: Result<Vec<BookSummary>, ApiError>,
    pub(crate) info: Result<BookDetail, ApiError>,
    pub(crate) download: Result<(), ApiError>,
    pub(crate) cancel: Result<(), ApiError>,
    pub(crate) status: Result<StatusSnapshot, ApiError>,
    pub(crate) clear: Result<(), ApiError>,
    pub(crate) active: Result<ActiveDownloads, ApiError>,
    pub(crate) calls: RefCell<Vec<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            search: Ok(Vec::new()),
            info: Err(ApiError::Status {
                status: 404,
                detail: "Not Found".into(),
            }),
            download: Ok(()),
            cancel: Ok(()),
            status: Ok(StatusSnapshot::default()),
            clear: Ok(()),
            active: Ok(ActiveDownloads::default()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn count(&self, name: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.split(':').next() == Some(name))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl BookApi for FakeApi {
    async fn search(&self, query: &str) -> Result<Vec<BookSummary>, ApiError> {
        self.record(format!("search:{query}"));
        self.search.clone()
    }

    async fn book_info(&self, id: &str) -> Result<BookDetail, ApiError> {
        self.record(format!("info:{id}"));
        self.info.clone()
    }

    async fn queue_download(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("download:{id}"));
        self.download.clone()
    }

    async fn cancel_download(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("cancel:{id}"));
        self.cancel.clone()
    }

    async fn status(&self) -> Result<StatusSnapshot, ApiError> {
        self.record("status".into());
        self.status.clone()
    }

    async fn clear_completed(&self) -> Result<(), ApiError> {
        self.record("clear".into());
        self.clear.clone()
    }

    async fn active_downloads(&self) -> Result<ActiveDownloads, ApiError> {
        self.record("active".into());
        self.active.clone()
    }
}

/// Transport failure used by tests.
pub(crate) fn offline() -> ApiError {
    ApiError::Transport {
        detail: "offline".into(),
    }
}

/// Summary with only an id and title.
pub(crate) fn book(id: &str, title: &str) -> BookSummary {
    BookSummary {
        id: id.into(),
        title: Some(title.into()),
        author: None,
        year: None,
        language: None,
        format: None,
        size: None,
        preview: None,
    }
}

/// Decode a status payload from JSON text.
pub(crate) fn status(json: &str) -> StatusSnapshot {
    serde_json::from_str(json).expect("status fixture decodes")
}

/// HashMap-backed [`PreferenceStore`].
#[derive(Default)]
pub(crate) struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub(crate) fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.write(key, value);
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
