//! Queue slice, status projections and refresh reducers.
//!
//! # Design
//! - Every refresh replaces the projections whole; nothing is merged across payloads.
//! - The badge count comes only from the active-downloads endpoint and is never
//!   derived from the status buckets, so the two may disagree.
//! - A failed status fetch replaces the full panel with an error but leaves the
//!   compact panel and badge showing the last good values.

use crate::core::api::ApiError;
use crate::core::display::{MISSING, capitalize, or_placeholder};
use bookrequest_api_models::{BUCKET_DOWNLOADING, BUCKET_QUEUED, QueueItem, StatusSnapshot};

/// One queue row.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusRow {
    /// Book id, used by the cancel command.
    pub id: String,
    /// Bucket the row belongs to.
    pub bucket: String,
    /// Title or "-".
    pub title: String,
    /// Whether a cancel button is offered.
    pub cancellable: bool,
    /// Percent complete, clamped to `0..=100`; only for downloading items.
    pub progress: Option<f64>,
}

impl StatusRow {
    fn new(bucket: &str, item: &QueueItem) -> Self {
        let progress = if bucket == BUCKET_DOWNLOADING {
            item.progress.map(|value| value.clamp(0.0, 100.0))
        } else {
            None
        };
        Self {
            id: item.id.clone(),
            bucket: bucket.to_string(),
            title: or_placeholder(item.title.as_deref(), MISSING),
            cancellable: bucket == BUCKET_QUEUED || bucket == BUCKET_DOWNLOADING,
            progress,
        }
    }

    /// CSS width for the progress bar fill (`"42%"`).
    #[must_use]
    pub fn progress_width(&self) -> Option<String> {
        self.progress.map(|value| format!("{}%", value.round()))
    }

    /// Bucket name as shown on full-panel rows (`"Queued"`).
    #[must_use]
    pub fn bucket_label(&self) -> String {
        capitalize(&self.bucket)
    }
}

/// Rows of one non-empty bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusSection {
    /// Capitalized bucket name.
    pub title: String,
    /// Rows in server order.
    pub rows: Vec<StatusRow>,
}

/// What the full status panel shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FullPanel {
    /// No status has been loaded yet.
    #[default]
    Pending,
    /// Every bucket is empty.
    NoItems,
    /// One section per non-empty bucket, in server order.
    Sections(Vec<StatusSection>),
    /// The last status fetch failed.
    Failed,
}

/// Queue slice of the app store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueueState {
    /// A refresh is in flight.
    pub loading: bool,
    /// Full status panel.
    pub full: FullPanel,
    /// Compact downloading panel; `None` hides it.
    pub compact: Option<Vec<StatusRow>>,
    /// Active-download badge count.
    pub active_count: usize,
}

/// Result of one status refresh round.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusRefresh {
    /// Status payload or the error that replaced it.
    pub status: Result<StatusSnapshot, ApiError>,
    /// Active count; `None` when status failed and the endpoint was skipped.
    pub active: Option<Result<usize, ApiError>>,
}

/// Project a snapshot onto the full status panel.
#[must_use]
pub fn full_panel(snapshot: &StatusSnapshot) -> FullPanel {
    let sections: Vec<StatusSection> = snapshot
        .buckets
        .iter()
        .filter(|bucket| !bucket.items.is_empty())
        .map(|bucket| StatusSection {
            title: capitalize(&bucket.name),
            rows: bucket
                .items
                .iter()
                .map(|item| StatusRow::new(&bucket.name, item))
                .collect(),
        })
        .collect();
    if sections.is_empty() {
        FullPanel::NoItems
    } else {
        FullPanel::Sections(sections)
    }
}

/// Project a snapshot onto the compact downloading panel.
#[must_use]
pub fn compact_panel(snapshot: &StatusSnapshot) -> Option<Vec<StatusRow>> {
    snapshot
        .bucket(BUCKET_DOWNLOADING)
        .filter(|bucket| !bucket.items.is_empty())
        .map(|bucket| {
            bucket
                .items
                .iter()
                .map(|item| StatusRow::new(&bucket.name, item))
                .collect()
        })
}

/// Mark a refresh as in flight.
pub const fn begin_refresh(state: &mut QueueState) {
    state.loading = true;
}

/// Apply a refresh round to the queue slice.
pub fn apply_refresh(state: &mut QueueState, refresh: StatusRefresh) {
    state.loading = false;
    match refresh.status {
        Ok(snapshot) => {
            state.full = full_panel(&snapshot);
            state.compact = compact_panel(&snapshot);
        }
        Err(_) => state.full = FullPanel::Failed,
    }
    if let Some(Ok(count)) = refresh.active {
        state.active_count = count;
    }
}
