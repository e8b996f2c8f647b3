//! Detail modal slice, projection and reducers.
//!
//! # Design
//! - The modal is a small state machine: closed, loading one id, loaded, or failed.
//! - A response is applied only while the modal is still loading that same id;
//!   late responses for a closed or reopened modal are dropped.

use crate::core::api::ApiError;
use crate::features::details::actions::DownloadOutcome;
use crate::core::display::{MISSING, UNKNOWN_AUTHOR, UNTITLED, or_placeholder};
use bookrequest_api_models::{BookDetail, BookSummary};
use std::fmt;

/// One "further information" line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoLine {
    /// Label (e.g. `Series`).
    pub label: String,
    /// Value; plural values joined with `", "`.
    pub value: String,
}

impl fmt::Display for InfoLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Display-ready book detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    /// Cover URL.
    pub cover: Option<String>,
    /// Title or "Untitled".
    pub title: String,
    /// Author or "Unknown author".
    pub author: String,
    /// Publisher or "-".
    pub publisher: String,
    /// Year or "-".
    pub year: String,
    /// Language or "-".
    pub language: String,
    /// Format or "-".
    pub format: String,
    /// Size or "-".
    pub size: String,
    /// Extra labelled metadata in server order; empty hides the section.
    pub further_info: Vec<InfoLine>,
    /// Summary used by the modal's download button.
    pub book: BookSummary,
}

impl From<BookDetail> for DetailView {
    fn from(detail: BookDetail) -> Self {
        let summary = detail.summary;
        Self {
            cover: summary.preview.clone(),
            title: or_placeholder(summary.title.as_deref(), UNTITLED),
            author: or_placeholder(summary.author.as_deref(), UNKNOWN_AUTHOR),
            publisher: or_placeholder(detail.publisher.as_deref(), MISSING),
            year: or_placeholder(summary.year.as_deref(), MISSING),
            language: or_placeholder(summary.language.as_deref(), MISSING),
            format: or_placeholder(summary.format.as_deref(), MISSING),
            size: or_placeholder(summary.size.as_deref(), MISSING),
            further_info: detail
                .info
                .into_iter()
                .map(|entry| InfoLine {
                    value: entry.value.joined(),
                    label: entry.label,
                })
                .collect(),
            book: summary,
        }
    }
}

/// Detail modal state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailsState {
    /// Modal hidden, content cleared.
    #[default]
    Closed,
    /// Modal open with a loading placeholder.
    Loading {
        /// Book being fetched.
        id: String,
    },
    /// Modal showing a book.
    Loaded(Box<DetailView>),
    /// Modal showing the generic failure message.
    Failed {
        /// Book that failed to load.
        id: String,
    },
}

impl DetailsState {
    /// Whether the modal is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Open the modal for a book and show the loading placeholder.
pub fn open_details(state: &mut DetailsState, id: &str) {
    *state = DetailsState::Loading { id: id.to_string() };
}

/// Close the modal and clear its content.
pub fn close_details(state: &mut DetailsState) {
    *state = DetailsState::Closed;
}

/// Close the modal once a download was queued; failures leave it as is.
pub fn finish_download(state: &mut DetailsState, outcome: &DownloadOutcome) {
    if matches!(outcome, DownloadOutcome::Queued { .. }) {
        close_details(state);
    }
}

/// Apply a detail response if the modal is still waiting for this id.
pub fn apply_detail_result(
    state: &mut DetailsState,
    id: &str,
    result: Result<BookDetail, ApiError>,
) {
    if !matches!(state, DetailsState::Loading { id: pending } if pending == id) {
        return;
    }
    *state = match result {
        Ok(detail) => DetailsState::Loaded(Box::new(DetailView::from(detail))),
        Err(_) => DetailsState::Failed { id: id.to_string() },
    };
}
