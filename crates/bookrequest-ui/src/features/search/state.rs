//! Search slice and reducers.

use crate::features::search::actions::SearchOutcome;
use bookrequest_api_models::BookSummary;

/// Search results shown in the card grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// A search request is in flight.
    pub loading: bool,
    /// Results of the latest completed search; `None` before the first one.
    pub results: Option<Vec<BookSummary>>,
}

/// Mark a search as in flight.
pub const fn begin_search(state: &mut SearchState) {
    state.loading = true;
}

/// Store the outcome of a search and clear the loading flag.
pub fn finish_search(state: &mut SearchState, outcome: SearchOutcome) {
    state.loading = false;
    state.results = Some(outcome.into_results());
}
