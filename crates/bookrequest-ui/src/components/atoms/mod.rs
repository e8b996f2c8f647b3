//! Shared UI atoms used by the feature views.

pub(crate) mod empty_state;
pub(crate) mod progress_bar;

pub(crate) use empty_state::EmptyState;
pub(crate) use progress_bar::ProgressBar;
