//! App-wide yewdux store slices.
//!
//! # Design
//! - Shared UI state lives in one store; components read it through selectors.
//! - Each feature owns its slice and the free reducer functions that mutate it.

use crate::core::theme::{PreferenceStore, ThemeState};
use crate::features::details::state::DetailsState;
use crate::features::queue::state::QueueState;
use crate::features::search::state::SearchState;
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppStore {
    /// Latest search results.
    pub search: SearchState,
    /// Detail modal.
    pub details: DetailsState,
    /// Status panels and active badge.
    pub queue: QueueState,
    /// Theme preference and menu.
    pub theme: ThemeState,
}

impl AppStore {
    /// Initial store with the persisted theme preference already applied.
    #[must_use]
    pub fn seeded(preferences: &impl PreferenceStore, prefers_dark: bool) -> Self {
        Self {
            theme: ThemeState::load(preferences, prefers_dark),
            ..Self::default()
        }
    }
}
