//! Persistence and environment helpers for the app shell.

use crate::core::config::{API_BASE_KEY, STATUS_POLL_KEY, UiConfig};
use crate::core::theme::PreferenceStore;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// LocalStorage-backed preferences holding raw (unquoted) strings.
pub(crate) struct BrowserPreferences;

impl PreferenceStore for BrowserPreferences {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            console::error!("storage operation failed", "set", key, err);
        }
    }
}

pub(crate) fn load_config() -> UiConfig {
    let store = BrowserPreferences;
    UiConfig::from_overrides(
        store.read(API_BASE_KEY).as_deref(),
        store.read(STATUS_POLL_KEY).as_deref(),
    )
}

pub(crate) const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub(crate) fn prefers_dark() -> bool {
    window()
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}
