//! Runtime configuration for the app shell.
//!
//! # Design
//! - Defaults target a same-origin deployment with no background polling.
//! - Overrides are plain strings (LocalStorage values); bad ones are ignored, never fatal.

/// LocalStorage key overriding the API base URL.
pub const API_BASE_KEY: &str = "bookrequest.api_base";
/// LocalStorage key enabling periodic status refresh (milliseconds).
pub const STATUS_POLL_KEY: &str = "bookrequest.status_poll_ms";
/// Shortest accepted polling interval.
pub const MIN_POLL_MS: u32 = 1_000;

/// Effective UI configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiConfig {
    /// Prefix prepended to every API path; empty means same origin.
    pub api_base: String,
    /// Status refresh interval; `None` disables the timer.
    pub status_poll_ms: Option<u32>,
}

impl UiConfig {
    /// Build a config from optional raw overrides.
    #[must_use]
    pub fn from_overrides(api_base: Option<&str>, status_poll_ms: Option<&str>) -> Self {
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        let status_poll_ms = status_poll_ms
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|ms| *ms >= MIN_POLL_MS);
        Self {
            api_base,
            status_poll_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_same_origin_without_polling() {
        assert_eq!(UiConfig::from_overrides(None, None), UiConfig::default());
    }

    #[test]
    fn base_is_trimmed() {
        let config = UiConfig::from_overrides(Some(" https://books.lan/ "), None);
        assert_eq!(config.api_base, "https://books.lan");
    }

    #[test]
    fn poll_interval_rejects_small_or_malformed_values() {
        assert_eq!(
            UiConfig::from_overrides(None, Some("5000")).status_poll_ms,
            Some(5_000)
        );
        assert_eq!(UiConfig::from_overrides(None, Some("999")).status_poll_ms, None);
        assert_eq!(UiConfig::from_overrides(None, Some("0")).status_poll_ms, None);
        assert_eq!(UiConfig::from_overrides(None, Some("fast")).status_poll_ms, None);
    }
}
