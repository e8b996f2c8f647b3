//! Paths of the book request API, relative to the configured base URL.

use urlencoding::encode;

/// Catalog search; the query string is appended by [`search_path`].
pub const SEARCH_PATH: &str = "/request/api/search";
/// Book detail lookup.
pub const INFO_PATH: &str = "/request/api/info";
/// Queue a download.
pub const DOWNLOAD_PATH: &str = "/request/api/download";
/// Bucketed queue status.
pub const STATUS_PATH: &str = "/request/api/status";
/// Drop finished queue entries.
pub const CLEAR_COMPLETED_PATH: &str = "/request/api/queue/clear";
/// Downloads currently in flight.
pub const ACTIVE_DOWNLOADS_PATH: &str = "/request/api/downloads/active";

/// Search path for an already-encoded query string.
#[must_use]
pub fn search_path(query: &str) -> String {
    format!("{SEARCH_PATH}?{query}")
}

/// Detail path for a book id.
#[must_use]
pub fn info_path(id: &str) -> String {
    format!("{INFO_PATH}?id={}", encode(id))
}

/// Download request path for a book id.
#[must_use]
pub fn download_path(id: &str) -> String {
    format!("{DOWNLOAD_PATH}?id={}", encode(id))
}

/// Per-item cancel path.
#[must_use]
pub fn cancel_path(id: &str) -> String {
    format!("{DOWNLOAD_PATH}/{}/cancel", encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_paths_encode_ids() {
        assert_eq!(info_path("abc"), "/request/api/info?id=abc");
        assert_eq!(download_path("a b&c"), "/request/api/download?id=a%20b%26c");
        assert_eq!(cancel_path("x/y"), "/request/api/download/x%2Fy/cancel");
    }

    #[test]
    fn search_path_appends_query() {
        assert_eq!(
            search_path("author=Herbert&query=dune"),
            "/request/api/search?author=Herbert&query=dune"
        );
    }
}
