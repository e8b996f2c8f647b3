//! Display fallbacks shared by cards, the detail modal and queue rows.

/// Shown when a book has no title.
pub const UNTITLED: &str = "Untitled";
/// Shown when a book has no author.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";
/// Shown for any other missing field.
pub const MISSING: &str = "-";

/// Return the value, or the placeholder when absent.
#[must_use]
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value.unwrap_or(placeholder).to_string()
}

/// Uppercase the first character (`"downloading"` → `"Downloading"`).
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize("queued"), "Queued");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn placeholder_only_when_missing() {
        assert_eq!(or_placeholder(None, UNTITLED), "Untitled");
        assert_eq!(or_placeholder(Some("Dune"), UNTITLED), "Dune");
    }
}
