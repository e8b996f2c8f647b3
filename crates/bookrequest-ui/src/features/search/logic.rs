//! Query building and result-card projection for catalog search.

use crate::core::display::{MISSING, UNKNOWN_AUTHOR, UNTITLED, or_placeholder};
use bookrequest_api_models::BookSummary;
use urlencoding::encode;

/// Format checkboxes offered by the advanced panel, in DOM order.
pub const FORMAT_OPTIONS: [&str; 8] = ["epub", "mobi", "azw3", "fb2", "djvu", "cbz", "cbr", "pdf"];

/// Sort choices as `(value, label)`; the empty value keeps server relevance.
pub const SORT_OPTIONS: [(&str, &str); 5] = [
    ("", "Most relevant"),
    ("newest", "Newest"),
    ("oldest", "Oldest"),
    ("largest", "Largest"),
    ("smallest", "Smallest"),
];

/// Content-type choices as `(value, label)`.
pub const CONTENT_OPTIONS: [(&str, &str); 6] = [
    ("", "Any content"),
    ("book_nonfiction", "Non-fiction"),
    ("book_fiction", "Fiction"),
    ("book_unknown", "Unknown book"),
    ("magazine", "Magazine"),
    ("book_comic", "Comic book"),
];

/// Values of the advanced filter panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvancedFilters {
    /// ISBN filter.
    pub isbn: String,
    /// Author filter.
    pub author: String,
    /// Title filter.
    pub title: String,
    /// Language filter.
    pub lang: String,
    /// Sort order.
    pub sort: String,
    /// Content type.
    pub content: String,
    /// Checked format boxes in DOM order.
    pub formats: Vec<String>,
}

impl AdvancedFilters {
    /// Check or uncheck a format box, keeping [`FORMAT_OPTIONS`] order.
    pub fn set_format(&mut self, format: &str, checked: bool) {
        self.formats = FORMAT_OPTIONS
            .iter()
            .filter(|option| {
                if **option == format {
                    checked
                } else {
                    self.formats.iter().any(|current| current == *option)
                }
            })
            .map(ToString::to_string)
            .collect();
    }

    /// Whether a format box is checked.
    #[must_use]
    pub fn has_format(&self, format: &str) -> bool {
        self.formats.iter().any(|current| current == format)
    }
}

/// Everything a search trigger reads from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    /// Primary search box.
    pub basic: String,
    /// Whether the advanced panel is expanded.
    pub advanced_open: bool,
    /// Advanced panel values (ignored while collapsed).
    pub filters: AdvancedFilters,
}

/// Build the search query string; empty means "do not search".
///
/// Advanced fields contribute only while the panel is open. Each non-empty
/// field becomes `field=value`, every checked format adds its own `format=`
/// pair, and the basic query is appended last as `query=`.
#[must_use]
pub fn build_query(form: &SearchForm) -> String {
    let mut pairs: Vec<String> = Vec::new();
    if form.advanced_open {
        let filters = &form.filters;
        let fields = [
            ("isbn", &filters.isbn),
            ("author", &filters.author),
            ("title", &filters.title),
            ("lang", &filters.lang),
            ("sort", &filters.sort),
            ("content", &filters.content),
        ];
        for (name, value) in fields {
            push_pair(&mut pairs, name, value);
        }
        for format in &filters.formats {
            push_pair(&mut pairs, "format", format);
        }
    }
    push_pair(&mut pairs, "query", &form.basic);
    pairs.join("&")
}

fn push_pair(pairs: &mut Vec<String>, name: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        pairs.push(format!("{name}={}", encode(value)));
    }
}

/// Display-ready card for one search result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Title or "Untitled".
    pub title: String,
    /// Author or "Unknown author".
    pub author: String,
    /// Year or "-".
    pub year: String,
    /// Language or "-".
    pub language: String,
    /// Format or "-".
    pub format: String,
    /// Size or "-".
    pub size: String,
    /// Cover URL when the catalog has one.
    pub preview: Option<String>,
    /// Source record, handed to the download action as-is.
    pub book: BookSummary,
}

impl From<&BookSummary> for CardView {
    fn from(book: &BookSummary) -> Self {
        Self {
            title: or_placeholder(book.title.as_deref(), UNTITLED),
            author: or_placeholder(book.author.as_deref(), UNKNOWN_AUTHOR),
            year: or_placeholder(book.year.as_deref(), MISSING),
            language: or_placeholder(book.language.as_deref(), MISSING),
            format: or_placeholder(book.format.as_deref(), MISSING),
            size: or_placeholder(book.size.as_deref(), MISSING),
            preview: book.preview.clone(),
            book: book.clone(),
        }
    }
}

/// What the results area shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardGrid {
    /// No search has completed yet.
    Pristine,
    /// A search completed with nothing to show.
    NoResults,
    /// One card per result, in server order.
    Cards(Vec<CardView>),
}

/// Project search results onto the results area.
#[must_use]
pub fn card_grid(results: Option<&[BookSummary]>) -> CardGrid {
    match results {
        None => CardGrid::Pristine,
        Some([]) => CardGrid::NoResults,
        Some(books) => CardGrid::Cards(books.iter().map(CardView::from).collect()),
    }
}
