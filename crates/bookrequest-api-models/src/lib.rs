#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the book request API.
//!
//! The server owns every shape in this crate; the UI only decodes them. Catalog
//! metadata arrives loosely typed (years as numbers or strings, sizes as free
//! text), so scalar fields are coerced to display strings while decoding and
//! views never handle raw JSON values.
//!
//! Mappings whose key order matters to the UI (status buckets, queue items,
//! "further information" labels) are decoded straight from the document into
//! ordered vectors so the server's ordering survives.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

/// Status bucket holding items waiting for a download slot.
pub const BUCKET_QUEUED: &str = "queued";
/// Status bucket holding items currently being fetched.
pub const BUCKET_DOWNLOADING: &str = "downloading";

/// Coerce a JSON scalar into trimmed display text.
///
/// Strings are trimmed, numbers and booleans are formatted, arrays are joined
/// with `", "`. `null`, objects and blank strings yield `None`.
#[must_use]
pub fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(display_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
    }
}

fn de_display<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(display_text))
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(_) | Value::Number(_) => display_text(&value)
            .ok_or_else(|| de::Error::custom("book id must not be blank")),
        _ => Err(de::Error::custom("book id must be a string or number")),
    }
}

fn de_progress<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

/// JSON object decoded as `(key, value)` pairs in document order.
struct OrderedMap<V>(Vec<(String, V)>);

impl<'de, V> Deserialize<'de> for OrderedMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for OrderedVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = OrderedMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

/// Minimal catalog entry returned by the search endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookSummary {
    #[serde(deserialize_with = "de_id")]
    /// Catalog identifier used by the info and download endpoints.
    pub id: String,
    #[serde(default, deserialize_with = "de_display")]
    /// Book title.
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de_display")]
    /// Author line as provided by the catalog.
    pub author: Option<String>,
    #[serde(default, deserialize_with = "de_display")]
    /// Publication year.
    pub year: Option<String>,
    #[serde(default, deserialize_with = "de_display")]
    /// Language name or code.
    pub language: Option<String>,
    #[serde(default, deserialize_with = "de_display")]
    /// File format (epub, pdf, ...).
    pub format: Option<String>,
    #[serde(default, deserialize_with = "de_display")]
    /// Human-readable file size.
    pub size: Option<String>,
    #[serde(default, deserialize_with = "de_display")]
    /// Cover image URL.
    pub preview: Option<String>,
}

/// Value of a "further information" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoValue {
    /// Single value.
    One(String),
    /// Several values for the same label.
    Many(Vec<String>),
}

impl InfoValue {
    /// Display form of the value; plural values are joined with `", "`.
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::One(value) => value.clone(),
            Self::Many(values) => values.join(", "),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => {
                let values: Vec<String> = items.iter().filter_map(display_text).collect();
                (!values.is_empty()).then_some(Self::Many(values))
            }
            other => display_text(other).map(Self::One),
        }
    }
}

/// Labelled "further information" entry of a book detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoEntry {
    /// Label as sent by the server (e.g. `Series`).
    pub label: String,
    /// Scalar or plural value.
    pub value: InfoValue,
}

fn de_info<'de, D>(deserializer: D) -> Result<Vec<InfoEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(OrderedMap(entries)) = Option::<OrderedMap<Value>>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(label, value)| {
            InfoValue::from_json(&value).map(|value| InfoEntry { label, value })
        })
        .collect())
}

/// Full catalog entry returned by the info endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookDetail {
    #[serde(flatten)]
    /// Fields shared with search results.
    pub summary: BookSummary,
    #[serde(default, deserialize_with = "de_display")]
    /// Publisher name.
    pub publisher: Option<String>,
    #[serde(default, deserialize_with = "de_info")]
    /// Additional labelled metadata in server order.
    pub info: Vec<InfoEntry>,
}

/// One entry of the download queue.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueItem {
    /// Book identifier (falls back to the mapping key when the body omits it).
    pub id: String,
    /// Book title, when known.
    pub title: Option<String>,
    /// Download progress in percent; only kept when the server sent a number.
    pub progress: Option<f64>,
}

#[derive(Deserialize)]
struct QueueItemBody {
    #[serde(default, deserialize_with = "de_display")]
    id: Option<String>,
    #[serde(default, deserialize_with = "de_display")]
    title: Option<String>,
    #[serde(default, deserialize_with = "de_progress")]
    progress: Option<f64>,
}

impl QueueItemBody {
    fn into_item(self, key: String) -> QueueItem {
        QueueItem {
            id: self.id.unwrap_or(key),
            title: self.title,
            progress: self.progress,
        }
    }
}

/// Named partition of the queue (queued, downloading, done, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBucket {
    /// Bucket name as keyed by the server.
    pub name: String,
    /// Items in server order.
    pub items: Vec<QueueItem>,
}

/// Queue status payload: bucket name to items, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSnapshot {
    /// Buckets in the order the server returned them.
    pub buckets: Vec<StatusBucket>,
}

impl StatusSnapshot {
    /// Look up a bucket by name.
    #[must_use]
    pub fn bucket(&self, name: &str) -> Option<&StatusBucket> {
        self.buckets.iter().find(|bucket| bucket.name == name)
    }

    /// Whether every bucket is empty (or there are no buckets at all).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.items.is_empty())
    }
}

impl<'de> Deserialize<'de> for StatusSnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let OrderedMap(raw) = OrderedMap::<Option<OrderedMap<QueueItemBody>>>::deserialize(
            deserializer,
        )?;
        let buckets = raw
            .into_iter()
            .map(|(name, items)| StatusBucket {
                name,
                items: items
                    .map(|OrderedMap(items)| {
                        items
                            .into_iter()
                            .map(|(key, body)| body.into_item(key))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();
        Ok(Self { buckets })
    }
}

/// Payload of the active-downloads endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ActiveDownloads {
    #[serde(default)]
    /// Identifiers (or records) of downloads in flight.
    pub active_downloads: Vec<Value>,
}

impl ActiveDownloads {
    /// Number of downloads in flight.
    #[must_use]
    pub fn count(&self) -> usize {
        self.active_downloads.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_coerces_scalars_and_defaults_missing_fields() {
        let summary: BookSummary = serde_json::from_str(
            r#"{"id": 42, "title": "  Dune ", "year": 1965, "size": "", "preview": null}"#,
        )
        .expect("summary decodes");
        assert_eq!(summary.id, "42");
        assert_eq!(summary.title.as_deref(), Some("Dune"));
        assert_eq!(summary.year.as_deref(), Some("1965"));
        assert_eq!(summary.size, None);
        assert_eq!(summary.preview, None);
        assert_eq!(summary.author, None);
    }

    #[test]
    fn summary_rejects_missing_or_structured_id() {
        assert!(serde_json::from_str::<BookSummary>(r#"{"title": "x"}"#).is_err());
        assert!(serde_json::from_str::<BookSummary>(r#"{"id": {"a": 1}}"#).is_err());
        assert!(serde_json::from_str::<BookSummary>(r#"{"id": "  "}"#).is_err());
    }

    #[test]
    fn detail_keeps_info_order_and_joins_lists() {
        let detail: BookDetail = serde_json::from_str(
            r#"{
                "id": "md5",
                "title": "Dune",
                "publisher": "Chilton",
                "info": {"Series": ["A", "B"], "ISBN": "978", "Empty": [], "Pages": 412}
            }"#,
        )
        .expect("detail decodes");
        assert_eq!(detail.summary.id, "md5");
        assert_eq!(detail.publisher.as_deref(), Some("Chilton"));
        let labels: Vec<&str> = detail.info.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, ["Series", "ISBN", "Pages"]);
        assert_eq!(detail.info[0].value.joined(), "A, B");
        assert_eq!(detail.info[2].value, InfoValue::One("412".into()));
    }

    #[test]
    fn detail_tolerates_null_info() {
        let detail: BookDetail =
            serde_json::from_str(r#"{"id": "1", "info": null}"#).expect("detail decodes");
        assert!(detail.info.is_empty());
    }

    #[test]
    fn status_preserves_document_order() {
        let snapshot: StatusSnapshot = serde_json::from_str(
            r#"{
                "queued": {"10": {"id": "10", "title": "Ten"}, "2": {"title": "Two"}},
                "downloading": {"7": {"id": 7, "title": "Seven", "progress": 42.5}},
                "error": null,
                "done": {}
            }"#,
        )
        .expect("status decodes");
        let names: Vec<&str> = snapshot.buckets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["queued", "downloading", "error", "done"]);

        let queued = snapshot.bucket(BUCKET_QUEUED).expect("queued bucket");
        let ids: Vec<&str> = queued.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["10", "2"]);

        let downloading = snapshot.bucket(BUCKET_DOWNLOADING).expect("downloading bucket");
        assert_eq!(downloading.items[0].id, "7");
        assert_eq!(downloading.items[0].progress, Some(42.5));
        assert!(snapshot.bucket("error").expect("error bucket").items.is_empty());
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn status_ignores_non_numeric_progress() {
        let snapshot: StatusSnapshot = serde_json::from_str(
            r#"{"downloading": {"1": {"title": "A", "progress": "42"}}}"#,
        )
        .expect("status decodes");
        assert_eq!(snapshot.buckets[0].items[0].progress, None);
    }

    #[test]
    fn empty_status_reports_empty() {
        let snapshot: StatusSnapshot =
            serde_json::from_str(r#"{"queued": {}, "done": {}}"#).expect("status decodes");
        assert!(snapshot.is_empty());
        assert!(StatusSnapshot::default().is_empty());
    }

    #[test]
    fn active_downloads_count_entries() {
        let active: ActiveDownloads =
            serde_json::from_str(r#"{"active_downloads": ["a", "b"]}"#).expect("decodes");
        assert_eq!(active.count(), 2);
        let missing: ActiveDownloads = serde_json::from_str("{}").expect("decodes");
        assert_eq!(missing.count(), 0);
    }
}
