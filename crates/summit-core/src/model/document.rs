use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single published document from the content repository.
///
/// Only the envelope is typed; the `data` payload depends on the
/// document's custom type and is decoded on demand with [`Document::data_as`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,

    /// Human-readable identifier, present on repeatable types only.
    #[serde(default)]
    pub uid: Option<String>,

    /// Custom type of the document (e.g. "navigation", "landing").
    #[serde(rename = "type")]
    pub doc_type: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub lang: Option<String>,

    #[serde(default, with = "publication_date")]
    pub first_publication_date: Option<DateTime<Utc>>,

    #[serde(default, with = "publication_date")]
    pub last_publication_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub data: serde_json::Value,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uid: None,
            doc_type: doc_type.into(),
            tags: Vec::new(),
            lang: None,
            first_publication_date: None,
            last_publication_date: None,
            data: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    /// Decode the `data` payload into a typed view.
    ///
    /// A `null` payload is treated as an empty object so that views whose
    /// fields all default still decode.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        let value = if self.data.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            self.data.clone()
        };
        Ok(serde_json::from_value(value)?)
    }
}

/// Publication timestamps come as `2024-05-01T10:00:00+0000`, without the
/// colon RFC 3339 puts in the offset.
mod publication_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_some(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        DateTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(&raw))
            .map(|date| Some(date.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

/// One page of results from the documents search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub page: u32,
    pub results_per_page: u32,
    pub total_results_size: u32,
    pub total_pages: u32,

    /// Absolute URL of the following page, `None` on the last page.
    #[serde(default)]
    pub next_page: Option<String>,

    #[serde(default)]
    pub results: Vec<Document>,
}

impl SearchPage {
    /// Returns `true` when no further pages follow this one.
    pub fn is_last(&self) -> bool {
        self.next_page.is_none() || self.page >= self.total_pages
    }
}
