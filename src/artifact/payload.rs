use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::document::DocumentRecord;
use crate::store::DocumentStore;
use crate::types::{CategoryEntry, CategoryTable};

/// The data island embedded in the generated page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePayload {
    #[serde(default)]
    pub generated_at: String, // informational only
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
    #[serde(default)]
    pub skills: Vec<DocumentRecord>,
}

impl SitePayload {
    pub fn new(store: &DocumentStore, categories: &CategoryTable, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            categories: categories.entries().to_vec(),
            skills: store.documents().to_vec(),
        }
    }

    /// JSON safe to place inside a `<script>` element.
    pub fn to_embedded_json(&self) -> Result<String, serde_json::Error> {
        Ok(neutralize_for_html(&serde_json::to_string(self)?))
    }

    /// Read an embedded payload back. Malformed input yields an empty payload.
    pub fn from_embedded_json(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Embedded payload unreadable, using empty payload");
            SitePayload::default()
        })
    }

    pub fn category_table(&self) -> CategoryTable {
        CategoryTable::new(self.categories.clone())
    }
}

/// Escape `<`, U+2028 and U+2029 so serialized JSON cannot close its
/// enclosing script element or break a JavaScript string literal.
pub fn neutralize_for_html(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}
