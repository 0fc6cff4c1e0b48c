use serde::{Deserialize, Serialize};

use super::parser::{parse_front_matter, strip_front_matter, ParsedDocument};
use crate::types::{Category, DocumentId};

/// One document of the corpus, as handed over by the loader.
///
/// Records are immutable once a [`DocumentStore`](crate::store::DocumentStore)
/// owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: DocumentId,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub raw_text: String,
}

impl DocumentRecord {
    /// Build a record from a document's raw text.
    ///
    /// `name`, `description` and `license` come from the front matter; a
    /// missing name falls back to the id. The raw text is normalised to end
    /// in exactly one newline.
    pub fn ingest(id: DocumentId, category: &str, raw_text: &str) -> Self {
        let parsed = parse_front_matter(raw_text);
        let front_matter = &parsed.front_matter;

        let name = front_matter
            .non_empty("name")
            .unwrap_or(id.as_str())
            .to_string();
        let description = front_matter.get("description").unwrap_or("").to_string();
        let license = front_matter.get("license").unwrap_or("").to_string();

        let mut raw_text = raw_text.trim_end().to_string();
        raw_text.push('\n');

        DocumentRecord {
            id,
            category: Category::from(category.to_string()),
            name,
            description,
            license,
            raw_text,
        }
    }

    /// Front matter and body, derived on demand.
    pub fn parsed(&self) -> ParsedDocument {
        parse_front_matter(&self.raw_text)
    }

    /// The body without front matter, borrowed from the raw text.
    pub fn body(&self) -> &str {
        strip_front_matter(&self.raw_text)
    }

    /// Name for display and search; the id when no name was given.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}
