use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of document categories.
///
/// Anything a loader hands us outside this set is folded into [`Category::Misc`]
/// at the boundary, so no other component ever sees an unknown category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    Research,
    Deploy,
    Design,
    Media,
    Data,
    Dev,
    Docs,
    #[default]
    Misc,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Research,
        Category::Deploy,
        Category::Design,
        Category::Media,
        Category::Data,
        Category::Dev,
        Category::Docs,
        Category::Misc,
    ];

    /// Parse a category id. Unknown or empty ids become `Misc`.
    pub fn parse(id: &str) -> Self {
        Self::from_known(id).unwrap_or_default()
    }

    /// Strict lookup: `None` for ids outside the closed set.
    pub fn from_known(id: &str) -> Option<Self> {
        let id = id.trim();
        Category::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Category::Research => "research",
            Category::Deploy => "deploy",
            Category::Design => "design",
            Category::Media => "media",
            Category::Data => "data",
            Category::Dev => "dev",
            Category::Docs => "docs",
            Category::Misc => "misc",
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Category::Research => "Research",
            Category::Deploy => "Deploy",
            Category::Design => "Design",
            Category::Media => "Media",
            Category::Data => "Data",
            Category::Dev => "Dev",
            Category::Docs => "Docs",
            Category::Misc => "Misc",
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        let category = Category::parse(&value);
        if category == Category::Misc && value.trim() != "misc" {
            tracing::debug!(category = %value, "Unknown category folded into misc");
        }
        category
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The category filter driven by the pill row: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// `"all"` and anything outside the closed set select everything.
    pub fn parse(id: &str) -> Self {
        match Category::from_known(id) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.id(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// One row of the category id -> label table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: Category,
    pub label: String,
}

/// The fixed id -> label table supplied alongside the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    entries: Vec<CategoryEntry>,
}

impl CategoryTable {
    pub fn new(entries: Vec<CategoryEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(
            Category::ALL
                .into_iter()
                .map(|id| CategoryEntry {
                    id,
                    label: id.default_label().to_string(),
                })
                .collect(),
        )
    }

    /// Label for a category; categories missing from the table read as "Misc".
    pub fn label(&self, category: Category) -> &str {
        self.entries
            .iter()
            .find(|e| e.id == category)
            .map(|e| e.label.as_str())
            .unwrap_or("Misc")
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::standard()
    }
}
