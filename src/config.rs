use serde::{Deserialize, Serialize};

use crate::render::slug::DEFAULT_MAX_SLUG_LEN;

const HOME_MARKDOWN: &str = "\
## Quick Start

- Pick a document from the list to start reading.
- Press `/` or `Ctrl+K` to focus the search box.

## Browsing

Use the category pills to narrow the list. Every heading in a document is \
linked from the table of contents, and `Raw` shows the source exactly as written.
";

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub home_description: String,
    pub home_markdown: String,
    pub slug_max_len: usize,
    /// Shallowest heading level listed in the TOC panel.
    pub toc_min_level: u8,
    /// Deepest heading level listed in the TOC panel.
    pub toc_max_level: u8,
}

impl SiteConfig {
    pub fn v0() -> Self {
        Self {
            title: "Skills · Docs".into(),
            home_description: "A single-page reference with search, table of contents and copyable code blocks.".into(),
            home_markdown: HOME_MARKDOWN.into(),
            slug_max_len: DEFAULT_MAX_SLUG_LEN,
            toc_min_level: 2,
            toc_max_level: 4,
        }
    }

    pub fn shows_in_toc(&self, level: u8) -> bool {
        (self.toc_min_level..=self.toc_max_level).contains(&level)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::v0()
    }
}
