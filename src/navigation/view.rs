//! The render step: turns a [`NavState`] into everything the page shows.
//!
//! Rendering is idempotent; calling it twice with the same inputs yields the
//! same [`PageView`].

use serde::Serialize;

use super::route::fragment_for;
use super::state::{NavState, View};
use crate::config::SiteConfig;
use crate::document::DocumentRecord;
use crate::render::{escape_html, BlockRenderer, Heading};
use crate::selection::{highlight, search, SearchQuery};
use crate::store::DocumentStore;
use crate::types::{Category, CategoryFilter, CategoryTable};

/// Href of the synthetic entry shown when a document has no headings.
pub const TOP_HREF: &str = "#content";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub href: String,
    pub text: String,
    pub indent_px: u32,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub id: String,
    pub href: String,
    /// Escaped id with the query match marked.
    pub title_html: String,
    /// Escaped description with the query match marked.
    pub description_html: String,
    pub category_label: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pill {
    pub id: String,
    pub label: String,
    pub count: usize,
    pub pressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub kicker: String,
    pub title: String,
    pub subtitle: String,
    pub active_label: String,
    pub body_html: String,
    pub toc: Vec<TocEntry>,
    pub list: Vec<ListItem>,
    pub count_text: String,
    pub pills: Vec<Pill>,
    pub copy_label: String,
    pub raw_toggle_label: String,
}

/// What a copy button refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    /// The active document's source, or the home text.
    Page,
    CodeBlock(String),
    Location(String),
}

pub fn render_page(
    store: &DocumentStore,
    categories: &CategoryTable,
    config: &SiteConfig,
    state: &NavState,
) -> PageView {
    let list = list_items(store, categories, state);
    let count_text = format!("{} / {}", list.len(), store.len());
    let pills = category_pills(store, categories, state.category);
    let renderer = BlockRenderer::new(config.slug_max_len);

    let active = match state.view() {
        View::Home => None,
        View::Document { id, raw } => store.get(id.as_str()).map(|doc| (doc, raw)),
    };

    match active {
        None => {
            let rendered = renderer.render(&config.home_markdown);
            PageView {
                kicker: "Overview".to_string(),
                title: config.title.clone(),
                subtitle: config.home_description.clone(),
                active_label: "Docs".to_string(),
                body_html: rendered.html(),
                toc: toc_entries(&rendered.toc, config),
                list,
                count_text,
                pills,
                copy_label: "Copy".to_string(),
                raw_toggle_label: "Raw".to_string(),
            }
        }
        Some((doc, raw)) => {
            let parsed = doc.parsed();
            let front_matter = &parsed.front_matter;
            let title = front_matter
                .non_empty("name")
                .unwrap_or_else(|| doc.display_name())
                .to_string();
            let subtitle = front_matter
                .non_empty("description")
                .or_else(|| Some(doc.description.as_str()).filter(|d| !d.is_empty()))
                .unwrap_or("—")
                .to_string();

            let (body_html, toc) = if raw {
                let html = format!(r#"<pre class="raw">{}</pre>"#, escape_html(&doc.raw_text));
                (html, toc_entries(&[], config))
            } else {
                let rendered = renderer.render(&parsed.body);
                (rendered.html(), toc_entries(&rendered.toc, config))
            };

            PageView {
                kicker: categories.label(doc.category).to_string(),
                title,
                subtitle,
                active_label: doc.id.to_string(),
                body_html,
                toc,
                list,
                count_text,
                pills,
                copy_label: "Copy Markdown".to_string(),
                raw_toggle_label: if raw { "Pretty" } else { "Raw" }.to_string(),
            }
        }
    }
}

/// TOC panel entries for the configured level range. Falls back to a single
/// `Top` entry marked current when nothing qualifies.
pub fn toc_entries(toc: &[Heading], config: &SiteConfig) -> Vec<TocEntry> {
    let entries: Vec<TocEntry> = toc
        .iter()
        .filter(|h| !h.id.is_empty() && !h.text.is_empty() && config.shows_in_toc(h.level))
        .map(|h| TocEntry {
            href: format!("#{}", h.id),
            text: h.text.clone(),
            indent_px: 8 + u32::from(h.level.saturating_sub(config.toc_min_level)) * 10,
            current: false,
        })
        .collect();

    if entries.is_empty() {
        return vec![TocEntry {
            href: TOP_HREF.to_string(),
            text: "Top".to_string(),
            indent_px: 8,
            current: true,
        }];
    }
    entries
}

/// Mark the entry pointing at `current_id`, clearing the rest. The synthetic
/// `Top` entry is left untouched.
pub fn mark_current(entries: &mut [TocEntry], current_id: Option<&str>) {
    let Some(current_id) = current_id else {
        return;
    };
    for entry in entries.iter_mut().filter(|e| e.href != TOP_HREF) {
        entry.current = entry.href.strip_prefix('#') == Some(current_id);
    }
}

pub fn list_items(
    store: &DocumentStore,
    categories: &CategoryTable,
    state: &NavState,
) -> Vec<ListItem> {
    let query = SearchQuery::new(state.query.as_str(), state.category);
    search(store.iter(), &query)
        .into_iter()
        .map(|ranked| {
            let doc = ranked.document;
            ListItem {
                id: doc.id.to_string(),
                href: fragment_for(doc.id.as_str()),
                title_html: highlight(doc.id.as_str(), &state.query),
                description_html: highlight(&doc.description, &state.query),
                category_label: categories.label(doc.category).to_string(),
                current: state.active_id.as_ref() == Some(&doc.id),
            }
        })
        .collect()
}

/// `All` plus one pill per non-`misc` category that has documents.
pub fn category_pills(
    store: &DocumentStore,
    categories: &CategoryTable,
    selected: CategoryFilter,
) -> Vec<Pill> {
    let all = Pill {
        id: CategoryFilter::All.id().to_string(),
        label: "All".to_string(),
        count: store.len(),
        pressed: selected == CategoryFilter::All,
    };

    std::iter::once(all)
        .chain(
            categories
                .entries()
                .iter()
                .filter(|entry| entry.id != Category::Misc)
                .map(|entry| Pill {
                    id: entry.id.id().to_string(),
                    label: entry.label.clone(),
                    count: store.count_in(entry.id),
                    pressed: selected == CategoryFilter::Only(entry.id),
                }),
        )
        .filter(|pill| pill.count > 0)
        .collect()
}

/// The text a copy action should place on the clipboard.
pub fn copy_source(
    store: &DocumentStore,
    config: &SiteConfig,
    state: &NavState,
    target: CopyTarget,
) -> String {
    match target {
        CopyTarget::Page => state
            .active_id
            .as_ref()
            .and_then(|id| store.get(id.as_str()))
            .map(|doc: &DocumentRecord| doc.raw_text.clone())
            .unwrap_or_else(|| config.home_markdown.clone()),
        CopyTarget::CodeBlock(text) => text,
        CopyTarget::Location(href) => href,
    }
}
