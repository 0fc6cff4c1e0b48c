//! Deterministic rendering, search and navigation core for single-page
//! document sites.
//!
//! `docsite-core` takes a corpus of short front-matter + markdown documents
//! and provides front matter parsing, block/inline rendering with a table of
//! contents, ranked substring search with category filtering, and a small
//! navigation reducer for hash-routed single-page front ends. Rendering and
//! ranking are pure: identical inputs always produce identical outputs.

pub mod artifact;
pub mod config;
pub mod document;
pub mod navigation;
pub mod render;
pub mod selection;
pub mod store;
pub mod types;

pub use config::SiteConfig;
