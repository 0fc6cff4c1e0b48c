//! Heading identifiers.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Fallback slug for headings with no usable characters.
pub const EMPTY_SLUG: &str = "section";

/// Default cap on slug length, in characters.
pub const DEFAULT_MAX_SLUG_LEN: usize = 64;

/// Characters that survive slugging: letters, digits and CJK unified
/// ideographs. Everything else collapses into a hyphen.
pub fn is_slug_char(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric() || ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Normalise `text` into a URL-safe slug of at most `max_len` characters.
pub fn slugify(text: &str, max_len: usize) -> String {
    let lowered = text.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        if is_slug_char(c) {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        return EMPTY_SLUG.chars().take(max_len).collect();
    }
    slug.chars().take(max_len).collect()
}

/// Hands out heading ids for one render pass.
///
/// Each id carries the heading's 1-based position among all headings of the
/// document, so ids are unique even when heading texts repeat.
#[derive(Debug, Clone)]
pub struct SlugAllocator {
    max_len: usize,
    allocated: usize,
}

impl SlugAllocator {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            allocated: 0,
        }
    }

    pub fn allocate(&mut self, text: &str) -> String {
        self.allocated += 1;
        format!("{}-{}", slugify(text, self.max_len), self.allocated)
    }

    pub fn allocated(&self) -> usize {
        self.allocated
    }
}

impl Default for SlugAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SLUG_LEN)
    }
}
