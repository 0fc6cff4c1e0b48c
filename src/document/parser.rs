//! Front matter splitting.
//!
//! A document may open with a `---` delimited header of `key: value` lines:
//!
//! ```text
//! ---
//! name: pdf
//! description: "Read and fill PDF forms"
//! ---
//! # PDF
//! ```
//!
//! Parsing is total. Lines that are not `key: value` are dropped, and a
//! document without an opening delimiter is all body.

use super::metadata::FrontMatter;

/// A document split into its header map and body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDocument {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl ParsedDocument {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.front_matter.get(key)
    }
}

/// Split `text` into front matter and body.
pub fn parse_front_matter(text: &str) -> ParsedDocument {
    match split_header(text) {
        Some((header, body)) => ParsedDocument {
            front_matter: parse_header(header),
            body: body.to_string(),
        },
        None => ParsedDocument {
            front_matter: FrontMatter::new(),
            body: text.to_string(),
        },
    }
}

/// Returns the body with any front matter removed.
pub fn strip_front_matter(text: &str) -> &str {
    split_header(text).map_or(text, |(_, body)| body)
}

/// Locate `(header, body)` slices. `None` when there is no complete header.
fn split_header(text: &str) -> Option<(&str, &str)> {
    let (first, mut rest) = next_line(text)?;
    if !is_delimiter(first) {
        return None;
    }

    let header_start = text.len() - rest.len();
    let mut header_end = header_start;
    while let Some((line, after)) = next_line(rest) {
        if is_delimiter(line) {
            return Some((&text[header_start..header_end], after));
        }
        rest = after;
        header_end = text.len() - rest.len();
    }
    None
}

/// Split off one line. The returned line has its terminator removed; the
/// remainder starts after it. `None` once the input is exhausted.
fn next_line(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    match text.find('\n') {
        Some(pos) => {
            let line = &text[..pos];
            Some((line.strip_suffix('\r').unwrap_or(line), &text[pos + 1..]))
        }
        None => Some((text, "")),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.strip_prefix("---")
        .is_some_and(|rest| rest.chars().all(char::is_whitespace))
}

fn parse_header(header: &str) -> FrontMatter {
    let mut front_matter = FrontMatter::new();
    for line in header.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = parse_pair(trimmed) {
            front_matter.insert(key, value);
        }
    }
    front_matter
}

fn parse_pair(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim_end();
    let valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_key {
        return None;
    }
    Some((key, unquote(value.trim())))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
