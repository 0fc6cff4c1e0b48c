//! Inline formatting inside a single block.
//!
//! The text is escaped first and the markers are rewritten on the escaped
//! text, so nothing inside an emphasis, code span or link label can produce
//! markup of its own. Each pass runs once, left to right; markers that do not
//! pair up stay literal. Links whose target names a scheme other than
//! `http`, `https` or `mailto` keep their label and lose the anchor.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::escape_html;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(((?:[^()]|\([^()]*\))+)\)").unwrap()
});

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render `text` as HTML-safe inline markup.
pub fn format_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let italic = ITALIC.replace_all(&bold, "<em>$1</em>");
    let code = CODE.replace_all(&italic, "<code>$1</code>");
    LINK.replace_all(&code, |caps: &Captures| {
        let (label, href) = (&caps[1], &caps[2]);
        if is_safe_href(href) {
            format!(r#"<a href="{href}" target="_blank" rel="noreferrer">{label}</a>"#)
        } else {
            label.to_string()
        }
    })
    .into_owned()
}

/// Relative targets, fragments and the allowed schemes.
fn is_safe_href(href: &str) -> bool {
    let href = href.trim();
    match href.find([':', '/', '?', '#']) {
        Some(i) if href[i..].starts_with(':') => ALLOWED_SCHEMES
            .iter()
            .any(|s| href[..i].eq_ignore_ascii_case(s)),
        _ => true,
    }
}
