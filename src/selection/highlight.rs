use crate::render::escape_html;

/// Escape `text`, wrapping the first case-insensitive occurrence of `query`
/// in a `<mark>`.
pub fn highlight(text: &str, query: &str) -> String {
    let needle = query.trim();
    if needle.is_empty() {
        return escape_html(text);
    }
    match find_case_insensitive(text, needle) {
        Some((start, end)) => format!(
            "{}<mark>{}</mark>{}",
            escape_html(&text[..start]),
            escape_html(&text[start..end]),
            escape_html(&text[end..])
        ),
        None => escape_html(text),
    }
}

/// Byte range in `text` of the first char-wise case-insensitive match.
fn find_case_insensitive(text: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    let starts = text.char_indices().map(|(i, _)| i);
    for start in starts {
        let mut matched = 0;
        let mut end = start;
        for (i, c) in text[start..].char_indices() {
            if matched == needle.len() {
                break;
            }
            let lowered: Vec<char> = c.to_lowercase().collect();
            if needle.get(matched..matched + lowered.len()) != Some(lowered.as_slice()) {
                break;
            }
            matched += lowered.len();
            end = start + i + c.len_utf8();
        }
        if matched == needle.len() {
            return Some((start, end));
        }
    }
    None
}
