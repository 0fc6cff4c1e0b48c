//! Fragment routing: a document is addressed as `#/<urlencoded-id>`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone, removed from the escape set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The document id a fragment points at, or `None` for the home view.
///
/// The query part is cut at a literal `?` before decoding, so an encoded
/// `%3F` stays part of the id. Malformed percent-encoding is read as literal
/// text rather than rejected.
pub fn parse_fragment(fragment: &str) -> Option<String> {
    let rest = fragment.strip_prefix("#/")?;
    let encoded = rest.split('?').next().unwrap_or("");
    let decoded = percent_decode_str(encoded)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| encoded.to_string());

    let id = decoded.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Fragment for a document id; the home fragment for an empty id.
pub fn fragment_for(id: &str) -> String {
    let id = id.trim();
    if id.is_empty() {
        "#/".to_string()
    } else {
        format!("#/{}", utf8_percent_encode(id, COMPONENT))
    }
}
