use docsite_core::document::{parse_front_matter, strip_front_matter, DocumentId, DocumentRecord};

#[test]
fn header_pairs_are_parsed_and_body_follows_closing_delimiter() {
    let text = "---\n\
name: pdf\n\
description: \"Fill forms\"\n\
license: 'MIT'\n\
# a comment\n\
\n\
not a pair\n\
bad key!: dropped\n\
url: https://example.com/a:b\n\
name : override\n\
---\n\
# Body\n";

    let parsed = parse_front_matter(text);

    assert_eq!(parsed.get("name"), Some("override")); // later duplicates win
    assert_eq!(parsed.get("description"), Some("Fill forms"));
    assert_eq!(parsed.get("license"), Some("MIT"));
    assert_eq!(parsed.get("url"), Some("https://example.com/a:b"));
    assert_eq!(parsed.get("bad key!"), None);
    assert_eq!(parsed.front_matter.len(), 4);
    assert_eq!(parsed.body, "# Body\n");
}

#[test]
fn missing_opening_delimiter_leaves_text_untouched() {
    let text = "# Title\n---\nname: x\n---\n";
    let parsed = parse_front_matter(text);

    assert!(parsed.front_matter.is_empty());
    assert_eq!(parsed.body, text);
}

#[test]
fn unterminated_header_is_treated_as_body() {
    let text = "---\nname: x\nno closing delimiter";
    let parsed = parse_front_matter(text);

    assert!(parsed.front_matter.is_empty());
    assert_eq!(parsed.body, text);
    assert_eq!(strip_front_matter(text), text);
}

#[test]
fn crlf_documents_are_split_the_same_way() {
    let parsed = parse_front_matter("---\r\nname: x\r\n---\r\nbody\r\n");

    assert_eq!(parsed.get("name"), Some("x"));
    assert_eq!(parsed.body, "body\r\n");
}

#[test]
fn empty_header_yields_empty_map() {
    let parsed = parse_front_matter("---\n---\nbody");
    assert!(parsed.front_matter.is_empty());
    assert_eq!(parsed.body, "body");
}

#[test]
fn mismatched_quotes_are_kept() {
    let parsed = parse_front_matter("---\na: \"half'\nb: \"\n---\n");
    assert_eq!(parsed.get("a"), Some("\"half'"));
    assert_eq!(parsed.get("b"), Some("\""));
}

#[test]
fn parsing_is_total_over_odd_input() {
    for text in ["", "---", "---\n", "\n\n", "---\n:\n---", "---   \n : \n---  \nx"] {
        let _ = parse_front_matter(text);
    }
    assert_eq!(parse_front_matter("---   \nk: v\n---  \nx").get("k"), Some("v"));
}

#[test]
fn ingest_derives_fields_from_front_matter() {
    let record = DocumentRecord::ingest(
        DocumentId::new("pdf"),
        "data",
        "---\nname: PDF Tools\ndescription: Read PDFs\nlicense: MIT\n---\nbody\n\n\n",
    );

    assert_eq!(record.name, "PDF Tools");
    assert_eq!(record.description, "Read PDFs");
    assert_eq!(record.license, "MIT");
    assert_eq!(record.raw_text, "---\nname: PDF Tools\ndescription: Read PDFs\nlicense: MIT\n---\nbody\n");
    assert_eq!(record.body(), "body\n");
    assert_eq!(record.parsed().get("license"), Some("MIT"));
}

#[test]
fn ingest_falls_back_to_id_for_name() {
    let record = DocumentRecord::ingest(DocumentId::new("xlsx"), "data", "no header");

    assert_eq!(record.name, "xlsx");
    assert_eq!(record.description, "");
    assert_eq!(record.raw_text, "no header\n");
}
