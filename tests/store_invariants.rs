use docsite_core::document::{DocumentId, DocumentRecord};
use docsite_core::selection::{search, SearchQuery};
use docsite_core::store::{DocumentStore, StoreError};
use docsite_core::types::{Category, CategoryFilter, CategoryTable};

fn doc(id: &str, category: &str) -> DocumentRecord {
    DocumentRecord::ingest(DocumentId::new(id), category, &format!("# {id}\n"))
}

#[test]
fn store_enumerates_in_id_order() {
    let store = DocumentStore::load(vec![doc("c", "dev"), doc("a", "dev"), doc("b", "dev")]).unwrap();

    let ids: Vec<&str> = store.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn lookup_by_id() {
    let store = DocumentStore::load(vec![doc("pdf", "data"), doc("xlsx", "data")]).unwrap();

    assert_eq!(store.get("pdf").map(|d| d.id.as_str()), Some("pdf"));
    assert_eq!(store.get(" xlsx ").map(|d| d.id.as_str()), Some("xlsx"));
    assert!(store.get("missing").is_none());
    assert!(!store.contains(""));
}

#[test]
fn duplicate_ids_are_rejected() {
    let result = DocumentStore::load(vec![doc("a", "dev"), doc("b", "dev"), doc("a", "docs")]);
    assert!(matches!(result, Err(StoreError::DuplicateDocumentId(id)) if id == "a"));
}

#[test]
fn empty_ids_are_rejected() {
    let result = DocumentStore::load(vec![doc("  ", "dev")]);
    assert!(matches!(result, Err(StoreError::EmptyDocumentId)));
}

#[test]
fn invariant_unknown_category_behaves_as_misc() {
    let unknown = doc("a", "not-a-category");
    let explicit = doc("b", "misc");
    assert_eq!(unknown.category, Category::Misc);
    assert_eq!(unknown.category, explicit.category);

    let store = DocumentStore::load(vec![unknown, explicit]).unwrap();
    let misc = SearchQuery::new("", CategoryFilter::Only(Category::Misc));
    let found: Vec<&str> = search(store.iter(), &misc).into_iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(found, vec!["a", "b"]);
    assert_eq!(CategoryTable::standard().label(store.get("a").unwrap().category), "Misc");
}

#[test]
fn unknown_category_in_json_is_folded_into_misc() {
    let record: DocumentRecord =
        serde_json::from_str(r#"{"id":"a","category":"weird","name":"A","rawText":"x"}"#).unwrap();
    assert_eq!(record.category, Category::Misc);
    assert_eq!(record.description, "");

    let missing: DocumentRecord = serde_json::from_str(r#"{"id":"b"}"#).unwrap();
    assert_eq!(missing.category, Category::Misc);
}

#[test]
fn category_filter_parsing() {
    assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse("bogus"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse("deploy"), CategoryFilter::Only(Category::Deploy));
    assert_eq!(CategoryFilter::Only(Category::Docs).id(), "docs");
}

#[test]
fn category_counts() {
    let store = DocumentStore::load(vec![doc("a", "data"), doc("b", "data"), doc("c", "dev")]).unwrap();
    assert_eq!(store.count_in(Category::Data), 2);
    assert_eq!(store.count_in(Category::Research), 0);
}
