use docsite_core::document::{DocumentId, DocumentRecord};
use docsite_core::selection::{
    highlight, search, ScoreDetails, Scorer, SearchQuery, SearchRanker, SubstringScorer,
};
use docsite_core::store::DocumentStore;
use docsite_core::types::{Category, CategoryFilter};

fn record(id: &str, category: Category, name: &str, description: &str, raw_text: &str) -> DocumentRecord {
    DocumentRecord {
        id: DocumentId::new(id),
        category,
        name: name.to_string(),
        description: description.to_string(),
        license: String::new(),
        raw_text: raw_text.to_string(),
    }
}

fn ids(query: &SearchQuery, store: &DocumentStore) -> Vec<String> {
    search(store.iter(), query)
        .into_iter()
        .map(|r| r.document.id.to_string())
        .collect()
}

fn five_documents() -> DocumentStore {
    DocumentStore::load(vec![
        record("echo", Category::Dev, "Echo", "", "charlotte appears first here\n"),
        record("alpha", Category::Data, "Alpha", "", "charlotte\n"),
        record("charlie", Category::Dev, "Charlie", "", "nothing special\n"),
        record("delta", Category::Misc, "Delta", "", "charlotte charlotte\n"),
        record("bravo", Category::Data, "Bravo", "", "charlotte\n"),
    ])
    .unwrap()
}

#[test]
fn id_match_ranks_first() {
    let store = five_documents();
    let query = SearchQuery::new("charl", CategoryFilter::All);

    let ranked = search(store.iter(), &query);
    assert_eq!(ranked[0].document.id.as_str(), "charlie");
    // id + name + offset-zero bonus
    assert_eq!(ranked[0].score, 80 + 60 + 20);
    assert_eq!(ranked.len(), 5);
}

#[test]
fn empty_query_returns_everything_sorted_by_id() {
    let store = five_documents();
    for raw in ["", "   "] {
        let query = SearchQuery::new(raw, CategoryFilter::All);
        assert_eq!(ids(&query, &store), vec!["alpha", "bravo", "charlie", "delta", "echo"]);
    }
}

#[test]
fn equal_scores_tie_break_by_id() {
    let store = five_documents();
    let query = SearchQuery::new("CHARLOTTE", CategoryFilter::All);

    // All four body matches sit at the same small offset bucket.
    assert_eq!(ids(&query, &store), vec!["alpha", "bravo", "delta", "echo"]);
}

#[test]
fn non_matching_documents_are_dropped() {
    let store = five_documents();
    let query = SearchQuery::new("zebra", CategoryFilter::All);
    assert!(search(store.iter(), &query).is_empty());
}

#[test]
fn id_alone_does_not_make_a_match() {
    // The id is not part of the haystack; it only boosts documents that match.
    let store = DocumentStore::load(vec![record("needle", Category::Misc, "Other", "", "body\n")]).unwrap();
    let query = SearchQuery::new("needle", CategoryFilter::All);
    assert!(search(store.iter(), &query).is_empty());
}

#[test]
fn category_filter_applies_before_ranking() {
    let store = five_documents();

    let data = SearchQuery::new("", CategoryFilter::Only(Category::Data));
    assert_eq!(ids(&data, &store), vec!["alpha", "bravo"]);

    let dev = SearchQuery::new("charl", CategoryFilter::Only(Category::Dev));
    assert_eq!(ids(&dev, &store), vec!["charlie", "echo"]);
}

#[test]
fn position_bonus_decays_with_offset() {
    let body = format!("{}needle\n", "a".repeat(1000));
    let store = DocumentStore::load(vec![record("doc", Category::Misc, "x", "", &body)]).unwrap();
    let query = SearchQuery::new("needle", CategoryFilter::All);

    let ranked = search(store.iter(), &query);
    let details = ranked[0].details.as_ref().unwrap();
    // "x\n\n" precedes the body
    assert_eq!(details.offset, 1003);
    assert_eq!(ranked[0].score, 20 - 5);
}

#[test]
fn position_bonus_never_goes_negative() {
    let details = ScoreDetails {
        id_match: false,
        name_match: false,
        description_match: true,
        offset: 1_000_000,
    };
    assert_eq!(SubstringScorer.score_value(&details), 25);
}

#[test]
fn front_matter_is_not_searched() {
    let store = DocumentStore::load(vec![record(
        "doc",
        Category::Misc,
        "Doc",
        "",
        "---\nsecret: hidden\n---\nvisible body\n",
    )])
    .unwrap();

    assert!(search(store.iter(), &SearchQuery::new("hidden", CategoryFilter::All)).is_empty());
    assert_eq!(search(store.iter(), &SearchQuery::new("visible", CategoryFilter::All)).len(), 1);
}

#[test]
fn description_and_name_weights() {
    let store = DocumentStore::load(vec![
        record("a", Category::Misc, "Parser", "", "x\n"),
        record("b", Category::Misc, "B", "a parser", "x\n"),
        record("c", Category::Misc, "C", "", "parser\n"),
    ])
    .unwrap();
    let query = SearchQuery::new("parser", CategoryFilter::All);

    let ranked = search(store.iter(), &query);
    let scores: Vec<(&str, u32)> = ranked.iter().map(|r| (r.document.id.as_str(), r.score)).collect();
    assert_eq!(scores, vec![("a", 80), ("b", 45), ("c", 20)]);
}

#[test]
fn custom_scorer_plugs_into_ranker() {
    struct NameOnly;
    impl Scorer for NameOnly {
        fn score(&self, doc: &DocumentRecord, query: &SearchQuery) -> Option<ScoreDetails> {
            doc.name.to_lowercase().contains(&query.needle).then_some(ScoreDetails {
                id_match: false,
                name_match: true,
                description_match: false,
                offset: 0,
            })
        }
    }

    let store = five_documents();
    let ranked = SearchRanker::new(NameOnly).rank(store.iter(), &SearchQuery::new("a", CategoryFilter::All));
    let ids: Vec<&str> = ranked.iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn highlight_marks_first_match_and_escapes() {
    assert_eq!(highlight("PDF <tools>", "pdf"), "<mark>PDF</mark> &lt;tools&gt;");
    assert_eq!(highlight("a pdf, another pdf", " PDF "), "a <mark>pdf</mark>, another pdf");
    assert_eq!(highlight("<none>", "zzz"), "&lt;none&gt;");
    assert_eq!(highlight("<none>", ""), "&lt;none&gt;");
}
