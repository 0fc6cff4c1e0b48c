pub mod highlight;
pub mod query;
pub mod ranking;

use std::cmp::Ordering;

use crate::document::DocumentRecord;
pub use highlight::highlight;
pub use query::SearchQuery;
pub use ranking::{ScoreDetails, Scorer, SubstringScorer};

/// A document that survived filtering, with its score.
///
/// Holds a reference to the stored record to avoid cloning content.
#[derive(Debug, Clone)]
pub struct RankedDocument<'a> {
    pub document: &'a DocumentRecord,
    /// Zero when the query is empty and no scoring took place.
    pub score: u32,
    pub details: Option<ScoreDetails>,
}

/// Orders the corpus for the list panel.
///
/// Pure: no state is kept between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchRanker<S = SubstringScorer> {
    scorer: S,
}

impl<S: Scorer> SearchRanker<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn rank<'a, I>(&self, documents: I, query: &SearchQuery) -> Vec<RankedDocument<'a>>
    where
        I: IntoIterator<Item = &'a DocumentRecord>,
    {
        // 1. Category filter
        let candidates = documents
            .into_iter()
            .filter(|doc| query.category.matches(doc.category));

        // 2. Empty query: everything, by id
        if query.is_empty() {
            let mut all: Vec<RankedDocument<'a>> = candidates
                .map(|document| RankedDocument {
                    document,
                    score: 0,
                    details: None,
                })
                .collect();
            all.sort_by(|a, b| a.document.id.cmp(&b.document.id));
            return all;
        }

        // 3. Scoring phase; non-matches are dropped
        let mut ranked: Vec<RankedDocument<'a>> = candidates
            .filter_map(|document| {
                let details = self.scorer.score(document, query)?;
                Some(RankedDocument {
                    document,
                    score: self.scorer.score_value(&details),
                    details: Some(details),
                })
            })
            .collect();

        // 4. Ordering phase: (score desc, id asc)
        ranked.sort_by(|a, b| match b.score.cmp(&a.score) {
            Ordering::Equal => a.document.id.cmp(&b.document.id),
            other => other,
        });

        debug_assert!(ranked.windows(2).all(|w| {
            let (a, b) = (&w[0], &w[1]);
            a.score > b.score || (a.score == b.score && a.document.id <= b.document.id)
        }));

        ranked
    }
}

/// Rank with the default scorer.
pub fn search<'a, I>(documents: I, query: &SearchQuery) -> Vec<RankedDocument<'a>>
where
    I: IntoIterator<Item = &'a DocumentRecord>,
{
    SearchRanker::new(SubstringScorer).rank(documents, query)
}
