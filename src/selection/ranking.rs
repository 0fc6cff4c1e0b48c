use crate::document::DocumentRecord;
use crate::selection::query::SearchQuery;

/// Score for a match on the document id.
pub const ID_WEIGHT: u32 = 80;
/// Score for a match on the document name.
pub const NAME_WEIGHT: u32 = 60;
/// Score for a match on the description.
pub const DESCRIPTION_WEIGHT: u32 = 25;
/// Best possible position bonus, earned by a match at offset zero.
pub const POSITION_BONUS: u32 = 20;
/// Characters of haystack per point of position bonus lost.
pub const POSITION_STEP: usize = 200;

/// Which fields matched, and where the first match sits in the haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreDetails {
    pub id_match: bool,
    pub name_match: bool,
    pub description_match: bool,
    /// Character offset of the first match in `name \n description \n body`.
    pub offset: usize,
}

pub trait Scorer {
    /// `None` when the document does not match at all.
    fn score(&self, doc: &DocumentRecord, query: &SearchQuery) -> Option<ScoreDetails>;

    fn score_value(&self, details: &ScoreDetails) -> u32 {
        let mut score = 0;
        if details.id_match {
            score += ID_WEIGHT;
        }
        if details.name_match {
            score += NAME_WEIGHT;
        }
        if details.description_match {
            score += DESCRIPTION_WEIGHT;
        }
        let steps = u32::try_from(details.offset / POSITION_STEP).unwrap_or(u32::MAX);
        score + POSITION_BONUS.saturating_sub(steps)
    }
}

/// v0: case-insensitive substring scorer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringScorer;

impl Scorer for SubstringScorer {
    fn score(&self, doc: &DocumentRecord, query: &SearchQuery) -> Option<ScoreDetails> {
        let needle = query.needle.as_str();
        let name = doc.display_name().to_lowercase();
        let description = doc.description.to_lowercase();
        let body = doc.body().to_lowercase();

        let haystack = format!("{name}\n{description}\n{body}");
        let byte_offset = haystack.find(needle)?;

        Some(ScoreDetails {
            id_match: doc.id.as_str().to_lowercase().contains(needle),
            name_match: name.contains(needle),
            description_match: description.contains(needle),
            offset: haystack[..byte_offset].chars().count(),
        })
    }
}
