// This is intentionally thin:
// no mutation
// no "update" methods
// runtime reads only

use std::collections::BTreeMap;

use thiserror::Error;

use crate::document::DocumentRecord;
use crate::types::{Category, DocumentId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate document ID: {0}")]
    DuplicateDocumentId(String),
    #[error("Document ID must not be empty")]
    EmptyDocumentId,
}

/// The loaded corpus, sorted by id.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<DocumentRecord>,
    index: BTreeMap<DocumentId, usize>,
}

impl DocumentStore {
    /// Take ownership of the loader's records.
    ///
    /// Records are sorted by id so enumeration order does not depend on the
    /// loader. Empty or duplicate ids are rejected.
    pub fn load(records: Vec<DocumentRecord>) -> Result<Self, StoreError> {
        let mut documents = records;
        documents.sort_by(|a, b| a.id.cmp(&b.id));

        if documents.iter().any(|d| d.id.is_empty()) {
            return Err(StoreError::EmptyDocumentId);
        }
        // Duplicates are adjacent after the sort.
        for pair in documents.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(StoreError::DuplicateDocumentId(pair[0].id.as_str().to_string()));
            }
        }

        let index = documents
            .iter()
            .enumerate()
            .map(|(pos, doc)| (doc.id.clone(), pos))
            .collect();

        tracing::info!(documents = documents.len(), "Loaded document store");

        Ok(Self { documents, index })
    }

    pub fn get(&self, id: &str) -> Option<&DocumentRecord> {
        self.index
            .get(&DocumentId::new(id))
            .map(|&pos| &self.documents[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All records, ascending by id.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.documents.iter()
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.documents.iter().filter(|d| d.category == category).count()
    }
}
