use std::collections::HashMap;

use crate::analyzer::Analyzer;
use crate::models::DocumentId;
use crate::store::DocumentStore;

/// Term → posting list for a single document field
///
/// A posting list holds one entry per occurrence, so the same document id
/// appears k times when a term occurs k times in that document's field.
/// Consumers only test membership; the merge step downstream de-duplicates.
#[derive(Clone, Debug, Default)]
pub struct FieldIndex {
    postings: HashMap<String, Vec<DocumentId>>,
}

impl FieldIndex {
    /// Append a document id to a term's posting list
    pub fn insert(&mut self, term: String, doc_id: DocumentId) {
        self.postings.entry(term).or_default().push(doc_id);
    }

    /// Get the posting list for a term, if any
    pub fn get(&self, term: &str) -> Option<&[DocumentId]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Iterate over all indexed terms
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// Build title and body field indexes in one pass over the store
///
/// This is a full, atomic rebuild: adding a document means re-running the
/// builder over the entire store.
pub fn build_field_indexes(store: &DocumentStore, analyzer: &Analyzer) -> (FieldIndex, FieldIndex) {
    let mut title_index = FieldIndex::default();
    let mut body_index = FieldIndex::default();

    for doc in store.iter() {
        for term in analyzer.analyze(&doc.title) {
            title_index.insert(term, doc.id);
        }
        for term in analyzer.analyze(&doc.body) {
            body_index.insert(term, doc.id);
        }
    }

    (title_index, body_index)
}
