//! Query engine over an immutable index snapshot
//!
//! All index state lives in an `IndexSnapshot` that is built in full and
//! then published through an atomic pointer. Queries load the current
//! snapshot and read it without locking; a rebuild swaps in a complete
//! replacement, so readers never observe a partially-built index.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::warn;

use crate::analyzer::Analyzer;
use crate::config::AnalyzerConfig;
use crate::error::{Result, TidingsError};
use crate::index::{build_field_indexes, FieldIndex, VocabularyIndex};
use crate::models::{Document, DocumentId};
use crate::store::DocumentStore;

/// Everything a query reads, built once and never mutated
pub struct IndexSnapshot {
    pub store: DocumentStore,
    pub title_index: FieldIndex,
    pub body_index: FieldIndex,
    pub vocabulary: VocabularyIndex,
}

impl IndexSnapshot {
    /// Index every document in the store
    pub fn build(store: DocumentStore, analyzer: &Analyzer) -> Self {
        let (title_index, body_index) = build_field_indexes(&store, analyzer);
        let vocabulary = VocabularyIndex::build(&title_index, &body_index);
        Self {
            store,
            title_index,
            body_index,
            vocabulary,
        }
    }
}

/// Search engine serving read-only queries against the current snapshot
pub struct SearchEngine {
    analyzer: Analyzer,
    snapshot: ArcSwap<IndexSnapshot>,
}

impl SearchEngine {
    /// Create an engine with an empty corpus
    pub fn new(config: &AnalyzerConfig) -> Self {
        let analyzer = Analyzer::new(config);
        let snapshot = IndexSnapshot::build(DocumentStore::new(), &analyzer);
        Self {
            analyzer,
            snapshot: ArcSwap::from_pointee(snapshot),
        }
    }

    /// Replace the entire corpus and publish a fresh snapshot atomically
    ///
    /// In-flight queries finish against the snapshot they already loaded.
    pub fn rebuild_all(&self, store: DocumentStore) {
        let next = IndexSnapshot::build(store, &self.analyzer);
        self.snapshot.store(Arc::new(next));
    }

    /// Get the current snapshot
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.snapshot.load_full()
    }

    /// Look up a document by id
    pub fn document(&self, id: DocumentId) -> Result<Document> {
        self.snapshot
            .load()
            .store
            .get(id)
            .cloned()
            .ok_or(TidingsError::DocumentNotFound(id))
    }

    /// Resolve a raw query to matching documents
    ///
    /// Each analyzed query term is expanded against the vocabulary; expanded
    /// terms are looked up in the title and body indexes and the resulting
    /// ids merged, title matches first in order of first appearance, then
    /// body-only matches. No document appears twice.
    ///
    /// A query that analyzes to zero terms yields `EmptyQuery` so the caller
    /// can tell "no query" apart from "no matches".
    pub fn search(&self, raw_query: &str) -> Result<Vec<Document>> {
        let query_terms = self.analyzer.analyze(raw_query);
        if query_terms.is_empty() {
            return Err(TidingsError::EmptyQuery);
        }

        let snapshot = self.snapshot.load();

        let mut matched_terms: Vec<&str> = Vec::new();
        for term in &query_terms {
            match snapshot.vocabulary.expand(term) {
                Ok(expansions) => matched_terms.extend(expansions),
                Err(err) => {
                    // One bad expansion spoils that term, not the query.
                    warn!(term = %term, error = %err, "prefix expansion failed");
                }
            }
        }

        let title_hits = collect_postings(&snapshot.title_index, &matched_terms);
        let body_hits = collect_postings(&snapshot.body_index, &matched_terms);

        let mut merged: Vec<DocumentId> = Vec::new();
        for id in title_hits.into_iter().chain(body_hits) {
            if !merged.contains(&id) {
                merged.push(id);
            }
        }

        let documents = merged
            .into_iter()
            .filter_map(|id| {
                let doc = snapshot.store.get(id).cloned();
                if doc.is_none() {
                    warn!(id, "posting refers to a document missing from the store");
                }
                doc
            })
            .collect();

        Ok(documents)
    }
}

/// Concatenate the posting lists of every matched term, in term order
fn collect_postings(index: &FieldIndex, terms: &[&str]) -> Vec<DocumentId> {
    let mut ids = Vec::new();
    for term in terms {
        if let Some(postings) = index.get(term) {
            ids.extend_from_slice(postings);
        }
    }
    ids
}
