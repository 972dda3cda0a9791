use std::collections::BTreeMap;

use crate::models::{Document, DocumentId};

/// In-memory document store
///
/// Owns all documents and assigns ids on insert as one past the highest id
/// ever assigned. Append-only: there is no update or delete, so the running
/// maximum never goes backwards and ids are stable for the process lifetime.
#[derive(Clone, Debug, Default)]
pub struct DocumentStore {
    documents: BTreeMap<DocumentId, Document>,
    max_id: DocumentId,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document and return its assigned id
    pub fn insert(&mut self, title: impl Into<String>, body: impl Into<String>) -> DocumentId {
        let id = self.max_id + 1;
        self.max_id = id;
        self.documents.insert(
            id,
            Document {
                id,
                title: title.into(),
                body: body.into(),
            },
        );
        id
    }

    /// Look up a document by id
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    /// Iterate over all documents in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increment() {
        let mut store = DocumentStore::new();

        assert_eq!(store.insert("first", "body"), 1);
        assert_eq!(store.insert("second", "body"), 2);
        assert_eq!(store.insert("third", "body"), 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get() {
        let mut store = DocumentStore::new();
        let id = store.insert("title", "body");

        let doc = store.get(id).unwrap();
        assert_eq!(doc.id, id);
        assert_eq!(doc.title, "title");

        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_iteration_order_is_ascending_by_id() {
        let mut store = DocumentStore::new();
        store.insert("a", "");
        store.insert("b", "");
        store.insert("c", "");

        let ids: Vec<_> = store.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
