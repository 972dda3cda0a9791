use serde::{Deserialize, Serialize};

/// Unique document identifier
pub type DocumentId = u64;

/// A stored news item
///
/// Ids are assigned by the `DocumentStore` on insert and stay stable for the
/// lifetime of the process. The boundary layer serializes documents as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub body: String,
}
