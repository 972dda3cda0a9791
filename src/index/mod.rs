//! Index structures built once from the document store
//!
//! - `inverted`: per-field term → posting-list mappings
//! - `vocab`: sentinel-delimited vocabulary buffer with sorted suffixes,
//!   used to expand query terms by prefix

pub mod inverted;
pub mod vocab;

pub use inverted::{build_field_indexes, FieldIndex};
pub use vocab::VocabularyIndex;
