pub mod analyzer;
pub mod api;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod models;
pub mod store;

pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, ServerConfig};
pub use engine::{IndexSnapshot, SearchEngine};
pub use error::{Result, TidingsError};
pub use models::{Document, DocumentId};
pub use store::DocumentStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
