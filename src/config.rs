use serde::{Deserialize, Serialize};

/// Analyzer configuration
///
/// The stopword list itself is fixed (see `analyzer::STOPWORDS`); these
/// switches only control which pipeline stages run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub lowercase: bool,
    pub remove_stopwords: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_stopwords: true,
        }
    }
}

/// Server configuration for the HTTP boundary
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub analyzer: AnalyzerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            ..Default::default()
        }
    }

    /// Override the analyzer configuration
    pub fn with_analyzer(mut self, analyzer: AnalyzerConfig) -> Self {
        self.analyzer = analyzer;
        self
    }
}
