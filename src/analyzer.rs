use std::collections::HashSet;

use crate::config::AnalyzerConfig;

/// Fixed stopword set. Small and closed; not configurable at runtime.
pub const STOPWORDS: [&str; 10] = [
    "a", "and", "be", "have", "i", "in", "of", "that", "the", "to",
];

/// Text analyzer: tokenize, lowercase, drop stopwords
///
/// The pipeline is deterministic and side-effect free. Output order matches
/// input order and duplicate terms are preserved; callers that need a set
/// must deduplicate themselves.
pub struct Analyzer {
    config: AnalyzerConfig,
    stopwords: HashSet<&'static str>,
}

impl Analyzer {
    /// Create a new analyzer from configuration
    pub fn new(config: &AnalyzerConfig) -> Self {
        let stopwords = if config.remove_stopwords {
            STOPWORDS.iter().copied().collect()
        } else {
            HashSet::new()
        };

        Self {
            config: config.clone(),
            stopwords,
        }
    }

    /// Analyze text into a vector of terms
    ///
    /// Tokens are maximal runs of Unicode letters and digits; every other
    /// character is a separator and never part of a token.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(|token| {
                if self.config.lowercase {
                    token.to_lowercase()
                } else {
                    token.to_string()
                }
            })
            .filter(|token| !self.stopwords.contains(token.as_str()))
            .collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}
