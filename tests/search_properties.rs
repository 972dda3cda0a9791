//! Property tests for the analysis and prefix-expansion pipeline.

use proptest::prelude::*;

use tidings::analyzer::STOPWORDS;
use tidings::index::{build_field_indexes, VocabularyIndex};
use tidings::{Analyzer, AnalyzerConfig, DocumentStore, SearchEngine};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,8}").unwrap()
}

/// Generate random free text, punctuation and casing included.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 ,.!'()-]{0,80}").unwrap()
}

/// Generate a small corpus of (title, body) pairs.
fn corpus_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    let field = prop::collection::vec(word_strategy(), 0..8).prop_map(|words| words.join(" "));
    prop::collection::vec((field.clone(), field), 1..5)
}

fn build_engine(corpus: &[(String, String)]) -> SearchEngine {
    let engine = SearchEngine::new(&AnalyzerConfig::default());
    let mut store = DocumentStore::new();
    for (title, body) in corpus {
        store.insert(title.clone(), body.clone());
    }
    engine.rebuild_all(store);
    engine
}

// ============================================================================
// ANALYZER PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// No analyzed term is ever a stopword.
    #[test]
    fn prop_analyzer_output_is_stopword_free(text in text_strategy()) {
        let analyzer = Analyzer::default();
        for term in analyzer.analyze(&text) {
            prop_assert!(!STOPWORDS.contains(&term.as_str()), "stopword {term:?} leaked");
        }
    }

    /// Analysis is case-invariant.
    #[test]
    fn prop_analyzer_is_case_invariant(text in text_strategy()) {
        let analyzer = Analyzer::default();
        prop_assert_eq!(
            analyzer.analyze(&text),
            analyzer.analyze(&text.to_uppercase())
        );
    }

    /// Analysis is deterministic.
    #[test]
    fn prop_analyzer_is_deterministic(text in text_strategy()) {
        let analyzer = Analyzer::default();
        prop_assert_eq!(analyzer.analyze(&text), analyzer.analyze(&text));
    }

    /// Every output term is a lowercase alphanumeric run.
    #[test]
    fn prop_terms_are_normalized(text in text_strategy()) {
        let analyzer = Analyzer::default();
        for term in analyzer.analyze(&text) {
            prop_assert!(!term.is_empty());
            prop_assert!(term.chars().all(|c| c.is_alphanumeric()));
            prop_assert_eq!(term.to_lowercase(), term);
        }
    }
}

// ============================================================================
// PREFIX EXPANSION PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every proper prefix of every vocabulary term expands to that term.
    #[test]
    fn prop_expansion_is_complete(corpus in corpus_strategy()) {
        let mut store = DocumentStore::new();
        for (title, body) in &corpus {
            store.insert(title.clone(), body.clone());
        }
        let (title_index, body_index) = build_field_indexes(&store, &Analyzer::default());
        let vocab = VocabularyIndex::build(&title_index, &body_index);

        for term in title_index.terms().chain(body_index.terms()) {
            for end in 1..=term.len() {
                let prefix = &term[..end];
                let matches = vocab.expand(prefix).unwrap();
                prop_assert!(
                    matches.contains(&term),
                    "expand({prefix:?}) missed vocabulary term {term:?}"
                );
            }
        }
    }

    /// Expansion never returns a term without the queried prefix.
    #[test]
    fn prop_expansion_is_exact(corpus in corpus_strategy(), probe in word_strategy()) {
        let mut store = DocumentStore::new();
        for (title, body) in &corpus {
            store.insert(title.clone(), body.clone());
        }
        let (title_index, body_index) = build_field_indexes(&store, &Analyzer::default());
        let vocab = VocabularyIndex::build(&title_index, &body_index);

        for matched in vocab.expand(&probe).unwrap() {
            prop_assert!(
                matched.starts_with(&probe),
                "expand({probe:?}) returned {matched:?}"
            );
        }
    }
}

// ============================================================================
// MERGE PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Search results never repeat a document id.
    #[test]
    fn prop_search_results_are_unique(corpus in corpus_strategy(), query in word_strategy()) {
        let engine = build_engine(&corpus);

        if let Ok(results) = engine.search(&query) {
            let mut ids: Vec<_> = results.iter().map(|d| d.id).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(before, ids.len(), "duplicate ids in results");
        }
    }

    /// Every returned document really contains a term expanded from the query.
    #[test]
    fn prop_search_results_match_the_query(corpus in corpus_strategy(), query in word_strategy()) {
        let engine = build_engine(&corpus);
        let analyzer = Analyzer::default();

        if let Ok(results) = engine.search(&query) {
            for doc in results {
                let mut terms = analyzer.analyze(&doc.title);
                terms.extend(analyzer.analyze(&doc.body));
                prop_assert!(
                    terms.iter().any(|t| t.starts_with(&query)),
                    "doc {} matched {query:?} but holds no such prefix",
                    doc.id
                );
            }
        }
    }
}
