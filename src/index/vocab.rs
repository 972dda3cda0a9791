//! Vocabulary index for prefix expansion
//!
//! Every distinct term from the title and body indexes is joined into one
//! byte buffer, each term preceded by a sentinel byte that never occurs in
//! analyzed text. Expanding a query term P means finding every occurrence of
//! "sentinel, then P" in the buffer; the run of non-sentinel bytes after the
//! delimiter at each hit is a vocabulary term carrying P as a prefix.
//!
//! Such an anchored match can only start at a delimiter, so the index keeps
//! exactly the delimiter-anchored suffixes of the buffer, sorted
//! lexicographically. Expansion is a binary search for the first suffix >=
//! the key followed by a forward walk while the key remains a prefix.

use std::collections::BTreeSet;

use crate::error::{Result, TidingsError};
use crate::index::inverted::FieldIndex;

/// Delimiter between terms in the vocabulary buffer. Terms contain only
/// letters and digits, so the null byte never collides.
const SENTINEL: u8 = 0;

/// Sorted-suffix structure over the delimited vocabulary buffer
///
/// Immutable once built; a corpus change requires a full rebuild.
#[derive(Clone, Debug, Default)]
pub struct VocabularyIndex {
    /// `SENTINEL + term` repeated for every vocabulary term.
    buffer: Vec<u8>,
    /// Start offsets of the delimiter-anchored suffixes, sorted by suffix.
    suffixes: Vec<u32>,
}

impl VocabularyIndex {
    /// Build from the distinct union of terms in both field indexes
    ///
    /// Terms shared by title and body are indexed once.
    pub fn build(title_index: &FieldIndex, body_index: &FieldIndex) -> Self {
        let vocabulary: BTreeSet<&str> =
            title_index.terms().chain(body_index.terms()).collect();

        let mut buffer = Vec::new();
        let mut anchors = Vec::with_capacity(vocabulary.len());
        for term in &vocabulary {
            anchors.push(buffer.len() as u32);
            buffer.push(SENTINEL);
            buffer.extend_from_slice(term.as_bytes());
        }

        let mut suffixes = anchors;
        suffixes.sort_unstable_by(|&a, &b| buffer[a as usize..].cmp(&buffer[b as usize..]));

        Self { buffer, suffixes }
    }

    /// Expand a query term to every vocabulary term having it as a prefix
    ///
    /// Matches come back in buffer-scan order. An empty term expands to
    /// nothing rather than the whole vocabulary. A term containing the
    /// sentinel byte cannot form a valid search key; the analyzer never
    /// produces one, but that invariant is checked here rather than assumed.
    pub fn expand(&self, term: &str) -> Result<Vec<&str>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }
        if term.bytes().any(|b| b == SENTINEL) {
            return Err(TidingsError::InvalidPattern(term.to_string()));
        }

        let mut key = Vec::with_capacity(term.len() + 1);
        key.push(SENTINEL);
        key.extend_from_slice(term.as_bytes());

        // First suffix >= key; every match follows contiguously from here.
        let start = self
            .suffixes
            .partition_point(|&pos| self.suffix(pos) < key.as_slice());

        let mut hits: Vec<u32> = self.suffixes[start..]
            .iter()
            .copied()
            .take_while(|&pos| self.suffix(pos).starts_with(&key))
            .collect();
        hits.sort_unstable();

        Ok(hits.into_iter().map(|pos| self.term_at(pos)).collect())
    }

    /// Number of vocabulary terms
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    fn suffix(&self, pos: u32) -> &[u8] {
        &self.buffer[pos as usize..]
    }

    /// The term starting just past the delimiter at `pos`.
    fn term_at(&self, pos: u32) -> &str {
        let begin = pos as usize + 1;
        let end = self.buffer[begin..]
            .iter()
            .position(|&b| b == SENTINEL)
            .map_or(self.buffer.len(), |off| begin + off);
        // The buffer is a concatenation of valid UTF-8 terms on sentinel
        // boundaries, so this slice is always valid UTF-8.
        std::str::from_utf8(&self.buffer[begin..end]).unwrap_or("")
    }
}
