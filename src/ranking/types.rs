//! Ranking Data Types
//!
//! Defines the word/occurrences pair stored by the index and the Data
//! Transfer Objects (DTOs) returned by the ranking API.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A tracked word together with how many times it has been seen.
///
/// The derived `PartialOrd`/`Ord` would be wrong here: entries order by
/// occurrence count *descending* first, then by word ascending, so that the
/// rank sequence reads from most frequent to least frequent with a
/// deterministic alphabetical tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub count: u64,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    /// Compares this entry against a probe `(count, word)` pair under the
    /// rank order, without allocating a probe entry.
    ///
    /// Returns `Less` when this entry ranks before the probe. Used by the
    /// index's binary searches, where the probe is either a word's old count
    /// (to locate it) or its new count (to find the re-insertion point).
    pub fn cmp_rank(&self, count: u64, word: &str) -> Ordering {
        count
            .cmp(&self.count)
            .then_with(|| self.word.as_str().cmp(word))
    }
}

impl Ord for WordEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for WordEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Response returned by the ranking endpoint.
///
/// `words` follows the order the positions were requested in, not rank
/// order, and may contain duplicates if the requested ranges overlap.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankingResponse {
    pub range: String,
    pub count: usize,
    pub words: Vec<String>,
}
