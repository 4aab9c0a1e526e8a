//! Ranked Frequency Index
//!
//! The core data structure of the service. Every tracked word lives in a
//! sequence kept permanently sorted by (occurrences desc, word asc), so the
//! word at rank K is simply the element at position K-1. A helper map from
//! word to its current count makes existence checks O(1) and, because the
//! count is the word's key within the sort order, lets an update re-locate
//! its entry by binary search instead of a scan.
//!
//! ## Trade-off
//! Updates pay O(log n) for the two binary searches plus O(n) worst case for
//! the positional shift of the array-backed sequence; rank reads are O(1).
//! The structure is optimized for fast rank retrieval at the cost of slower
//! writes.

use super::types::WordEntry;
use parking_lot::RwLock;
use std::collections::HashMap;

/// The rank-ordered word frequency index.
///
/// All mutation is serialized by a single writer lock over both internal
/// structures: repositioning an entry shifts the shared sequence, so per-word
/// locking would let concurrent writers tear it. Readers take the shared side
/// of the lock and therefore never observe a sequence mid-shift.
pub struct RankedIndex {
    state: RwLock<IndexState>,
}

#[derive(Default)]
struct IndexState {
    /// The rank sequence, always fully sorted: position 0 = rank 1.
    entries: Vec<WordEntry>,
    /// Helper map `word -> current count`, kept in lockstep with `entries`.
    counts: HashMap<String, u64>,
}

impl IndexState {
    /// Position of the entry for `(count, word)` if present, otherwise the
    /// position such an entry would be inserted at.
    fn position_for(&self, word: &str, count: u64) -> usize {
        self.entries
            .binary_search_by(|entry| entry.cmp_rank(count, word))
            .unwrap_or_else(|insert_at| insert_at)
    }
}

impl RankedIndex {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(IndexState::default()),
        }
    }

    /// Records one occurrence of `word`.
    ///
    /// Expects an already-normalized (lowercase, non-empty) word. A first
    /// sighting enters the sequence with count 1 at its binary-searched
    /// position; an existing word is located via its *old* count, removed,
    /// bumped, and re-inserted at the position its new count dictates. The
    /// sequence is fully sorted again before the lock is released.
    pub fn increment(&self, word: &str) {
        let mut state = self.state.write();
        match state.counts.get(word).copied() {
            Some(count) => {
                let current = state.position_for(word, count);
                let mut entry = state.entries.remove(current);
                entry.count += 1;
                let target = state.position_for(word, entry.count);
                state.counts.insert(entry.word.clone(), entry.count);
                state.entries.insert(target, entry);
            }
            None => {
                let target = state.position_for(word, 1);
                state.entries.insert(target, WordEntry::new(word, 1));
                state.counts.insert(word.to_string(), 1);
            }
        }
    }

    /// Returns the word at the 1-indexed rank `position`, or `None` if the
    /// position exceeds the current number of tracked words.
    pub fn rank_at(&self, position: usize) -> Option<String> {
        if position == 0 {
            return None;
        }
        let state = self.state.read();
        state
            .entries
            .get(position - 1)
            .map(|entry| entry.word.clone())
    }

    /// Number of distinct words currently tracked.
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// Current count for `word`, if it has been seen.
    pub fn count_of(&self, word: &str) -> Option<u64> {
        self.state.read().counts.get(word).copied()
    }

    /// Clears both structures back to the empty state.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.entries.clear();
        state.counts.clear();
    }

    /// Read-only copy of the full rank sequence, for persistence.
    pub fn snapshot(&self) -> Vec<WordEntry> {
        self.state.read().entries.clone()
    }

    /// Replaces the index contents with a previously snapshotted sequence.
    ///
    /// The sequence is trusted to already satisfy the sort invariant (it was
    /// written in sorted order); only the helper map is rebuilt.
    pub fn restore(&self, entries: Vec<WordEntry>) {
        let mut state = self.state.write();
        state.counts = entries
            .iter()
            .map(|entry| (entry.word.clone(), entry.count))
            .collect();
        state.entries = entries;
    }
}

impl Default for RankedIndex {
    fn default() -> Self {
        Self::new()
    }
}
