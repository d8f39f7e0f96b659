//! Named word sets
//!
//! A `WordSet` is an ordered collection of practice words with unique
//! spellings. Sets are built once at startup and never mutated afterwards;
//! the session only switches between them.

use crate::core::WordEntry;
use rustc_hash::FxHashMap;
use std::fmt;

/// Named, ordered collection of word entries with unique words
#[derive(Debug, Clone)]
pub struct WordSet {
    name: String,
    entries: Vec<WordEntry>,
    index: FxHashMap<String, usize>,
}

impl WordSet {
    /// Create a word set from already-validated entries
    ///
    /// Duplicate words are skipped, keeping the first occurrence so the
    /// practice order stays the insertion order.
    #[must_use]
    pub fn new(name: impl Into<String>, entries: Vec<WordEntry>) -> Self {
        let mut unique = Vec::with_capacity(entries.len());
        let mut index = FxHashMap::default();

        for entry in entries {
            if !index.contains_key(entry.word()) {
                index.insert(entry.word().to_string(), unique.len());
                unique.push(entry);
            }
        }

        Self {
            name: name.into(),
            entries: unique,
            index,
        }
    }

    /// Build a set from `(word, hint)` pairs, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use spellsprout::core::WordSet;
    ///
    /// let set = WordSet::from_pairs("demo", &[("drum", "hit it"), ("dr um", "bad")]);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[must_use]
    pub fn from_pairs(name: impl Into<String>, pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .filter_map(|&(word, hint)| WordEntry::new(word, hint).ok())
            .collect();
        Self::new(name, entries)
    }

    /// Set name shown in menus
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of words in the set
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a position, in insertion order
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&WordEntry> {
        self.entries.get(position)
    }

    /// Look up the hint for a word
    #[must_use]
    pub fn hint_for(&self, word: &str) -> Option<&str> {
        self.index
            .get(word)
            .map(|&i| self.entries[i].hint())
    }

    /// Whether the set contains a word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} words)", self.name, self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordSet {
        WordSet::from_pairs(
            "sample",
            &[
                ("pram", "A small carriage for a baby"),
                ("latch", "A door ___ keeps it closed"),
                ("shed", "A small building for storing tools"),
            ],
        )
    }

    #[test]
    fn set_preserves_insertion_order() {
        let set = sample();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0).unwrap().word(), "pram");
        assert_eq!(set.get(1).unwrap().word(), "latch");
        assert_eq!(set.get(2).unwrap().word(), "shed");
        assert!(set.get(3).is_none());
    }

    #[test]
    fn set_skips_duplicate_words() {
        let set = WordSet::from_pairs(
            "dupes",
            &[("drum", "first hint"), ("flu", "an illness"), ("drum", "second hint")],
        );

        assert_eq!(set.len(), 2);
        // First occurrence wins
        assert_eq!(set.hint_for("drum"), Some("first hint"));
    }

    #[test]
    fn set_skips_invalid_pairs() {
        let set = WordSet::from_pairs(
            "mixed",
            &[("clock", "on the wall"), ("not a word", "spaces"), ("", "empty")],
        );

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().word(), "clock");
    }

    #[test]
    fn set_lookup() {
        let set = sample();
        assert!(set.contains("latch"));
        assert!(!set.contains("zebra"));
        assert_eq!(set.hint_for("pram"), Some("A small carriage for a baby"));
        assert_eq!(set.hint_for("zebra"), None);
    }

    #[test]
    fn set_normalizes_case_before_dedup() {
        let set = WordSet::from_pairs("case", &[("Twin", "first"), ("TWIN", "second")]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.hint_for("twin"), Some("first"));
    }

    #[test]
    fn set_display() {
        let set = sample();
        assert_eq!(format!("{set}"), "sample (3 words)");
    }
}
