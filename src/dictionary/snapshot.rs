//! Immutable point-in-time dictionary

use crate::core::{Word, strip_accents};
use rustc_hash::FxHashMap;
use std::time::SystemTime;

/// A playable word and the source that contributed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: Word,
    pub source: String,
}

/// Outcome of fetching one configured source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub url: String,
    /// Tokens this source was first to contribute
    pub unique_tokens: usize,
    pub error: Option<String>,
}

/// Accented words, their folded image, and provenance
///
/// Entries are unique by accented text and sorted, so indexing is stable.
/// Every folded key refers to an entry, and every entry's folded form is a key.
#[derive(Debug, Clone)]
pub struct DictionarySnapshot {
    entries: Vec<WordEntry>,
    unaccented: FxHashMap<String, usize>,
    sources: Vec<SourceSummary>,
    built_at: SystemTime,
}

impl DictionarySnapshot {
    /// Build from words in precedence order; the first source for a word is kept
    pub fn from_entries(entries: impl IntoIterator<Item = WordEntry>) -> Self {
        let mut by_text: FxHashMap<String, WordEntry> = FxHashMap::default();
        for entry in entries {
            by_text.entry(entry.word.text().to_string()).or_insert(entry);
        }

        let mut entries: Vec<WordEntry> = by_text.into_values().collect();
        entries.sort_by(|a, b| a.word.text().cmp(b.word.text()));

        let mut unaccented = FxHashMap::default();
        for (index, entry) in entries.iter().enumerate() {
            unaccented.entry(entry.word.folded_text()).or_insert(index);
        }

        Self {
            entries,
            unaccented,
            sources: Vec::new(),
            built_at: SystemTime::now(),
        }
    }

    /// A snapshot with no words
    #[must_use]
    pub fn empty() -> Self {
        Self::from_entries(std::iter::empty())
    }

    #[cfg(test)]
    pub(crate) fn with_built_at(mut self, built_at: SystemTime) -> Self {
        self.built_at = built_at;
        self
    }

    #[must_use]
    pub(crate) fn with_sources(mut self, sources: Vec<SourceSummary>) -> Self {
        self.sources = sources;
        self
    }

    /// Number of accented words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct folded words; at most [`len`](Self::len)
    #[must_use]
    pub fn unaccented_len(&self) -> usize {
        self.unaccented.len()
    }

    /// Entry at `index` in sorted order
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    pub fn accented_words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.text())
    }

    pub fn unaccented_words(&self) -> impl Iterator<Item = &str> {
        self.unaccented.keys().map(String::as_str)
    }

    /// Exact (accented) membership
    #[must_use]
    pub fn contains_accented(&self, word: &str) -> bool {
        self.entries
            .binary_search_by(|e| e.word.text().cmp(word))
            .is_ok()
    }

    /// Accent-insensitive membership; `word` is folded first
    #[must_use]
    pub fn contains_unaccented(&self, word: &str) -> bool {
        self.unaccented.contains_key(&strip_accents(word))
    }

    /// Source that contributed `word` (accented form)
    #[must_use]
    pub fn source_of(&self, word: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|e| e.word.text().cmp(word))
            .ok()
            .map(|i| self.entries[i].source.as_str())
    }

    /// First accented word, in sorted order, that folds to `word`
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    /// use termo::dictionary::{DictionarySnapshot, WordEntry};
    ///
    /// let snapshot = DictionarySnapshot::from_entries([WordEntry {
    ///     word: Word::new("fácil").unwrap(),
    ///     source: "lexico".to_string(),
    /// }]);
    /// assert_eq!(snapshot.accented_form("facil"), Some("fácil"));
    /// ```
    #[must_use]
    pub fn accented_form(&self, word: &str) -> Option<&str> {
        self.unaccented
            .get(&strip_accents(word))
            .map(|&i| self.entries[i].word.text())
    }

    /// First `count` words in sorted order
    #[must_use]
    pub fn examples(&self, count: usize) -> Vec<&str> {
        self.accented_words().take(count).collect()
    }

    /// Per-source fetch results of the build that produced this snapshot
    #[must_use]
    pub fn sources(&self) -> &[SourceSummary] {
        &self.sources
    }

    #[must_use]
    pub const fn built_at(&self) -> SystemTime {
        self.built_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, source: &str) -> WordEntry {
        WordEntry {
            word: Word::new(word).unwrap(),
            source: source.to_string(),
        }
    }

    fn sample() -> DictionarySnapshot {
        DictionarySnapshot::from_entries([
            entry("termo", "a"),
            entry("fácil", "a"),
            entry("facil", "b"),
            entry("lanço", "b"),
            entry("termo", "b"),
        ])
    }

    #[test]
    fn snapshot_dedups_first_source_wins() {
        let snapshot = sample();
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot.source_of("termo"), Some("a"));
        assert_eq!(snapshot.source_of("facil"), Some("b"));
        assert_eq!(snapshot.source_of("mundo"), None);
    }

    #[test]
    fn snapshot_unaccented_is_folded_image() {
        let snapshot = sample();
        // fácil and facil collapse onto one folded word
        assert_eq!(snapshot.unaccented_len(), 3);
        assert!(snapshot.unaccented_len() <= snapshot.len());
        for word in snapshot.accented_words() {
            assert!(snapshot.contains_unaccented(&strip_accents(word)));
        }
        for folded in snapshot.unaccented_words() {
            assert!(
                snapshot
                    .accented_words()
                    .any(|w| strip_accents(w) == folded)
            );
        }
    }

    #[test]
    fn snapshot_membership() {
        let snapshot = sample();
        assert!(snapshot.contains_accented("lanço"));
        assert!(!snapshot.contains_accented("lanco"));
        assert!(snapshot.contains_unaccented("lanco"));
        assert!(snapshot.contains_unaccented("lanço"));
        assert!(!snapshot.contains_unaccented("mundo"));
    }

    #[test]
    fn snapshot_entries_sorted() {
        let snapshot = sample();
        let words: Vec<&str> = snapshot.accented_words().collect();
        let mut sorted = words.clone();
        sorted.sort_unstable();
        assert_eq!(words, sorted);
        assert_eq!(snapshot.examples(2), words[..2].to_vec());
    }

    #[test]
    fn snapshot_accented_form() {
        let snapshot = sample();
        assert_eq!(snapshot.accented_form("lanco"), Some("lanço"));
        // "facil" sorts before "fácil"
        assert_eq!(snapshot.accented_form("fácil"), Some("facil"));
        assert_eq!(snapshot.accented_form("mundo"), None);
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = DictionarySnapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.unaccented_len(), 0);
        assert!(snapshot.entry(0).is_none());
    }
}
