//! Dictionary inspection and solution picking

use crate::core::strip_accents;
use crate::dictionary::{DictionaryError, DictionarySnapshot, SnapshotCache, WordEntry};
use crate::selection::{FALLBACK_SOURCE, SelectionError, Solution, SolutionSelector};
use crate::wordlists::FALLBACK_WORDS;
use crate::wordlists::loader::words_from_slice;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use std::time::Duration;

/// Build the snapshot behind a spinner, reusing it unless it is past its max age
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if no source produced a playable word.
pub fn load_dictionary(cache: &SnapshotCache) -> Result<Arc<DictionarySnapshot>, DictionaryError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Baixando {} listas de palavras...",
        cache.builder().sources().len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = cache.get_fresh();
    match &result {
        Ok(snapshot) => {
            spinner.finish_with_message(format!("{} palavras carregadas", snapshot.len()));
        }
        Err(e) => spinner.abandon_with_message(e.to_string()),
    }
    result
}

/// Snapshot holding only the hardcoded fallback words
#[must_use]
pub fn fallback_snapshot() -> DictionarySnapshot {
    DictionarySnapshot::from_entries(words_from_slice(FALLBACK_WORDS).into_iter().map(|word| {
        WordEntry {
            word,
            source: FALLBACK_SOURCE.to_string(),
        }
    }))
}

/// Pick a solution, avoiding `exclude` (accents ignored)
///
/// # Errors
///
/// Returns `SelectionError::NoWordAvailable` if every candidate is excluded.
pub fn pick_word(
    selector: &SolutionSelector,
    snapshot: &DictionarySnapshot,
    exclude: &[String],
) -> Result<Solution, SelectionError> {
    let excluded: FxHashSet<String> = exclude
        .iter()
        .map(|w| strip_accents(&w.to_lowercase()))
        .collect();
    selector.pick_solution(snapshot, &excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryBuilder;
    use crate::fetch::testing::StaticFetcher;
    use crate::validation::AlwaysAccept;

    const LEXICO: &str = "https://words.test/lexico";

    fn cache(body: &str) -> SnapshotCache {
        let fetcher = StaticFetcher::new().with_text(LEXICO, body);
        SnapshotCache::new(DictionaryBuilder::new(Arc::new(fetcher), [LEXICO.to_string()]))
    }

    #[test]
    fn load_dictionary_builds_snapshot() {
        let snapshot = load_dictionary(&cache("termo mundo xadrez")).unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn load_dictionary_reports_empty() {
        assert!(matches!(
            load_dictionary(&cache("sol mar")),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn fallback_snapshot_holds_fallback_words() {
        let snapshot = fallback_snapshot();
        assert_eq!(snapshot.len(), FALLBACK_WORDS.len());
        assert_eq!(snapshot.source_of("termo"), Some(FALLBACK_SOURCE));
    }

    #[test]
    fn pick_word_honours_exclusions() {
        let snapshot = load_dictionary(&cache("termo fácil")).unwrap();
        let selector = SolutionSelector::new(Arc::new(AlwaysAccept)).with_seed(8);

        let solution = pick_word(&selector, &snapshot, &["FACIL".to_string()]).unwrap();
        assert_eq!(solution.word.text(), "termo");
    }
}
