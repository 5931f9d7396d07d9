//! Dictionary acquisition pipeline
//!
//! Fetches every configured word list, merges tokens with a fixed source precedence,
//! drops denylisted and non-playable tokens, and produces a [`DictionarySnapshot`].

use super::denylist::Denylist;
use super::snapshot::{DictionarySnapshot, SourceSummary, WordEntry};
use crate::core::Word;
use crate::fetch::Fetcher;
use crate::wordlists::loader::tokenize;
use crate::wordlists::{DENYLIST_ADDITIONS, DENYLIST_EXEMPTIONS};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Fatal dictionary failures
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Every source failed or nothing survived filtering
    #[error("dictionary is empty: no source produced a playable 5-letter word")]
    Empty,
}

/// Tokens fetched from one source, in order of first appearance
struct SourceTokens {
    url: String,
    tokens: Result<Vec<String>, String>,
}

/// Builds dictionary snapshots from remote or local word lists
pub struct DictionaryBuilder {
    fetcher: Arc<dyn Fetcher>,
    sources: Vec<String>,
    denylist_source: Option<String>,
    additions: Vec<String>,
    exemptions: Vec<String>,
}

impl DictionaryBuilder {
    /// Create a builder over `sources`, listed in precedence order
    ///
    /// The hardcoded denylist additions and exemptions apply by default.
    pub fn new(fetcher: Arc<dyn Fetcher>, sources: impl IntoIterator<Item = String>) -> Self {
        Self {
            fetcher,
            sources: sources.into_iter().collect(),
            denylist_source: None,
            additions: DENYLIST_ADDITIONS.iter().map(ToString::to_string).collect(),
            exemptions: DENYLIST_EXEMPTIONS.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn with_denylist_source(mut self, url: impl Into<String>) -> Self {
        self.denylist_source = Some(url.into());
        self
    }

    /// Replace the hardcoded denylist additions
    #[must_use]
    pub fn with_additions(mut self, additions: Vec<String>) -> Self {
        self.additions = additions;
        self
    }

    /// Replace the hardcoded denylist exemptions
    #[must_use]
    pub fn with_exemptions(mut self, exemptions: Vec<String>) -> Self {
        self.exemptions = exemptions;
        self
    }

    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Fetch, merge, filter and snapshot
    ///
    /// Unreachable sources contribute nothing; only an empty result is an error.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no playable word survives.
    pub fn build(&self) -> Result<DictionarySnapshot, DictionaryError> {
        info!(sources = self.sources.len(), "Building dictionary");

        let fetched = self.fetch_sources();
        let (pool, summaries) = merge_first_wins(fetched);
        info!(unique = pool.len(), "Merged word sources");

        let denylist = self.load_denylist();

        let entries: Vec<WordEntry> = pool
            .into_iter()
            .filter_map(|(token, source)| {
                let word = Word::new(&token).ok()?;
                if denylist.contains(word.text()) {
                    debug!(word = word.text(), "Denylisted");
                    return None;
                }
                Some(WordEntry { word, source })
            })
            .collect();

        let snapshot = DictionarySnapshot::from_entries(entries).with_sources(summaries);

        if snapshot.is_empty() {
            error!("No playable words after filtering");
            return Err(DictionaryError::Empty);
        }

        info!(
            words = snapshot.len(),
            unaccented = snapshot.unaccented_len(),
            examples = ?snapshot.examples(10),
            "Dictionary ready"
        );
        Ok(snapshot)
    }

    /// Fetch all sources in parallel, each into its own token list
    ///
    /// Results come back in configured order regardless of completion order.
    fn fetch_sources(&self) -> Vec<SourceTokens> {
        self.sources
            .par_iter()
            .map(|url| {
                let tokens = match self.fetcher.fetch_text(url) {
                    Ok(text) => Ok(tokenize(&text).collect()),
                    Err(e) => {
                        warn!(%url, error = %e, "Word source unavailable");
                        Err(e.to_string())
                    }
                };
                SourceTokens {
                    url: url.clone(),
                    tokens,
                }
            })
            .collect()
    }

    fn load_denylist(&self) -> Denylist {
        let fetched = match &self.denylist_source {
            Some(url) => match self.fetcher.fetch_text(url) {
                Ok(text) => Denylist::from_text(&text),
                Err(e) => {
                    warn!(%url, error = %e, "Denylist unavailable, using hardcoded additions only");
                    Denylist::new()
                }
            },
            None => Denylist::new(),
        };

        let denylist = fetched
            .with_exemptions(&self.exemptions)
            .with_additions(&self.additions);
        info!(entries = denylist.len(), "Denylist loaded");
        denylist
    }
}

/// Merge per-source tokens sequentially; the first source to list a token owns it
fn merge_first_wins(fetched: Vec<SourceTokens>) -> (Vec<(String, String)>, Vec<SourceSummary>) {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut pool = Vec::new();
    let mut summaries = Vec::with_capacity(fetched.len());

    for SourceTokens { url, tokens } in fetched {
        match tokens {
            Ok(tokens) => {
                let mut unique_tokens = 0;
                for token in tokens {
                    if seen.insert(token.clone()) {
                        pool.push((token, url.clone()));
                        unique_tokens += 1;
                    }
                }
                info!(%url, unique_tokens, "Word source merged");
                summaries.push(SourceSummary {
                    url,
                    unique_tokens,
                    error: None,
                });
            }
            Err(error) => summaries.push(SourceSummary {
                url,
                unique_tokens: 0,
                error: Some(error),
            }),
        }
    }

    (pool, summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::StaticFetcher;

    const LEXICO: &str = "https://words.test/lexico";
    const VERBOS: &str = "https://words.test/verbos";
    const DOWN: &str = "https://words.test/down";
    const DENY: &str = "https://words.test/negativas";

    fn builder(fetcher: StaticFetcher, sources: &[&str]) -> DictionaryBuilder {
        DictionaryBuilder::new(
            Arc::new(fetcher),
            sources.iter().map(ToString::to_string),
        )
    }

    #[test]
    fn build_filters_to_five_letter_words() {
        let fetcher = StaticFetcher::new()
            .with_text(LEXICO, "casa termo xadrez fácil ações a-b-c 12345 Mundo");
        let snapshot = builder(fetcher, &[LEXICO]).build().unwrap();

        let words: Vec<&str> = snapshot.accented_words().collect();
        assert_eq!(words, vec!["ações", "fácil", "mundo", "termo"]);
    }

    #[test]
    fn build_first_source_wins_provenance() {
        let fetcher = StaticFetcher::new()
            .with_text(LEXICO, "termo canto")
            .with_text(VERBOS, "canto junto");
        let snapshot = builder(fetcher, &[LEXICO, VERBOS]).build().unwrap();

        assert_eq!(snapshot.source_of("canto"), Some(LEXICO));
        assert_eq!(snapshot.source_of("junto"), Some(VERBOS));

        let summaries = snapshot.sources();
        assert_eq!(summaries[0].unique_tokens, 2);
        assert_eq!(summaries[1].unique_tokens, 1);
    }

    #[test]
    fn build_precedence_follows_configuration_order() {
        let fetcher = StaticFetcher::new()
            .with_text(LEXICO, "termo")
            .with_text(VERBOS, "termo");
        let snapshot = builder(fetcher, &[VERBOS, LEXICO]).build().unwrap();
        assert_eq!(snapshot.source_of("termo"), Some(VERBOS));
    }

    #[test]
    fn build_survives_failed_sources() {
        let fetcher = StaticFetcher::new()
            .with_text(LEXICO, "termo")
            .with_page(VERBOS, 500, "oops");
        let snapshot = builder(fetcher, &[DOWN, VERBOS, LEXICO]).build().unwrap();

        assert_eq!(snapshot.len(), 1);
        let failed: Vec<&str> = snapshot
            .sources()
            .iter()
            .filter(|s| s.error.is_some())
            .map(|s| s.url.as_str())
            .collect();
        assert_eq!(failed, vec![DOWN, VERBOS]);
    }

    #[test]
    fn build_all_sources_failed_is_empty_error() {
        let result = builder(StaticFetcher::new(), &[DOWN, LEXICO]).build();
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn build_nothing_playable_is_empty_error() {
        let fetcher = StaticFetcher::new().with_text(LEXICO, "paz sol xadrez");
        let result = builder(fetcher, &[LEXICO]).build();
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn build_applies_denylist_accent_insensitively() {
        let fetcher = StaticFetcher::new()
            .with_text(LEXICO, "termo lanço porra canto")
            .with_text(DENY, "porra\ncanto");
        let snapshot = builder(fetcher, &[LEXICO])
            .with_denylist_source(DENY)
            .build()
            .unwrap();

        let words: Vec<&str> = snapshot.accented_words().collect();
        // lanço is a hardcoded addition (as "lanco" after folding)
        assert_eq!(words, vec!["termo"]);
    }

    #[test]
    fn build_exemptions_override_fetched_denylist() {
        let fetcher = StaticFetcher::new()
            .with_text(LEXICO, "peste termo")
            .with_text(DENY, "peste termo");
        let snapshot = builder(fetcher, &[LEXICO])
            .with_denylist_source(DENY)
            .build()
            .unwrap();

        assert!(snapshot.contains_accented("peste"));
        assert!(!snapshot.contains_accented("termo"));
    }

    #[test]
    fn build_denylist_failure_is_not_fatal() {
        let fetcher = StaticFetcher::new().with_text(LEXICO, "termo samão");
        let snapshot = builder(fetcher, &[LEXICO])
            .with_denylist_source(DENY)
            .build()
            .unwrap();

        // hardcoded additions still apply
        assert!(snapshot.contains_accented("termo"));
        assert!(!snapshot.contains_accented("samão"));
    }

    #[test]
    fn build_custom_additions() {
        let fetcher = StaticFetcher::new().with_text(LEXICO, "termo mundo");
        let snapshot = builder(fetcher, &[LEXICO])
            .with_additions(vec!["mundo".to_string()])
            .build()
            .unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn build_composes_decomposed_tokens() {
        let fetcher = StaticFetcher::new().with_text(LEXICO, "fa\u{0301}cil");
        let snapshot = builder(fetcher, &[LEXICO]).build().unwrap();
        assert!(snapshot.contains_accented("fácil"));
    }

    #[test]
    fn build_unaccented_invariant_holds() {
        let fetcher = StaticFetcher::new().with_text(LEXICO, "fácil facil termo lanço mundo");
        let snapshot = builder(fetcher, &[LEXICO])
            .with_additions(Vec::new())
            .build()
            .unwrap();

        assert!(snapshot.unaccented_len() <= snapshot.len());
        for word in snapshot.accented_words() {
            assert!(snapshot.contains_unaccented(word));
        }
    }
}
