//! Solution selection
//!
//! Picks the word to guess: random draws from the dictionary, skipping words already
//! played this session and words the validator rejects, then the hardcoded
//! fallback list once the attempt budget is spent.

mod machine;

pub use machine::{SelectionRun, SelectionState};

use crate::core::Word;
use crate::dictionary::DictionarySnapshot;
use crate::validation::WordValidator;
use crate::wordlists::FALLBACK_WORDS;
use crate::wordlists::loader::words_from_slice;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Default number of dictionary draws before falling back
pub const DEFAULT_MAX_ATTEMPTS: usize = 20;

/// Provenance reported for fallback words
pub const FALLBACK_SOURCE: &str = "fallback";

/// A chosen solution and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub word: Word,
    pub source: String,
}

#[derive(Serialize)]
struct SolutionView<'a> {
    word: &'a str,
    source: &'a str,
}

impl Serialize for Solution {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SolutionView {
            word: self.word.text(),
            source: &self.source,
        }
        .serialize(serializer)
    }
}

/// Selection could not produce a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Dictionary draws and the fallback list were all used up
    #[error("no word available: every candidate and fallback word is excluded ({excluded})")]
    NoWordAvailable { excluded: usize },
}

/// Chooses solutions with retry-then-fallback
pub struct SolutionSelector {
    validator: Arc<dyn WordValidator>,
    max_attempts: usize,
    fallback: Vec<Word>,
    seed: Option<u64>,
}

impl SolutionSelector {
    pub fn new(validator: Arc<dyn WordValidator>) -> Self {
        Self {
            validator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fallback: words_from_slice(FALLBACK_WORDS),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Replace the hardcoded fallback list
    #[must_use]
    pub fn with_fallback(mut self, fallback: Vec<Word>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Use a fixed seed instead of the clock
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn fallback(&self) -> &[Word] {
        &self.fallback
    }

    #[must_use]
    pub fn validator(&self) -> &dyn WordValidator {
        self.validator.as_ref()
    }

    /// Pick a solution not in `excluded` (accent-folded words)
    ///
    /// Total latency is bounded by the attempt budget times the validator's own
    /// retry budget.
    ///
    /// # Errors
    /// Returns `SelectionError::NoWordAvailable` when the draws and the fallback
    /// list are exhausted.
    pub fn pick_solution(
        &self,
        snapshot: &DictionarySnapshot,
        excluded: &FxHashSet<String>,
    ) -> Result<Solution, SelectionError> {
        let seed = self.seed.unwrap_or_else(clock_seed);
        self.start(snapshot, excluded, seed).finish()
    }

    /// Begin a step-by-step selection
    #[must_use]
    pub fn start<'a>(
        &'a self,
        snapshot: &'a DictionarySnapshot,
        excluded: &'a FxHashSet<String>,
        seed: u64,
    ) -> SelectionRun<'a> {
        SelectionRun::new(self, snapshot, excluded, seed)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
