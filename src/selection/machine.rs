//! Selection state machine
//!
//! ```text
//! Sampling ──draw──▶ Validating ──accepted──▶ Done
//!    ▲  │                 │
//!    │  └─budget spent─┐  └─rejected/lookup error─▶ Sampling
//!    │                 ▼
//!    └─excluded──   Exhausted ──▶ Fallback ──▶ Done | NoWordAvailable
//! ```

use super::{FALLBACK_SOURCE, SelectionError, Solution, SolutionSelector};
use crate::dictionary::{DictionarySnapshot, WordEntry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

/// Where a selection run currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// About to draw; `attempt` draws have been spent
    Sampling { attempt: usize },
    /// Drew `candidate`, waiting on the validator
    Validating { attempt: usize, candidate: WordEntry },
    /// Draw budget spent (or nothing to draw from)
    Exhausted,
    /// Scanning the hardcoded list
    Fallback,
    /// Finished with a solution
    Done(Solution),
    /// Finished without one; every fallback word was excluded
    NoWordAvailable { excluded: usize },
}

/// One in-progress selection
pub struct SelectionRun<'a> {
    selector: &'a SolutionSelector,
    snapshot: &'a DictionarySnapshot,
    excluded: &'a FxHashSet<String>,
    rng: StdRng,
    state: SelectionState,
}

impl<'a> SelectionRun<'a> {
    pub(super) fn new(
        selector: &'a SolutionSelector,
        snapshot: &'a DictionarySnapshot,
        excluded: &'a FxHashSet<String>,
        seed: u64,
    ) -> Self {
        Self {
            selector,
            snapshot,
            excluded,
            rng: StdRng::seed_from_u64(seed),
            state: SelectionState::Sampling { attempt: 0 },
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, SelectionState::Done(_))
    }

    /// Advance by one transition
    ///
    /// # Errors
    /// Returns `SelectionError::NoWordAvailable` once the run ends in the
    /// `NoWordAvailable` state, and on every step after that.
    pub fn step(&mut self) -> Result<(), SelectionError> {
        let state = std::mem::replace(&mut self.state, SelectionState::Exhausted);
        self.state = match state {
            SelectionState::Sampling { attempt } => self.sample(attempt),
            SelectionState::Validating { attempt, candidate } => self.validate(attempt, candidate),
            SelectionState::Exhausted => {
                warn!(
                    attempts = self.selector.max_attempts(),
                    "No usable dictionary word drawn, using fallback list"
                );
                SelectionState::Fallback
            }
            SelectionState::Fallback => self.fallback(),
            done @ (SelectionState::Done(_) | SelectionState::NoWordAvailable { .. }) => done,
        };

        match self.state {
            SelectionState::NoWordAvailable { excluded } => {
                Err(SelectionError::NoWordAvailable { excluded })
            }
            _ => Ok(()),
        }
    }

    /// Step until done
    ///
    /// # Errors
    /// Returns `SelectionError::NoWordAvailable` if the fallback list is exhausted too.
    pub fn finish(mut self) -> Result<Solution, SelectionError> {
        loop {
            if let SelectionState::Done(solution) = self.state {
                info!(word = solution.word.text(), source = %solution.source, "Solution selected");
                return Ok(solution);
            }
            self.step()?;
        }
    }

    fn sample(&mut self, attempt: usize) -> SelectionState {
        if attempt >= self.selector.max_attempts() || self.snapshot.is_empty() {
            return SelectionState::Exhausted;
        }

        let index = self.rng.random_range(0..self.snapshot.len());
        let Some(entry) = self.snapshot.entry(index) else {
            return SelectionState::Exhausted;
        };

        if self.excluded.contains(&entry.word.folded_text()) {
            debug!(word = entry.word.text(), attempt, "Already played, drawing again");
            return SelectionState::Sampling {
                attempt: attempt + 1,
            };
        }

        SelectionState::Validating {
            attempt,
            candidate: entry.clone(),
        }
    }

    fn validate(&self, attempt: usize, candidate: WordEntry) -> SelectionState {
        let validator = self.selector.validator();
        match validator.validate(&candidate.word) {
            Ok(true) => SelectionState::Done(Solution {
                word: candidate.word,
                source: candidate.source,
            }),
            Ok(false) => {
                debug!(
                    word = candidate.word.text(),
                    validator = validator.name(),
                    "Candidate rejected"
                );
                SelectionState::Sampling {
                    attempt: attempt + 1,
                }
            }
            Err(e) => {
                warn!(error = %e, "Candidate rejected, lookup unavailable");
                SelectionState::Sampling {
                    attempt: attempt + 1,
                }
            }
        }
    }

    fn fallback(&self) -> SelectionState {
        self.selector
            .fallback()
            .iter()
            .find(|word| !self.excluded.contains(&word.folded_text()))
            .map(|word| {
                SelectionState::Done(Solution {
                    word: word.clone(),
                    source: FALLBACK_SOURCE.to_string(),
                })
            })
            .unwrap_or(SelectionState::NoWordAvailable {
                excluded: self.excluded.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::snapshot;
    use super::*;
    use crate::core::Word;
    use crate::fetch::SourceFetchError;
    use crate::validation::{AlwaysAccept, ValidationLookupError, WordValidator};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Rejects everything, counting calls
    #[derive(Default)]
    struct RejectAll {
        calls: AtomicUsize,
    }

    impl WordValidator for RejectAll {
        fn validate(&self, _word: &Word) -> Result<bool, ValidationLookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        }

        fn name(&self) -> &'static str {
            "reject"
        }
    }

    /// Lookup service that is always down
    struct Unreachable;

    impl WordValidator for Unreachable {
        fn validate(&self, word: &Word) -> Result<bool, ValidationLookupError> {
            Err(ValidationLookupError {
                word: word.text().to_string(),
                attempts: 2,
                source: SourceFetchError::Transport {
                    url: "https://dicio.test".to_string(),
                    message: "timeout".to_string(),
                },
            })
        }

        fn name(&self) -> &'static str {
            "unreachable"
        }
    }

    #[test]
    fn run_passes_through_validating() {
        let selector = SolutionSelector::new(Arc::new(AlwaysAccept));
        let snapshot = snapshot(&["termo"]);
        let excluded = FxHashSet::default();
        let mut run = selector.start(&snapshot, &excluded, 0);

        assert_eq!(run.state(), &SelectionState::Sampling { attempt: 0 });
        run.step().unwrap();
        assert!(matches!(
            run.state(),
            SelectionState::Validating { attempt: 0, candidate } if candidate.word.text() == "termo"
        ));
        run.step().unwrap();
        assert!(run.is_done());
    }

    #[test]
    fn run_rejections_exhaust_budget_then_fall_back() {
        let validator = Arc::new(RejectAll::default());
        let selector = SolutionSelector::new(validator.clone()).with_max_attempts(3);
        let snapshot = snapshot(&["termo", "mundo"]);
        let excluded = FxHashSet::default();
        let mut run = selector.start(&snapshot, &excluded, 42);

        let mut visited = Vec::new();
        while !run.is_done() {
            visited.push(run.state().clone());
            run.step().unwrap();
        }

        assert_eq!(validator.calls.load(Ordering::SeqCst), 3);
        assert!(visited.contains(&SelectionState::Exhausted));
        assert!(visited.contains(&SelectionState::Fallback));
        assert_eq!(visited.last(), Some(&SelectionState::Fallback));

        let solution = run.finish().unwrap();
        assert_eq!(solution.source, FALLBACK_SOURCE);
    }

    #[test]
    fn run_lookup_errors_count_as_rejections() {
        let selector = SolutionSelector::new(Arc::new(Unreachable)).with_max_attempts(2);
        let snapshot = snapshot(&["termo"]);
        let excluded = FxHashSet::default();

        let solution = selector.start(&snapshot, &excluded, 1).finish().unwrap();
        assert_eq!(solution.source, FALLBACK_SOURCE);
        assert_eq!(solution.word.text(), "amigo");
    }

    #[test]
    fn run_excluded_draws_consume_budget_without_validation() {
        let validator = Arc::new(RejectAll::default());
        let selector = SolutionSelector::new(validator.clone()).with_max_attempts(5);
        let snapshot = snapshot(&["termo"]);
        let excluded: FxHashSet<String> = ["termo".to_string()].into_iter().collect();

        let solution = selector.start(&snapshot, &excluded, 9).finish().unwrap();
        assert_eq!(validator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(solution.source, FALLBACK_SOURCE);
    }

    #[test]
    fn run_empty_snapshot_goes_straight_to_exhausted() {
        let selector = SolutionSelector::new(Arc::new(AlwaysAccept));
        let snapshot = DictionarySnapshot::empty();
        let excluded = FxHashSet::default();
        let mut run = selector.start(&snapshot, &excluded, 0);

        run.step().unwrap();
        assert_eq!(run.state(), &SelectionState::Exhausted);
    }

    #[test]
    fn run_fallback_exhausted_is_error() {
        let selector = SolutionSelector::new(Arc::new(AlwaysAccept)).with_fallback(Vec::new());
        let snapshot = DictionarySnapshot::empty();
        let excluded = FxHashSet::default();

        let result = selector.start(&snapshot, &excluded, 0).finish();
        assert_eq!(result, Err(SelectionError::NoWordAvailable { excluded: 0 }));
    }

    #[test]
    fn run_no_word_available_is_terminal() {
        let selector = SolutionSelector::new(Arc::new(AlwaysAccept)).with_fallback(Vec::new());
        let snapshot = DictionarySnapshot::empty();
        let excluded = FxHashSet::default();
        let mut run = selector.start(&snapshot, &excluded, 0);

        run.step().unwrap();
        run.step().unwrap();
        assert_eq!(run.state(), &SelectionState::Fallback);

        let expected = Err(SelectionError::NoWordAvailable { excluded: 0 });
        assert_eq!(run.step(), expected);
        assert_eq!(run.state(), &SelectionState::NoWordAvailable { excluded: 0 });

        // Stepping again stays put instead of replaying the fallback
        assert_eq!(run.step(), expected);
        assert_eq!(run.state(), &SelectionState::NoWordAvailable { excluded: 0 });
        assert!(!run.is_done());
    }
}
