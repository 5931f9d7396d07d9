//! Keyboard status aggregation
//!
//! Tracks the best status each letter has received across all guesses. Keys are
//! accent-folded, so `ç` lights up the `c` key.

use super::accents::strip_accent_char;
use super::evaluate::Feedback;
use super::status::{LetterResult, LetterStatus};
use rustc_hash::FxHashMap;

/// Letter → best-ever status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    statuses: FxHashMap<char, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a single result in; a key's status is never downgraded
    pub fn record_result(&mut self, result: &LetterResult) {
        let key = strip_accent_char(result.letter);
        let entry = self.statuses.entry(key).or_default();
        *entry = (*entry).max(result.status);
    }

    /// Fold every result of a guess in
    pub fn record(&mut self, feedback: &Feedback) {
        for result in feedback.results() {
            self.record_result(result);
        }
    }

    /// Status shown on the key for `letter`
    #[must_use]
    pub fn status_of(&self, letter: char) -> LetterStatus {
        self.statuses
            .get(&strip_accent_char(letter))
            .copied()
            .unwrap_or_default()
    }

    /// Number of keys that have been tried
    #[must_use]
    pub fn tested_count(&self) -> usize {
        self.statuses.len()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}

impl<'a> Extend<&'a Feedback> for KeyboardState {
    fn extend<T: IntoIterator<Item = &'a Feedback>>(&mut self, iter: T) {
        for feedback in iter {
            self.record(feedback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_str;

    #[test]
    fn keyboard_starts_untested() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.status_of('a'), LetterStatus::Untested);
        assert_eq!(keyboard.tested_count(), 0);
    }

    #[test]
    fn keyboard_never_downgrades() {
        let mut keyboard = KeyboardState::new();
        // t is correct here
        keyboard.record(&evaluate_str("tempo", "termo"));
        assert_eq!(keyboard.status_of('t'), LetterStatus::Correct);

        // t is only present here, the key stays correct
        keyboard.record(&evaluate_str("motel", "termo"));
        assert_eq!(keyboard.status_of('t'), LetterStatus::Correct);
        assert_eq!(keyboard.status_of('p'), LetterStatus::Absent);
    }

    #[test]
    fn keyboard_folds_accented_keys() {
        let mut keyboard = KeyboardState::new();
        keyboard.record(&evaluate_str("lanço", "canto"));
        assert_eq!(keyboard.status_of('c'), LetterStatus::Present);
        assert_eq!(keyboard.status_of('ç'), LetterStatus::Present);
    }

    #[test]
    fn keyboard_result_is_order_independent() {
        let solution = "carro";
        let guesses = ["orrar", "cacos", "rocha", "barro", "mundo"];
        let feedbacks: Vec<Feedback> = guesses
            .iter()
            .map(|guess| evaluate_str(guess, solution))
            .collect();

        let mut forward = KeyboardState::new();
        forward.extend(feedbacks.iter());

        let mut backward = KeyboardState::new();
        backward.extend(feedbacks.iter().rev());

        let mut shuffled = KeyboardState::new();
        for i in [3, 0, 4, 1, 2] {
            shuffled.record(&feedbacks[i]);
        }

        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
        assert_eq!(forward.status_of('r'), LetterStatus::Correct);
    }

    #[test]
    fn keyboard_clear_resets() {
        let mut keyboard = KeyboardState::new();
        keyboard.record(&evaluate_str("festa", "gente"));
        keyboard.clear();
        assert_eq!(keyboard.status_of('e'), LetterStatus::Untested);
    }
}
