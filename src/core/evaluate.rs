//! Guess evaluation
//!
//! Scores a guess against the solution with Wordle's duplicate-aware rules,
//! comparing letters after accent folding.

use super::status::{LetterResult, LetterStatus};
use super::word::{WORD_LENGTH, Word};
use serde::Serialize;

/// Feedback for a whole guess, one result per position in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// Results in positional order
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Statuses in positional order
    #[must_use]
    pub fn statuses(&self) -> [LetterStatus; WORD_LENGTH] {
        self.0.map(|r| r.status)
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|r| r.status == LetterStatus::Correct)
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.status.emoji()).collect()
    }
}

impl IntoIterator for Feedback {
    type Item = LetterResult;
    type IntoIter = std::array::IntoIter<LetterResult, WORD_LENGTH>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Evaluate `guess` against `solution`
///
/// The caller is expected to have checked that the guess is in the dictionary.
/// Displayed letters are the guess's own, accents included.
///
/// # Algorithm
/// 1. First pass: mark exact matches (correct) and remove them from the solution's letter pool
/// 2. Second pass: mark remaining letters present while the pool still holds them, absent otherwise
///
/// # Examples
/// ```
/// use termo::core::{evaluate, LetterStatus, Word};
///
/// let guess = Word::new("tempo").unwrap();
/// let solution = Word::new("termo").unwrap();
/// let feedback = evaluate(&guess, &solution);
///
/// assert_eq!(feedback.to_emoji(), "🟩🟩🟨⬜🟩");
/// assert_eq!(feedback.results()[2].status, LetterStatus::Present);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, solution: &Word) -> Feedback {
    let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
    let mut available = solution.folded_counts();
    let guessed = guess.folded();
    let target = solution.folded();

    // First pass: exact position matches
    // Allow: Index needed to compare guessed[i], target[i] and set statuses[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guessed[i] == target[i] {
            statuses[i] = LetterStatus::Correct;
            if let Some(count) = available.get_mut(&guessed[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, limited by remaining occurrences
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guessed[i])
            && *count > 0
        {
            statuses[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    let letters = guess.letters();
    Feedback(std::array::from_fn(|position| LetterResult {
        letter: letters[position],
        status: statuses[position],
        position,
    }))
}

/// Evaluate two raw strings
///
/// # Panics
/// Panics if either input is not a valid 5-letter word. Input must be validated
/// before it reaches the evaluator.
#[must_use]
pub fn evaluate_str(guess: &str, solution: &str) -> Feedback {
    let guess = Word::new(guess).unwrap_or_else(|e| panic!("invalid guess {guess:?}: {e}"));
    let solution =
        Word::new(solution).unwrap_or_else(|e| panic!("invalid solution {solution:?}: {e}"));
    evaluate(&guess, &solution)
}
