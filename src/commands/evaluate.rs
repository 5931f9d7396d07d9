//! One-shot guess evaluation

use crate::core::{Feedback, Word, WordError, evaluate};

/// Score `guess` against `solution` without a dictionary check
///
/// # Errors
///
/// Returns `WordError` if either word is not five letters.
pub fn evaluate_words(guess: &str, solution: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    Ok(evaluate(&guess, &solution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    #[test]
    fn evaluate_words_scores_duplicates() {
        let feedback = evaluate_words("orrar", "carro").unwrap();
        let r_marked = feedback
            .results()
            .iter()
            .filter(|r| r.letter == 'r' && r.status != LetterStatus::Absent)
            .count();
        assert_eq!(r_marked, 2);
    }

    #[test]
    fn evaluate_words_rejects_bad_input() {
        assert_eq!(
            evaluate_words("casa", "termo"),
            Err(WordError::InvalidLength(4))
        );
        assert!(evaluate_words("termo", "te5mo").is_err());
    }
}
