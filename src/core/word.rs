//! Portuguese word representation
//!
//! A Word stores a 5-letter word in its accented form together with the accent-folded
//! letters used for comparison.

use super::accents::{compose, is_word_letter, strip_accent_char};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every playable word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word with accented and folded letters
///
/// The folded form is derived from the accented one and never set independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
    folded: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased and NFC-composed before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - A character is not a lowercase Latin letter (accents and `ç` allowed)
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    ///
    /// let word = Word::new("Fácil").unwrap();
    /// assert_eq!(word.text(), "fácil");
    /// assert_eq!(word.folded_text(), "facil");
    ///
    /// assert!(Word::new("xadrez").is_err());
    /// assert!(Word::new("te-mo").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = compose(&text.as_ref().trim().to_lowercase());

        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = [' '; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(text.chars()) {
            if !is_word_letter(letter) {
                return Err(WordError::InvalidCharacter(letter));
            }
            *slot = letter;
        }

        let folded = letters.map(strip_accent_char);

        Ok(Self {
            text,
            letters,
            folded,
        })
    }

    /// Get the word as typed, accents included
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as typed
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the accent-folded letters
    #[inline]
    #[must_use]
    pub const fn folded(&self) -> &[char; WORD_LENGTH] {
        &self.folded
    }

    /// Get the accent-folded word as a string
    #[must_use]
    pub fn folded_text(&self) -> String {
        self.folded.iter().collect()
    }

    /// Whether two words are the same once accents are ignored
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.folded == other.folded
    }

    /// Count of each folded letter, used for duplicate-aware scoring
    pub(crate) fn folded_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.folded {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
