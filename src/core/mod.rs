//! Core domain types for the game
//!
//! Pure types with no I/O: words, accent folding, guess scoring and keyboard state.

mod accents;
mod evaluate;
mod keyboard;
mod status;
mod word;

pub use accents::{compose, is_word_letter, strip_accent_char, strip_accents};
pub use evaluate::{Feedback, evaluate, evaluate_str};
pub use keyboard::KeyboardState;
pub use status::{LetterResult, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
