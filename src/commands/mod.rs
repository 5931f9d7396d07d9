//! Command implementations

pub mod dictionary;
pub mod evaluate;
pub mod play;

pub use dictionary::{fallback_snapshot, load_dictionary, pick_word};
pub use evaluate::evaluate_words;
pub use play::{PlaySummary, run_play};
