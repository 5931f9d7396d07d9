//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, LetterStatus};
use colored::{ColoredString, Colorize};

/// Keyboard rows as shown under the board (ABNT layout)
///
/// `ç` shares its status with `c`, since scoring ignores accents.
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjklç", "zxcvbnm"];

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let face = format!(" {} ", letter.to_uppercase());
    match status {
        LetterStatus::Correct => face.black().on_green().bold(),
        LetterStatus::Present => face.black().on_yellow().bold(),
        LetterStatus::Absent => face.white().on_bright_black(),
        LetterStatus::Untested => face.normal(),
    }
}

/// A guess as a row of tiles, accents included
#[must_use]
pub fn feedback_row(feedback: &Feedback) -> String {
    feedback
        .results()
        .iter()
        .map(|r| tile(r.letter, r.status).to_string())
        .collect()
}

/// The keyboard, one string per row, keys colored by best-known status
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|key| tile(key, keyboard.status_of(key)).to_string())
                .collect()
        })
        .collect()
}

/// Short Portuguese label for a status
#[must_use]
pub const fn status_label(status: LetterStatus) -> &'static str {
    match status {
        LetterStatus::Correct => "certa",
        LetterStatus::Present => "presente",
        LetterStatus::Absent => "ausente",
        LetterStatus::Untested => "-",
    }
}
