//! Per-letter feedback types

use serde::Serialize;

/// Feedback for a single tile or keyboard key
///
/// Ordered by how much it reveals: `Correct > Present > Absent > Untested`.
/// The keyboard shows the maximum status a letter has ever received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Letter not tried yet
    #[default]
    #[serde(rename = "default")]
    Untested,
    /// Letter not in the solution (or all occurrences already claimed)
    Absent,
    /// Letter in the solution at another position
    Present,
    /// Letter at the right position
    Correct,
}

impl LetterStatus {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Untested => '⬜',
        }
    }
}

/// Status of one guessed letter at its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterResult {
    pub letter: char,
    pub status: LetterStatus,
    pub position: usize,
}
