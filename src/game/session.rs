//! One player's games and the per-session game limit

use crate::core::{Feedback, KeyboardState, Word, WordError, evaluate};
use crate::dictionary::DictionarySnapshot;
use crate::selection::{SelectionError, Solution, SolutionSelector};
use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Games allowed per session
pub const DEFAULT_GAMES_PER_SESSION: usize = 2;

/// State of the game in progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    #[serde(rename = "continue")]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Wire name used by the HTTP API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "continue",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

/// A rejected guess; the session is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Palavra deve ter exatamente 5 letras")]
    WrongLength { len: usize },
    #[error("Palavra contém caractere inválido: {0:?}")]
    InvalidCharacter(char),
    #[error("Palavra não encontrada no dicionário")]
    NotInDictionary { guess: String },
    #[error("O jogo já terminou")]
    GameOver,
}

impl From<WordError> for GuessError {
    fn from(error: WordError) -> Self {
        match error {
            WordError::InvalidLength(len) => Self::WrongLength { len },
            WordError::InvalidCharacter(c) => Self::InvalidCharacter(c),
        }
    }
}

/// A new game could not be started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session limit of {limit} games reached")]
    LimitReached { limit: usize },
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub status: GameStatus,
    /// Number of guesses made so far, this one included
    pub turn: usize,
}

/// Solution, history and anti-repeat state for one player
#[derive(Debug, Clone)]
pub struct GameSession {
    solution: Solution,
    guesses: Vec<Guess>,
    used: FxHashSet<String>,
    keyboard: KeyboardState,
    status: GameStatus,
    games_played: usize,
    game_limit: usize,
}

impl GameSession {
    /// Start a session with a freshly picked solution
    ///
    /// # Errors
    /// Returns `SessionError::Selection` if no solution can be picked.
    pub fn start(
        selector: &SolutionSelector,
        snapshot: &DictionarySnapshot,
    ) -> Result<Self, SessionError> {
        let solution = selector.pick_solution(snapshot, &FxHashSet::default())?;
        Ok(Self::with_solution(solution))
    }

    /// Start a session around a known solution
    #[must_use]
    pub fn with_solution(solution: Solution) -> Self {
        let mut used = FxHashSet::default();
        used.insert(solution.word.folded_text());
        Self {
            solution,
            guesses: Vec::with_capacity(MAX_GUESSES),
            used,
            keyboard: KeyboardState::new(),
            status: GameStatus::InProgress,
            games_played: 1,
            game_limit: DEFAULT_GAMES_PER_SESSION,
        }
    }

    #[must_use]
    pub fn with_game_limit(mut self, limit: usize) -> Self {
        self.game_limit = limit.max(1);
        self
    }

    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Current turn, starting at 1
    #[must_use]
    pub fn turn(&self) -> usize {
        self.guesses.len() + 1
    }

    #[must_use]
    pub const fn games_played(&self) -> usize {
        self.games_played
    }

    #[must_use]
    pub const fn game_limit(&self) -> usize {
        self.game_limit
    }

    /// Whether another game may be started
    #[must_use]
    pub const fn can_start_next(&self) -> bool {
        self.games_played < self.game_limit
    }

    /// Accent-folded solutions already used this session
    #[must_use]
    pub const fn used_words(&self) -> &FxHashSet<String> {
        &self.used
    }

    /// Score a guess against the solution
    ///
    /// The guess must be in the dictionary (accents ignored), or be the solution
    /// itself since fallback solutions may be absent from the snapshot.
    ///
    /// # Errors
    /// Returns `GuessError` without changing the session if the game is over, the
    /// guess is malformed, or it is not a known word.
    pub fn submit(
        &mut self,
        text: &str,
        snapshot: &DictionarySnapshot,
    ) -> Result<GuessOutcome, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }

        let word = Word::new(text)?;
        if !word.matches(&self.solution.word) && !snapshot.contains_unaccented(word.text()) {
            debug!(guess = word.text(), "Guess not in dictionary");
            return Err(GuessError::NotInDictionary {
                guess: word.text().to_string(),
            });
        }

        let feedback = evaluate(&word, &self.solution.word);
        self.keyboard.record(&feedback);
        self.guesses.push(Guess {
            word,
            feedback: feedback.clone(),
        });

        self.status = if feedback.is_solved() {
            GameStatus::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        if self.status.is_over() {
            info!(
                solution = self.solution.word.text(),
                guesses = self.guesses.len(),
                status = self.status.as_str(),
                "Game finished"
            );
        }

        Ok(GuessOutcome {
            feedback,
            status: self.status,
            turn: self.guesses.len(),
        })
    }

    /// Start the next game with a solution not used this session
    ///
    /// # Errors
    /// Returns `SessionError::LimitReached` once the game limit is hit, or
    /// `SessionError::Selection` if every candidate has been used.
    pub fn start_next(
        &mut self,
        selector: &SolutionSelector,
        snapshot: &DictionarySnapshot,
    ) -> Result<&Solution, SessionError> {
        if !self.can_start_next() {
            return Err(SessionError::LimitReached {
                limit: self.game_limit,
            });
        }

        let solution = selector.pick_solution(snapshot, &self.used)?;
        self.used.insert(solution.word.folded_text());
        self.solution = solution;
        self.guesses.clear();
        self.keyboard.clear();
        self.status = GameStatus::InProgress;
        self.games_played += 1;

        info!(game = self.games_played, limit = self.game_limit, "New game started");
        Ok(&self.solution)
    }
}
