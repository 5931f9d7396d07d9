//! Game sessions
//!
//! A session plays a limited number of games, never reusing a solution, and keeps
//! the guess history and keyboard state of the game in progress.

mod session;

pub use session::{
    DEFAULT_GAMES_PER_SESSION, GameSession, GameStatus, Guess, GuessError, GuessOutcome,
    MAX_GUESSES, SessionError,
};
