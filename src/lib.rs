//! Termo
//!
//! Core of a Portuguese Wordle-style game: accent-insensitive guess scoring, a
//! dictionary built from remote word lists, and solution selection with a
//! hardcoded fallback.
//!
//! # Quick Start
//!
//! ```rust
//! use termo::core::{Word, evaluate};
//!
//! let guess = Word::new("tempo").unwrap();
//! let solution = Word::new("termo").unwrap();
//!
//! let feedback = evaluate(&guess, &solution);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Embedded word lists and default sources
pub mod wordlists;

// Word-list and page retrieval
pub mod fetch;

// Dictionary snapshots and cache
pub mod dictionary;

// Solution validators
pub mod validation;

// Solution selection
pub mod selection;

// Game sessions
pub mod game;

// Runtime settings
pub mod config;

// HTTP service
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
