//! Word lists for the game
//!
//! Embedded hardcoded lists compiled into the binary, plus the default remote sources.

mod embedded;
pub mod loader;
mod sources;

pub use embedded::{
    DENYLIST_ADDITIONS, DENYLIST_ADDITIONS_COUNT, DENYLIST_EXEMPTIONS, DENYLIST_EXEMPTIONS_COUNT,
    FALLBACK_WORDS, FALLBACK_WORDS_COUNT,
};
pub use sources::{DEFAULT_DENYLIST_SOURCE, DEFAULT_LOOKUP_HOST, DEFAULT_SOURCES};
