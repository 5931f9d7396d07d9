//! Word validation oracles
//!
//! Source lists are untrusted, so a candidate solution can be confirmed against an
//! external dictionary before it is used. The check is pluggable through
//! [`WordValidator`]: [`AlwaysAccept`] trusts the sources, [`LookupValidator`] asks
//! the dictionary site.

mod lookup;

pub use lookup::{LookupValidator, ValidationLookupError, classify_page};

use crate::core::Word;
use std::fmt;
use std::str::FromStr;

/// Decides whether a word is real
pub trait WordValidator: Send + Sync {
    /// Check `word`
    ///
    /// # Errors
    /// Returns `ValidationLookupError` when the oracle could not answer. Callers
    /// must treat that as a rejection.
    fn validate(&self, word: &Word) -> Result<bool, ValidationLookupError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Accepts every word; the source lists are trusted as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAccept;

impl WordValidator for AlwaysAccept {
    fn validate(&self, _word: &Word) -> Result<bool, ValidationLookupError> {
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "accept"
    }
}

/// Which validator to use for solution words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidatorKind {
    /// Trust the source lists
    #[default]
    Accept,
    /// Confirm against the external dictionary
    Lookup,
}

impl FromStr for ValidatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accept" | "always-accept" | "none" => Ok(Self::Accept),
            "lookup" | "external" | "dicio" => Ok(Self::Lookup),
            other => Err(format!("unknown validator '{other}' (expected 'accept' or 'lookup')")),
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => write!(f, "accept"),
            Self::Lookup => write!(f, "lookup"),
        }
    }
}
