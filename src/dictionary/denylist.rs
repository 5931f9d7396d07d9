//! Words excluded from the dictionary regardless of source

use crate::core::strip_accents;
use crate::wordlists::loader::tokenize;
use rustc_hash::FxHashSet;

/// Accent-folded tokens that may never be played
///
/// Matching folds the candidate too, so listing `lanco` also excludes `lanço`.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    tokens: FxHashSet<String>,
}

impl Denylist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw list text
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut denylist = Self::new();
        denylist.extend(tokenize(text));
        denylist
    }

    /// Add hardcoded tokens
    #[must_use]
    pub fn with_additions<S: AsRef<str>>(mut self, additions: &[S]) -> Self {
        self.extend(additions.iter().map(AsRef::as_ref));
        self
    }

    /// Remove tokens the fetched list gets wrong
    #[must_use]
    pub fn with_exemptions<S: AsRef<str>>(mut self, exemptions: &[S]) -> Self {
        for token in exemptions {
            self.tokens.remove(&fold(token.as_ref()));
        }
        self
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.tokens.contains(&fold(word))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn fold(token: &str) -> String {
    strip_accents(&token.trim().to_lowercase())
}

impl<S: AsRef<str>> Extend<S> for Denylist {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.tokens.extend(iter.into_iter().map(|t| fold(t.as_ref())));
    }
}
