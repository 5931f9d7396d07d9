//! Dictionary-site lookup
//!
//! There is no API: the word's page is fetched and screen-scraped for a
//! part-of-speech or definition marker. Best effort, treated as a boolean.

use super::WordValidator;
use crate::core::Word;
use crate::fetch::{Fetcher, Page, SourceFetchError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Default number of lookup attempts
pub const DEFAULT_ATTEMPTS: usize = 2;

/// Default pause between attempts
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Any of these means the page describes a word
const DEFINITION_MARKERS: &[&str] = &[
    "substantivo",
    "adjetivo",
    "verbo",
    "advérbio",
    "interjeição",
    "preposição",
    "conjunção",
    "artigo",
    "numeral",
    "pronome",
    "definição",
    "significado",
];

/// Any of these means the site had nothing for the word
const NOT_FOUND_MARKERS: &[&str] = &["Palavra não encontrada", "Página não encontrada", "404"];

/// The lookup oracle could not be reached within the retry budget
#[derive(Debug, Error)]
#[error("lookup for '{word}' failed after {attempts} attempt(s): {source}")]
pub struct ValidationLookupError {
    pub word: String,
    pub attempts: usize,
    #[source]
    pub source: SourceFetchError,
}

/// Whether a fetched dictionary page confirms the word
///
/// # Examples
/// ```
/// use termo::fetch::Page;
/// use termo::validation::classify_page;
///
/// assert!(classify_page(&Page::ok("<h2>Significado de Termo</h2> substantivo masculino")));
/// assert!(!classify_page(&Page::ok("Palavra não encontrada")));
/// ```
#[must_use]
pub fn classify_page(page: &Page) -> bool {
    page.is_success()
        && DEFINITION_MARKERS.iter().any(|m| page.body.contains(m))
        && !NOT_FOUND_MARKERS.iter().any(|m| page.body.contains(m))
}

/// Confirms words against `https://<host>/<word>/`
pub struct LookupValidator {
    fetcher: Arc<dyn Fetcher>,
    host: String,
    attempts: usize,
    backoff: Duration,
}

impl LookupValidator {
    pub fn new(fetcher: Arc<dyn Fetcher>, host: impl Into<String>) -> Self {
        Self {
            fetcher,
            host: host.into(),
            attempts: DEFAULT_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }

    /// Set the retry budget (at least one attempt)
    #[must_use]
    pub fn with_retry(mut self, attempts: usize, backoff: Duration) -> Self {
        self.attempts = attempts.max(1);
        self.backoff = backoff;
        self
    }

    /// Page URL for `word`
    #[must_use]
    pub fn lookup_url(&self, word: &str) -> String {
        format!("https://{}/{}/", self.host, word)
    }

    /// Fetch the word's page, retrying transport failures and server errors
    fn fetch_with_retry(&self, word: &Word) -> Result<Page, ValidationLookupError> {
        let url = self.lookup_url(word.text());
        let mut last_error = None;

        for attempt in 1..=self.attempts {
            let error = match self.fetcher.get(&url) {
                Ok(page) if !is_transient(page.status) => return Ok(page),
                Ok(page) => SourceFetchError::Status {
                    url: url.clone(),
                    status: page.status,
                },
                Err(e) => e,
            };

            warn!(word = word.text(), attempt, error = %error, "Dictionary lookup failed");
            last_error = Some(error);

            if attempt < self.attempts {
                thread::sleep(self.backoff);
            }
        }

        Err(ValidationLookupError {
            word: word.text().to_string(),
            attempts: self.attempts,
            source: last_error.unwrap_or_else(|| SourceFetchError::Transport {
                url,
                message: "no attempt made".to_string(),
            }),
        })
    }
}

const fn is_transient(status: u16) -> bool {
    status == 429 || status >= 500
}

impl WordValidator for LookupValidator {
    fn validate(&self, word: &Word) -> Result<bool, ValidationLookupError> {
        let page = self.fetch_with_retry(word)?;
        let valid = classify_page(&page);
        debug!(word = word.text(), status = page.status, valid, "Dictionary lookup");
        Ok(valid)
    }

    fn name(&self) -> &'static str {
        "lookup"
    }
}
