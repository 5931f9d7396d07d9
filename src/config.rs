//! Runtime settings
//!
//! Every setting is a global CLI flag with a `TERMO_*` environment fallback. The
//! helpers here wire a fetcher into the dictionary, validator and selector.

use crate::dictionary::{DictionaryBuilder, SnapshotCache};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::game::DEFAULT_GAMES_PER_SESSION;
use crate::selection::{DEFAULT_MAX_ATTEMPTS, SolutionSelector};
use crate::validation::{AlwaysAccept, LookupValidator, ValidatorKind, WordValidator};
use crate::wordlists::{DEFAULT_DENYLIST_SOURCE, DEFAULT_LOOKUP_HOST, DEFAULT_SOURCES};
use clap::Args;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Word-list URL or file, in precedence order (repeatable; default: built-in list)
    #[arg(
        long = "source",
        env = "TERMO_SOURCES",
        value_delimiter = ',',
        global = true
    )]
    pub sources: Vec<String>,

    /// Denylist URL or file
    #[arg(long, env = "TERMO_DENYLIST", default_value = DEFAULT_DENYLIST_SOURCE, global = true)]
    pub denylist: String,

    /// Skip the remote denylist (hardcoded additions still apply)
    #[arg(long, env = "TERMO_NO_DENYLIST", global = true)]
    pub no_denylist: bool,

    /// Solution validator: accept (trust sources) or lookup (dictionary site)
    #[arg(long, env = "TERMO_VALIDATOR", default_value_t = ValidatorKind::Accept, global = true)]
    pub validator: ValidatorKind,

    /// Dictionary site used by the lookup validator
    #[arg(long, env = "TERMO_LOOKUP_HOST", default_value = DEFAULT_LOOKUP_HOST, global = true)]
    pub lookup_host: String,

    /// Lookup attempts per word
    #[arg(long, env = "TERMO_LOOKUP_ATTEMPTS", default_value_t = 2, global = true)]
    pub lookup_attempts: usize,

    /// Pause between lookup attempts, in milliseconds
    #[arg(long, env = "TERMO_LOOKUP_BACKOFF_MS", default_value_t = 1000, global = true)]
    pub lookup_backoff_ms: u64,

    /// HTTP request timeout, in seconds
    #[arg(long, env = "TERMO_TIMEOUT_SECS", default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// Dictionary draws before using the fallback list
    #[arg(
        long,
        env = "TERMO_SELECTION_ATTEMPTS",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        global = true
    )]
    pub selection_attempts: usize,

    /// Dictionary refresh interval, in seconds
    #[arg(long, env = "TERMO_REFRESH_SECS", default_value_t = 3600, global = true)]
    pub refresh_secs: u64,

    /// Server listen address
    #[arg(long, env = "TERMO_BIND", default_value = "127.0.0.1:3000", global = true)]
    pub bind: SocketAddr,

    /// Games per session
    #[arg(long, env = "TERMO_GAMES", default_value_t = DEFAULT_GAMES_PER_SESSION, global = true)]
    pub games: usize,

    /// Fixed selection seed (default: current time)
    #[arg(long, env = "TERMO_SEED", global = true)]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            denylist: DEFAULT_DENYLIST_SOURCE.to_string(),
            no_denylist: false,
            validator: ValidatorKind::Accept,
            lookup_host: DEFAULT_LOOKUP_HOST.to_string(),
            lookup_attempts: 2,
            lookup_backoff_ms: 1000,
            timeout_secs: 10,
            selection_attempts: DEFAULT_MAX_ATTEMPTS,
            refresh_secs: 3600,
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            games: DEFAULT_GAMES_PER_SESSION,
            seed: None,
        }
    }
}

impl Settings {
    /// Configured sources, or the built-in list when none were given
    #[must_use]
    pub fn sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            DEFAULT_SOURCES.iter().map(ToString::to_string).collect()
        } else {
            self.sources.clone()
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub const fn lookup_backoff(&self) -> Duration {
        Duration::from_millis(self.lookup_backoff_ms)
    }

    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    /// Network and file fetcher honouring the request timeout
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn http_fetcher(&self) -> Result<Arc<HttpFetcher>, reqwest::Error> {
        HttpFetcher::new(self.timeout()).map(Arc::new)
    }

    #[must_use]
    pub fn dictionary_builder(&self, fetcher: Arc<dyn Fetcher>) -> DictionaryBuilder {
        let builder = DictionaryBuilder::new(fetcher, self.sources());
        if self.no_denylist {
            builder
        } else {
            builder.with_denylist_source(self.denylist.clone())
        }
    }

    /// Cache whose snapshots go stale after the refresh interval
    #[must_use]
    pub fn snapshot_cache(&self, fetcher: Arc<dyn Fetcher>) -> SnapshotCache {
        SnapshotCache::new(self.dictionary_builder(fetcher)).with_max_age(self.refresh_interval())
    }

    #[must_use]
    pub fn lookup_validator(&self, fetcher: Arc<dyn Fetcher>) -> LookupValidator {
        LookupValidator::new(fetcher, self.lookup_host.clone())
            .with_retry(self.lookup_attempts, self.lookup_backoff())
    }

    /// Validator for solution words, by configured kind
    #[must_use]
    pub fn validator(&self, fetcher: Arc<dyn Fetcher>) -> Arc<dyn WordValidator> {
        match self.validator {
            ValidatorKind::Accept => Arc::new(AlwaysAccept),
            ValidatorKind::Lookup => Arc::new(self.lookup_validator(fetcher)),
        }
    }

    #[must_use]
    pub fn selector(&self, fetcher: Arc<dyn Fetcher>) -> SolutionSelector {
        let selector = SolutionSelector::new(self.validator(fetcher))
            .with_max_attempts(self.selection_attempts);
        match self.seed {
            Some(seed) => selector.with_seed(seed),
            None => selector,
        }
    }
}
