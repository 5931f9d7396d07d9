//! Plain-text retrieval of word lists and dictionary pages
//!
//! Everything that leaves the process goes through [`Fetcher`], so the dictionary
//! pipeline and the lookup validator can be exercised without a network.

use crate::wordlists::loader::read_list;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Browser-like agent; some dictionary sites refuse unknown clients
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// A fetched document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Failure to retrieve a source
#[derive(Debug, Error)]
pub enum SourceFetchError {
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Retrieves documents by URL or path
pub trait Fetcher: Send + Sync {
    /// Fetch a document, whatever its status
    ///
    /// # Errors
    /// Returns `SourceFetchError` when no response could be obtained at all.
    fn get(&self, url: &str) -> Result<Page, SourceFetchError>;

    /// Fetch a document body, treating any non-200 status as an error
    ///
    /// # Errors
    /// Returns `SourceFetchError` on transport failure or a non-200 status.
    fn fetch_text(&self, url: &str) -> Result<String, SourceFetchError> {
        let page = self.get(url)?;
        if page.is_success() {
            Ok(page.body)
        } else {
            Err(SourceFetchError::Status {
                url: url.to_string(),
                status: page.status,
            })
        }
    }
}

/// Fetches `http(s)://` URLs over the network and anything else from disk
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialised (e.g. TLS backend failure).
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

fn is_remote(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<Page, SourceFetchError> {
        if !is_remote(url) {
            let body = read_list(url).map_err(|source| SourceFetchError::Io {
                path: url.to_string(),
                source,
            })?;
            return Ok(Page::ok(body));
        }

        let transport = |e: reqwest::Error| SourceFetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "text/html,text/plain;q=0.9,*/*;q=0.8")
            .header(ACCEPT_LANGUAGE, "pt-BR,pt;q=0.9,en;q=0.8")
            .send()
            .map_err(transport)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(transport)?;
        Ok(Page { status, body })
    }
}
