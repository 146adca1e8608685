//! Article registry: assigns dense ids and enforces the two deduplication
//! rules news-wire syndication needs — exact URL repeats from aggregators,
//! and same-story mirrors that share a server and title but not a URL.

use url::Url;

use crate::error::{IndexError, RejectReason};
use crate::normalize::normalize;

/// A single accepted article. Never mutated after `register` returns its id;
/// destroyed only when the owning `Index` is dropped.
#[derive(Debug, Clone)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub server: String,
}

/// Outcome of `ArticleRegistry::register`: either a fresh dense id, or a
/// rejection naming which dedup rule fired. This is deliberately not folded
/// into `IndexError` — a duplicate is a normal business outcome, not a
/// fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered(usize),
    Rejected(RejectReason),
}

impl RegisterOutcome {
    /// The assigned id, if this outcome was a registration rather than a
    /// rejection. Most callers branch on success and don't care why a
    /// rejection happened until they do.
    pub fn article_id(self) -> Option<usize> {
        match self {
            RegisterOutcome::Registered(id) => Some(id),
            RegisterOutcome::Rejected(_) => None,
        }
    }
}

/// Append-only table of accepted articles plus the two deduplication sets
/// that guard it.
#[derive(Debug, Default)]
pub struct ArticleRegistry {
    articles: Vec<Article>,
    seen_urls: std::collections::HashSet<String>,
    seen_title_server: std::collections::HashSet<String>,
}

/// Build the `server | title` composite dedup key: `'|'` is ASCII `0x7C`.
/// Server names and titles are never expected to contain it; if they do,
/// collisions are tolerated as a known trade-off rather than escaped.
fn title_server_key(server: &str, title: &str) -> String {
    let mut key = normalize(server);
    key.push('|');
    key.push_str(&normalize(title));
    key
}

/// Extract the host component of `url`, delegated to the `url` crate. An
/// unparseable URL yields an empty server string rather than an error.
fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_owned))
        .unwrap_or_default()
}

impl ArticleRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a new article, enforcing the registry's dedup invariants.
    ///
    /// Rejects with `InvalidInput` if `url` is empty. Otherwise checks the
    /// URL dedup key, then the `(server, title)` dedup key; either match
    /// alone is enough to reject. On acceptance, both keys are recorded and
    /// the article is appended with its index as its id.
    pub(crate) fn register(&mut self, url: &str, title: &str) -> Result<RegisterOutcome, IndexError> {
        if url.is_empty() {
            return Err(IndexError::InvalidInput("url must not be empty"));
        }

        let key_u = normalize(url);
        if self.seen_urls.contains(&key_u) {
            return Ok(RegisterOutcome::Rejected(RejectReason::DuplicateUrl));
        }

        let server = host_of(url);
        let key_st = title_server_key(&server, title);
        if self.seen_title_server.contains(&key_st) {
            return Ok(RegisterOutcome::Rejected(RejectReason::DuplicateTitleServer));
        }

        self.seen_urls.insert(key_u);
        self.seen_title_server.insert(key_st);
        self.articles.push(Article {
            url: url.to_string(),
            title: title.to_string(),
            server,
        });

        Ok(RegisterOutcome::Registered(self.articles.len() - 1))
    }

    pub(crate) fn len(&self) -> usize {
        self.articles.len()
    }

    pub(crate) fn contains(&self, id: usize) -> bool {
        id < self.articles.len()
    }

    pub(crate) fn title(&self, id: usize) -> Result<&str, IndexError> {
        self.articles
            .get(id)
            .map(|a| a.title.as_str())
            .ok_or(IndexError::NotFound)
    }

    pub(crate) fn url(&self, id: usize) -> Result<&str, IndexError> {
        self.articles
            .get(id)
            .map(|a| a.url.as_str())
            .ok_or(IndexError::NotFound)
    }
}
