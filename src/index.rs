//! Index facade: composes the registry, stop-word filter, and term
//! dictionary into the single object the rest of the crate is built to
//! serve.

use crate::contracts;
use crate::dictionary::TermDictionary;
use crate::error::IndexError;
use crate::normalize::normalize;
use crate::query::{self, ResultRow};
use crate::registry::{ArticleRegistry, RegisterOutcome};
use crate::stopwords::StopWords;

/// Fallback bucket count for the term dictionary when the caller supplies a
/// nonpositive value to [`Index::new`].
const DEFAULT_BUCKETS: usize = 10_007;

/// The composed in-memory inverted index. Single-threaded, process-lifetime,
/// ephemeral — there is no persistence and no internal synchronization. Wrap
/// it in a mutex or similar at the call site if you need either.
#[derive(Debug)]
pub struct Index {
    articles: ArticleRegistry,
    stop_words: StopWords,
    terms: TermDictionary,
}

impl Index {
    /// Create an empty index. `num_buckets` seeds the term dictionary's
    /// initial capacity; a nonpositive value falls back to a fixed prime.
    pub fn new(num_buckets: i64) -> Self {
        let buckets = if num_buckets > 0 {
            num_buckets as usize
        } else {
            DEFAULT_BUCKETS
        };
        Self {
            articles: ArticleRegistry::new(),
            stop_words: StopWords::new(),
            terms: TermDictionary::with_capacity(buckets),
        }
    }

    /// Convenience constructor for callers who know roughly how many
    /// distinct terms they expect, rather than a raw bucket count.
    pub fn with_expected_terms(expected_terms: usize) -> Self {
        Self {
            articles: ArticleRegistry::new(),
            stop_words: StopWords::new(),
            terms: TermDictionary::with_capacity(expected_terms),
        }
    }

    /// Consumes a lazy sequence of fallible byte strings; inserts the
    /// normalization of each nonempty one. On failure, every word accepted
    /// before the failing item stays loaded.
    pub fn load_stop_words<I, S, E>(&mut self, iter: I) -> Result<(), IndexError>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
        E: std::fmt::Display,
    {
        self.stop_words.load(iter)
    }

    /// True iff `normalize(s)` was loaded.
    pub fn is_stop_word(&self, s: &str) -> bool {
        self.stop_words.contains(s)
    }

    /// Rejects empty `url` with `InvalidInput`; otherwise enforces the URL
    /// and `(server, title)` dedup rules and returns which, if either,
    /// fired.
    pub fn register_article(&mut self, url: &str, title: &str) -> Result<RegisterOutcome, IndexError> {
        let outcome = self.articles.register(url, title)?;
        if let RegisterOutcome::Registered(id) = outcome {
            contracts::check_dense_article_id(id, &self.articles);
        }
        Ok(outcome)
    }

    /// Look up the title of a previously registered article.
    pub fn get_article_title(&self, id: usize) -> Result<&str, IndexError> {
        self.articles.title(id)
    }

    /// Look up the URL of a previously registered article.
    pub fn get_article_url(&self, id: usize) -> Result<&str, IndexError> {
        self.articles.url(id)
    }

    /// Out-of-range `article_id`, empty `token`, and stop words are all
    /// silent no-ops rather than surfacing an error for what the caller
    /// can't usefully react to.
    pub fn add_token(&mut self, article_id: usize, token: &str) {
        if !self.articles.contains(article_id) || token.is_empty() {
            return;
        }
        let word = normalize(token);
        if self.stop_words.contains(&word) {
            return;
        }
        contracts::check_term_is_normalized_and_not_stop(&word, false);
        self.terms.add_occurrence(&word, article_id);
        contracts::check_postings_unique_article_ids(&self.terms, &word);
        contracts::check_postings_in_bounds(&self.terms, &word, &self.articles);
    }

    /// Empty `term`, non-positive `n`, or an absent term (including any stop
    /// word) all yield an empty result.
    pub fn query_top_n(&self, term: &str, n: i64) -> Vec<ResultRow> {
        query::query_top_n(&self.terms, term, n)
    }

    /// Number of accepted articles.
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Number of distinct indexed terms (stop words never count).
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}
