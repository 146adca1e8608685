//! Runtime contracts for the index's core invariants.
//!
//! Every check here is a `debug_assert!`, zero-cost in release builds,
//! exercised directly by the unit tests below and indirectly by every
//! integration test that builds an `Index`. Removing a check here removes
//! the early-failure detection these invariants are supposed to give you —
//! don't.

use crate::dictionary::TermDictionary;
use crate::normalize::normalize;
use crate::registry::ArticleRegistry;

/// Every posting's `article_id` for `word` must fall inside
/// `[0, article_count)`. Scoped to a single term because that's all any one
/// `add_token` call can affect.
#[inline]
pub(crate) fn check_postings_in_bounds(terms: &TermDictionary, word: &str, articles: &ArticleRegistry) {
    let _ = terms;
    let _ = word;
    let _ = articles;
    #[cfg(debug_assertions)]
    if let Some(entry) = terms.get(word) {
        for posting in &entry.postings {
            debug_assert!(
                articles.contains(posting.article_id),
                "contract violation: posting for '{word}' references article_id {} but only {} articles are registered",
                posting.article_id,
                articles.len()
            );
        }
    }
}

/// A stored term must equal its own normalization and must not be a stop
/// word. Only callable where the caller already holds the normalized word
/// and the stop-word answer, since `TermDictionary` doesn't know about stop
/// words itself.
#[inline]
pub(crate) fn check_term_is_normalized_and_not_stop(word: &str, is_stop_word: bool) {
    debug_assert_eq!(
        normalize(word),
        word,
        "contract violation: stored term '{word}' is not its own normalization"
    );
    debug_assert!(
        !is_stop_word,
        "contract violation: stop word '{word}' was given a TermEntry"
    );
}

/// Within one term's postings, no two entries may share an `article_id`.
#[inline]
pub(crate) fn check_postings_unique_article_ids(terms: &TermDictionary, word: &str) {
    let _ = terms;
    let _ = word;
    #[cfg(debug_assertions)]
    if let Some(entry) = terms.get(word) {
        let mut ids: Vec<usize> = entry.postings.iter().map(|p| p.article_id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        debug_assert_eq!(
            ids.len(),
            before,
            "contract violation: postings for '{word}' contain a duplicate article_id"
        );
    }
}

/// Article ids must be assigned in call order: `0, 1, 2, ...`.
#[inline]
pub(crate) fn check_dense_article_id(new_id: usize, articles: &ArticleRegistry) {
    debug_assert_eq!(
        new_id,
        articles.len() - 1,
        "contract violation: article id {new_id} is not the next dense id after registration"
    );
}
