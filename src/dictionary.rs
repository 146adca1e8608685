//! Term dictionary and postings: the inverted mapping from a normalized term
//! to the articles that contain it, and how many times.
//!
//! # INVARIANTS — do not violate
//!
//! 1. Within a single `TermEntry.postings`, `article_id` values are unique.
//! 2. `postings` is ordered by first-occurrence of the `article_id`
//!    (insertion order); it is never sorted or reordered.
//! 3. Every stored term equals its own normalization and is never a stop
//!    word — both are enforced by the caller (`Index::add_token`) before a
//!    `TermEntry` is created, not by this module.

use std::collections::HashMap;

/// One `(article_id, count)` record: article `article_id` contains the
/// owning term `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub article_id: usize,
    pub count: u32,
}

/// A normalized term and its postings, in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct TermEntry {
    pub postings: Vec<Posting>,
}

impl TermEntry {
    /// Bump the posting for `article_id`, or append a fresh one with count 1.
    ///
    /// Design choice: linear scan rather than a per-term hash set.
    /// News-article ingestion tends to hand a term many adjacent tokens
    /// for the same article in a row, so the most recently touched posting
    /// is usually at the tail — checked first here — and per-term postings
    /// lists in a real corpus stay short. Matches are bumped in place, never
    /// moved, so insertion order (invariant 2 above) never breaks.
    fn bump_or_append(&mut self, article_id: usize) {
        if let Some(last) = self.postings.last_mut() {
            if last.article_id == article_id {
                last.count += 1;
                return;
            }
        }
        if let Some(existing) = self
            .postings
            .iter_mut()
            .find(|p| p.article_id == article_id)
        {
            existing.count += 1;
            return;
        }
        self.postings.push(Posting {
            article_id,
            count: 1,
        });
    }
}

/// Mapping from normalized term to its `TermEntry`, keyed under
/// case-insensitive equality (terms are pre-normalized by the caller, so
/// plain `String` equality suffices).
#[derive(Debug, Default)]
pub struct TermDictionary {
    terms: HashMap<String, TermEntry>,
}

impl TermDictionary {
    pub(crate) fn with_capacity(buckets: usize) -> Self {
        Self {
            terms: HashMap::with_capacity(buckets),
        }
    }

    /// Record one occurrence of the already-normalized, already-filtered
    /// `word` in `article_id`. Creates the `TermEntry` on first sight.
    pub(crate) fn add_occurrence(&mut self, word: &str, article_id: usize) {
        self.terms
            .entry(word.to_string())
            .or_default()
            .bump_or_append(article_id);
    }

    pub(crate) fn get(&self, word: &str) -> Option<&TermEntry> {
        self.terms.get(word)
    }

    pub(crate) fn len(&self) -> usize {
        self.terms.len()
    }
}
