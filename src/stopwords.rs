//! Stop-word filter: a deterministic, O(1)-expected membership test for a
//! bounded set of high-frequency, low-information words.

use std::collections::HashSet;

use crate::error::IndexError;
use crate::normalize::normalize;

/// The set of normalized stop words currently loaded into an index.
///
/// Membership is checked under the same normalization applied to ingested
/// tokens and query terms, so the three domains stay directly comparable.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub(crate) fn new() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Consume a lazy sequence of fallible byte strings, inserting
    /// `normalize(s)` for each nonempty record.
    ///
    /// One word per record; a trailing `\r` is tolerated so CRLF files split
    /// on `\n` still work. Empty records (after trimming `\r`) are skipped.
    /// Repeat entries are idempotent. If the iterator yields an `Err`, the
    /// load stops there and returns `ResourceError`, but every word accepted
    /// before the failure stays in the set.
    pub(crate) fn load<I, S, E>(&mut self, iter: I) -> Result<(), IndexError>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
        E: std::fmt::Display,
    {
        for item in iter {
            let record = item.map_err(|e| IndexError::ResourceError(e.to_string()))?;
            let trimmed = record.as_ref().trim_end_matches('\r');
            if trimmed.is_empty() {
                continue;
            }
            let normalized = normalize(trimmed);
            if !normalized.is_empty() {
                self.words.insert(normalized);
            }
        }
        Ok(())
    }

    /// `true` iff `normalize(s)` is a loaded stop word.
    pub(crate) fn contains(&self, s: &str) -> bool {
        self.words.contains(&normalize(s))
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn ok_lines(words: &[&str]) -> Vec<Result<String, io::Error>> {
        words.iter().map(|w| Ok(w.to_string())).collect()
    }

    #[test]
    fn loads_and_normalizes() {
        let mut sw = StopWords::new();
        sw.load(ok_lines(&["The", "AND", "the"])).unwrap();
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("the"));
        assert!(sw.contains("THE"));
        assert!(sw.contains("And"));
        assert!(!sw.contains("news"));
    }

    #[test]
    fn skips_empty_records_and_strips_cr() {
        let mut sw = StopWords::new();
        sw.load(ok_lines(&["the\r", "", "and"])).unwrap();
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("the"));
    }

    #[test]
    fn partial_load_on_failure_keeps_prior_entries() {
        let mut sw = StopWords::new();
        let items: Vec<Result<String, io::Error>> = vec![
            Ok("the".to_string()),
            Ok("and".to_string()),
            Err(io::Error::other("boom")),
            Ok("or".to_string()),
        ];
        let result = sw.load(items);
        assert!(matches!(result, Err(IndexError::ResourceError(_))));
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
        assert!(!sw.contains("or"));
    }

    #[test]
    fn idempotent_repeats() {
        let mut sw = StopWords::new();
        sw.load(ok_lines(&["the", "the", "THE"])).unwrap();
        assert_eq!(sw.len(), 1);
    }
}
