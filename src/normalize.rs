//! Token normalization: the canonical key every term, stop word, and query
//! argument is compared under.
//!
//! Normalization is purely ASCII case folding — `[A-Z]` maps to `[a-z]`,
//! everything else (including non-ASCII bytes) passes through unchanged.
//! Deliberately no diacritic stripping or other Unicode normalization: case
//! folding alone keeps `normalize(normalize(s)) == normalize(s)` easy to see
//! at a glance, and a news corpus's own tokenizer is responsible for
//! anything fancier upstream.

/// Lowercase the ASCII letters in `s`, leaving every other byte untouched.
///
/// Total and idempotent: empty input yields empty output, and re-normalizing
/// an already-normalized string is a no-op.
#[inline]
pub fn normalize(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_total() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn ascii_case_folds() {
        assert_eq!(normalize("Hello WORLD"), "hello world");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(normalize("Café"), "café");
    }

    #[test]
    fn idempotent() {
        let s = "MiXeD Case 123!";
        assert_eq!(normalize(&normalize(s)), normalize(s));
    }

    #[test]
    fn non_letters_untouched() {
        assert_eq!(normalize("Rust-2026!"), "rust-2026!");
    }
}
