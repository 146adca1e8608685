//! Error taxonomy for the index core.
//!
//! This crate hand-rolls its error enums rather than pulling in an
//! error-handling crate: a plain enum with a hand-written `Display` and a
//! blanket `impl std::error::Error` is enough surface area for the handful of
//! outcomes callers need to distinguish. `IndexError` covers faults the
//! caller must react to; `RejectReason` is deliberately a separate type
//! because a rejected registration is a normal business outcome, not a fault
//! (see `registry::RegisterOutcome`).

use std::fmt;

/// Faults a caller must react to. `NotFound` is included because lookup
/// functions need to signal "absent" distinctly from a panic or default
/// value, even though it is an expected, non-exceptional outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Caller-supplied arguments violate a precondition (empty required
    /// string, out-of-range id where one must be in range).
    InvalidInput(&'static str),
    /// Allocation failed, or the stop-words iterator reported a failure.
    ResourceError(String),
    /// An id or term was not present. Normal for lookups, not a fault in the
    /// usual sense, but distinct from a successful result.
    NotFound,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            IndexError::ResourceError(msg) => write!(f, "resource error: {msg}"),
            IndexError::NotFound => write!(f, "not found"),
        }
    }
}

impl std::error::Error for IndexError {}

/// Why `RegisterArticle` rejected an otherwise well-formed submission.
///
/// Rejection is a normal outcome of deduplication, not a fault; it never
/// appears wrapped in `IndexError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Case-insensitive URL match against an already-accepted article.
    DuplicateUrl,
    /// Case-insensitive `(server, title)` match against an already-accepted
    /// article.
    DuplicateTitleServer,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::DuplicateUrl => write!(f, "duplicate url"),
            RejectReason::DuplicateTitleServer => write!(f, "duplicate (server, title)"),
        }
    }
}
