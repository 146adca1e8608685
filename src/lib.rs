//! In-memory inverted-index core for a news-article search system.
//!
//! Ingestion feeds `(article, token)` events in; queries ask for the
//! articles that use a term most, ranked by frequency. The crate is the
//! indexing and query subsystem only — it does not fetch articles, parse
//! HTML, tokenize text, or render results. Those are the caller's job; this
//! crate only ever sees the strings they hand it.
//!
//! ```
//! use newsdex::Index;
//!
//! let mut idx = Index::new(1024);
//! let id = idx.register_article("http://example.com/a", "Hello").unwrap();
//! let id = id.article_id().unwrap();
//! idx.add_token(id, "hello");
//! idx.add_token(id, "hello");
//! assert_eq!(idx.query_top_n("HELLO", 10)[0].count, 2);
//! ```
//!
//! Architecture, leaves first: [`normalize`] folds case; [`stopwords`]
//! filters noise words; [`registry`] assigns article ids and enforces
//! dedup; [`dictionary`] holds the term→postings map; [`query`] ranks
//! postings into results; [`index`] composes all of the above behind
//! [`Index`], the crate's one public entry point. [`contracts`] is
//! cross-cutting: debug-only invariant checks exercised from several of
//! the modules above.

mod contracts;
mod dictionary;
mod error;
mod index;
mod normalize;
mod query;
mod registry;
mod stopwords;

pub use error::{IndexError, RejectReason};
pub use index::Index;
pub use normalize::normalize;
pub use query::ResultRow;
pub use registry::RegisterOutcome;
