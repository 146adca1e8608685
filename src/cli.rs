//! CLI definitions for the newsdex demo binary.
//!
//! One subcommand-free invocation: ingest a JSON-Lines file of articles,
//! optionally load stop words, then run a single query and print the
//! ranked rows. Anything beyond that — a REPL, multiple queries per run,
//! result formatting beyond a plain table — belongs to a caller built on
//! top of this crate, not to this binary.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "newsdex", about = "In-memory inverted-index demo for news articles", version)]
pub struct Cli {
    /// Path to a JSON Lines file: one article per line, each
    /// `{"url": "...", "title": "...", "tokens": ["...", ...]}`.
    #[arg(short, long)]
    pub articles: PathBuf,

    /// Newline-delimited stop-words file, one word per line.
    #[arg(short, long)]
    pub stopwords: Option<PathBuf>,

    /// Suggested term-dictionary bucket count. Nonpositive picks the
    /// built-in default.
    #[arg(short, long, default_value_t = 10_007)]
    pub buckets: i64,

    /// Term to query after ingestion.
    pub term: String,

    /// Maximum number of results to print.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: i64,
}

/// One line of the articles JSONL input.
#[derive(serde::Deserialize, Debug)]
pub struct ArticleRecord {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tokens: Vec<String>,
}

/// Turn a `BufRead` into the `Iterator<Item = io::Result<String>>` that
/// [`newsdex::Index::load_stop_words`] expects, so the binary doesn't have
/// to reach for anything beyond what the standard library's line splitting
/// already gives it.
pub fn stopwords_from_reader<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines()
}
