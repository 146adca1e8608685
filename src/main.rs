//! newsdex: thin demo binary over the `newsdex` library.
//!
//! ```bash
//! newsdex --articles articles.jsonl --stopwords stopwords.txt "breaking" -n 5
//! ```
//!
//! Ingests every line of `--articles` as one article, loads `--stopwords`
//! if given, then runs a single `QueryTopN` and prints the ranked rows.
//! Nothing here is meant to demonstrate production ingestion — a real
//! pipeline feeds the library `register_article`/`add_token` calls directly
//! from its own fetch-and-tokenize loop.

mod cli;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{stopwords_from_reader, ArticleRecord, Cli};
use newsdex::{Index, RegisterOutcome};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "newsdex failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut idx = Index::new(cli.buckets);

    if let Some(path) = &cli.stopwords {
        tracing::debug!(path = %path.display(), "loading stop words");
        let file = File::open(path)?;
        idx.load_stop_words(stopwords_from_reader(BufReader::new(file)))?;
        tracing::info!(count = idx.term_count(), "stop words loaded (term count pre-ingestion)");
    }

    let file = File::open(&cli.articles)?;
    let reader = BufReader::new(file);
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: ArticleRecord = serde_json::from_str(&line).map_err(|e| {
            format!("{}:{}: {e}", cli.articles.display(), line_no + 1)
        })?;

        match idx.register_article(&record.url, &record.title)? {
            RegisterOutcome::Registered(id) => {
                for token in &record.tokens {
                    idx.add_token(id, token);
                }
                tracing::trace!(id, url = %record.url, "article ingested");
            }
            RegisterOutcome::Rejected(reason) => {
                tracing::warn!(url = %record.url, %reason, "article rejected");
            }
        }
    }

    tracing::info!(
        articles = idx.article_count(),
        terms = idx.term_count(),
        "ingestion complete"
    );

    let results = idx.query_top_n(&cli.term, cli.limit);
    if results.is_empty() {
        println!("no matches for '{}'", cli.term);
        return Ok(());
    }

    println!("{:<4} {:<8} title", "rank", "count");
    for (rank, row) in results.iter().enumerate() {
        let title = idx.get_article_title(row.article_id).unwrap_or("");
        println!("{:<4} {:<8} {}", rank + 1, row.count, title);
    }

    Ok(())
}
