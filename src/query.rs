//! Query engine: projects a term's postings into ranked result rows under a
//! strict total tie-break order.

use crate::dictionary::TermDictionary;
use crate::normalize::normalize;

/// One ranked result row. Carries only an id and a count — no strings — so
/// results are freely copyable and outlive the index they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow {
    pub article_id: usize,
    pub count: u32,
}

/// Strict total order over result rows: higher `count` ranks first; ties
/// break by lower `article_id`. Total because `article_id` is unique within
/// a term's postings, so no two rows ever compare equal.
fn rank_order(a: &ResultRow, b: &ResultRow) -> std::cmp::Ordering {
    b.count.cmp(&a.count).then(a.article_id.cmp(&b.article_id))
}

/// Empty `term` or non-positive `n` yields an empty sequence; an absent term
/// (including any stop word, since stop words never get a `TermEntry`)
/// yields an empty sequence. Otherwise: copy every posting into a result
/// row, sort by `rank_order`, and truncate to `n`.
pub(crate) fn query_top_n(terms: &TermDictionary, term: &str, n: i64) -> Vec<ResultRow> {
    if term.is_empty() || n <= 0 {
        return Vec::new();
    }

    let word = normalize(term);
    let Some(entry) = terms.get(&word) else {
        return Vec::new();
    };

    let mut rows: Vec<ResultRow> = entry
        .postings
        .iter()
        .map(|p| ResultRow {
            article_id: p.article_id,
            count: p.count,
        })
        .collect();
    rows.sort_unstable_by(rank_order);
    rows.truncate(n as usize);
    rows
}
