//! End-to-end scenarios exercising the public `Index` API as a whole.

use newsdex::{Index, RegisterOutcome};

fn registered_id(outcome: RegisterOutcome) -> usize {
    match outcome {
        RegisterOutcome::Registered(id) => id,
        RegisterOutcome::Rejected(reason) => panic!("unexpected rejection: {reason}"),
    }
}

#[test]
fn empty_index_returns_no_matches() {
    let idx = Index::new(100);
    assert!(idx.query_top_n("anything", 5).is_empty());
    assert_eq!(idx.article_count(), 0);
    assert_eq!(idx.term_count(), 0);
}

#[test]
fn single_article_simple_terms() {
    let mut idx = Index::new(100);
    let id = registered_id(idx.register_article("http://a/1", "Hi").unwrap());

    idx.add_token(id, "Cat");
    idx.add_token(id, "cat");
    idx.add_token(id, "Dog");

    let cat_results = idx.query_top_n("CAT", 10);
    assert_eq!(cat_results.len(), 1);
    assert_eq!(cat_results[0].article_id, 0);
    assert_eq!(cat_results[0].count, 2);

    let dog_results = idx.query_top_n("dog", 10);
    assert_eq!(dog_results.len(), 1);
    assert_eq!(dog_results[0].count, 1);
}

#[test]
fn ranking_and_tie_break_across_three_articles() {
    let mut idx = Index::new(100);
    let a = registered_id(idx.register_article("http://a/1", "A").unwrap());
    let b = registered_id(idx.register_article("http://a/2", "B").unwrap());
    let c = registered_id(idx.register_article("http://a/3", "C").unwrap());

    idx.add_token(a, "x");
    for _ in 0..3 {
        idx.add_token(b, "x");
    }
    for _ in 0..3 {
        idx.add_token(c, "x");
    }

    let results = idx.query_top_n("x", 10);
    let observed: Vec<(usize, u32)> = results.iter().map(|r| (r.article_id, r.count)).collect();
    assert_eq!(observed, vec![(b, 3), (c, 3), (a, 1)]);
}

#[test]
fn stop_word_filtering() {
    let mut idx = Index::new(100);
    idx.load_stop_words(
        ["the", "and"]
            .iter()
            .map(|w| Ok::<_, std::io::Error>(w.to_string())),
    )
    .unwrap();

    let id = registered_id(idx.register_article("http://a/1", "T").unwrap());
    idx.add_token(id, "The");
    idx.add_token(id, "News");
    idx.add_token(id, "and");

    assert!(idx.query_top_n("the", 5).is_empty());
    let news = idx.query_top_n("news", 5);
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].count, 1);
}

#[test]
fn url_dedup_rejects_case_insensitive_repeat() {
    let mut idx = Index::new(100);
    assert_eq!(
        idx.register_article("http://a/1", "T1").unwrap(),
        RegisterOutcome::Registered(0)
    );
    let outcome = idx.register_article("HTTP://A/1", "T2").unwrap();
    assert!(matches!(
        outcome,
        RegisterOutcome::Rejected(newsdex::RejectReason::DuplicateUrl)
    ));
    assert_eq!(
        idx.register_article("http://a/2", "other").unwrap(),
        RegisterOutcome::Registered(1)
    );
}

#[test]
fn title_server_dedup_allows_different_server() {
    let mut idx = Index::new(100);
    assert_eq!(
        idx.register_article("http://a/1", "Breaking").unwrap(),
        RegisterOutcome::Registered(0)
    );
    let outcome = idx.register_article("http://a/2", "Breaking").unwrap();
    assert!(matches!(
        outcome,
        RegisterOutcome::Rejected(newsdex::RejectReason::DuplicateTitleServer)
    ));
    assert_eq!(
        idx.register_article("http://b/2", "Breaking").unwrap(),
        RegisterOutcome::Registered(1)
    );
}

#[test]
fn top_n_truncation() {
    let mut idx = Index::new(100);
    let counts = [(10usize, 5u32), (11, 4), (12, 3), (13, 2), (14, 1)];
    for &(offset, count) in &counts {
        let id = registered_id(
            idx.register_article(&format!("http://a/{offset}"), "t")
                .unwrap(),
        );
        for _ in 0..count {
            idx.add_token(id, "q");
        }
    }

    let results = idx.query_top_n("q", 3);
    let observed: Vec<(usize, u32)> = results.iter().map(|r| (r.article_id, r.count)).collect();
    assert_eq!(observed, vec![(0, 5), (1, 4), (2, 3)]);
}

#[test]
fn query_determinism_across_identical_ingestion_histories() {
    let build = || {
        let mut idx = Index::new(64);
        let id = registered_id(idx.register_article("http://a/1", "T").unwrap());
        for tok in ["alpha", "beta", "alpha", "gamma", "beta", "alpha"] {
            idx.add_token(id, tok);
        }
        idx.query_top_n("alpha", 10)
    };
    assert_eq!(build(), build());
}
