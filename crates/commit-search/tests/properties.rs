use commit_search::{CommitRecord, Ranking, is_fuzzy_match, match_commits, searchable_text};
use proptest::prelude::*;

fn arb_commit() -> impl Strategy<Value = CommitRecord> {
    ("[0-9a-f]{7,40}", "[a-zA-Z0-9 äöüÄÖÜßσΣ_:#-]{0,30}")
        .prop_map(|(hash, message)| CommitRecord::new(hash, message))
}

fn arb_commits() -> impl Strategy<Value = Vec<CommitRecord>> {
    prop::collection::vec(arb_commit(), 0..40)
}

fn arb_query() -> impl Strategy<Value = String> {
    "[a-fA-F0-9 äÖσΣx]{0,5}"
}

fn arb_ranking() -> impl Strategy<Value = Ranking> {
    prop_oneof![Just(Ranking::Scored), Just(Ranking::Ordered)]
}

/// Independent subsequence check: walk the folded text with `position`
fn contains_subsequence(text: &str, query: &str) -> bool {
    let text: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    let mut rest = &text[..];
    for q in query.chars().flat_map(char::to_lowercase) {
        match rest.iter().position(|&c| c == q) {
            Some(idx) => rest = &rest[idx + 1..],
            None => return false,
        }
    }
    true
}

proptest! {
    /// Property: every result contains the query as a case-insensitive subsequence
    #[test]
    fn prop_results_contain_query(commits in arb_commits(), query in arb_query(), ranking in arb_ranking()) {
        for record in match_commits(&commits, &query, ranking) {
            prop_assert!(contains_subsequence(&searchable_text(&record), &query));
        }
    }

    /// Property: the predicate agrees with the independent check
    #[test]
    fn prop_predicate_agrees(text in "[a-zA-Z äÄσΣ]{0,20}", query in arb_query()) {
        prop_assert_eq!(is_fuzzy_match(&text, &query), contains_subsequence(&text, &query));
    }

    /// Property: no matching record is dropped
    #[test]
    fn prop_all_matching_records_returned(commits in arb_commits(), query in arb_query(), ranking in arb_ranking()) {
        let expected = commits
            .iter()
            .filter(|c| contains_subsequence(&searchable_text(c), &query))
            .count();
        prop_assert_eq!(match_commits(&commits, &query, ranking).len(), expected);
    }

    /// Property: empty query returns everything in input order
    #[test]
    fn prop_empty_query_returns_all(commits in arb_commits(), ranking in arb_ranking()) {
        prop_assert_eq!(match_commits(&commits, "", ranking), commits);
    }

    /// Property: searching for a full hash always finds that commit
    #[test]
    fn prop_full_hash_is_found(commits in prop::collection::vec(arb_commit(), 1..40), pick in any::<prop::sample::Index>()) {
        let target = &commits[pick.index(commits.len())];
        let results = match_commits(&commits, &target.hash, Ranking::Scored);
        prop_assert!(results.contains(target));
    }

    /// Property: re-filtering a result with the same query changes nothing
    #[test]
    fn prop_refilter_is_idempotent(commits in arb_commits(), query in arb_query(), ranking in arb_ranking()) {
        let once = match_commits(&commits, &query, ranking);
        let twice = match_commits(&once, &query, ranking);
        prop_assert_eq!(twice, once);
    }

    /// Property: ordered ranking is a stable filter of the input
    #[test]
    fn prop_ordered_preserves_input_order(commits in arb_commits(), query in arb_query()) {
        let expected: Vec<CommitRecord> = commits
            .iter()
            .filter(|c| contains_subsequence(&searchable_text(c), &query))
            .cloned()
            .collect();
        prop_assert_eq!(match_commits(&commits, &query, Ranking::Ordered), expected);
    }
}
