//! Fuzzy search functionality for commits

use std::fmt;
use std::str::FromStr;

use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Deserialize;

use crate::record::{CommitRecord, searchable_text};

/// Score boost when the hash starts with the query (abbreviated SHA lookup)
const HASH_PREFIX_BOOST: u16 = 10000;
/// Score boost when the message starts with the query
const MESSAGE_PREFIX_BOOST: u16 = 5000;
/// Score boost when the message contains the query contiguously
const MESSAGE_CONTAINS_BOOST: u16 = 1000;

/// How matching commits are ordered
///
/// Both policies use the same membership test ([`is_fuzzy_match`]); they only
/// differ in the order of the results. A session picks one and sticks to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ranking {
    /// Best match first, scored by nucleo-matcher plus prefix boosts.
    /// Ties keep history order.
    #[default]
    Scored,
    /// Keep history order, no re-ranking
    Ordered,
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ranking::Scored => write!(f, "scored"),
            Ranking::Ordered => write!(f, "ordered"),
        }
    }
}

impl FromStr for Ranking {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scored" => Ok(Ranking::Scored),
            "ordered" => Ok(Ranking::Ordered),
            other => Err(format!(
                "unknown ranking '{}' (expected 'scored' or 'ordered')",
                other
            )),
        }
    }
}

/// A commit that matched a query, with its rank key (higher is better)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMatch {
    pub record: CommitRecord,
    pub score: u16,
}

/// Case-insensitive subsequence test
///
/// Returns true if every char of `query` appears in `text` in order, not
/// necessarily contiguous. Both sides are compared as lowercase-folded chars,
/// so multi-byte characters compare correctly. An empty query always matches.
pub fn is_fuzzy_match(text: &str, query: &str) -> bool {
    let mut needle = query.chars().flat_map(char::to_lowercase).peekable();

    for c in text.chars().flat_map(char::to_lowercase) {
        match needle.peek() {
            None => return true,
            Some(&n) if n == c => {
                needle.next();
            }
            Some(_) => {}
        }
    }

    needle.peek().is_none()
}

/// Filter and rank commits against a search query
///
/// Returns only matching commits, best match first for [`Ranking::Scored`]
/// and in input order for [`Ranking::Ordered`]. An empty query returns all
/// commits in input order with score 0.
pub fn rank_commits(records: &[CommitRecord], query: &str, ranking: Ranking) -> Vec<CommitMatch> {
    if query.is_empty() {
        return records
            .iter()
            .map(|record| CommitMatch {
                record: record.clone(),
                score: 0,
            })
            .collect();
    }

    let candidates = records
        .iter()
        .filter(|record| is_fuzzy_match(&searchable_text(record), query));

    match ranking {
        Ranking::Ordered => candidates
            .map(|record| CommitMatch {
                record: record.clone(),
                score: 0,
            })
            .collect(),
        Ranking::Scored => {
            let mut scorer = Scorer::new(query);
            let mut results: Vec<CommitMatch> = candidates
                .map(|record| CommitMatch {
                    record: record.clone(),
                    score: scorer.score(record),
                })
                .collect();

            // Stable sort: equal scores keep history order
            results.sort_by(|a, b| b.score.cmp(&a.score));
            results
        }
    }
}

/// Filter and rank commits, dropping the scores
pub fn match_commits(records: &[CommitRecord], query: &str, ranking: Ranking) -> Vec<CommitRecord> {
    rank_commits(records, query, ranking)
        .into_iter()
        .map(|m| m.record)
        .collect()
}

/// Reusable nucleo matcher and UTF-32 buffers for one search
struct Scorer {
    matcher: Matcher,
    query_lower: String,
    haystack_buf: Vec<char>,
    needle_buf: Vec<char>,
}

impl Scorer {
    fn new(query: &str) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            query_lower: query.to_lowercase(),
            haystack_buf: Vec::new(),
            needle_buf: Vec::new(),
        }
    }

    fn score(&mut self, record: &CommitRecord) -> u16 {
        let haystack = searchable_text(record);

        self.haystack_buf.clear();
        self.needle_buf.clear();

        let haystack_str = Utf32Str::new(&haystack, &mut self.haystack_buf);
        let needle_str = Utf32Str::new(&self.query_lower, &mut self.needle_buf);

        // nucleo normalizes some chars the subsequence test does not, so a
        // record that passed the test may still be unscored here
        let mut score = self
            .matcher
            .fuzzy_match(haystack_str, needle_str)
            .unwrap_or(0);

        let hash_lower = record.hash.to_lowercase();
        let message_lower = record.message.to_lowercase();

        if hash_lower.starts_with(&self.query_lower) {
            score = score.saturating_add(HASH_PREFIX_BOOST);
        } else if message_lower.starts_with(&self.query_lower) {
            score = score.saturating_add(MESSAGE_PREFIX_BOOST);
        } else if message_lower.contains(&self.query_lower) {
            score = score.saturating_add(MESSAGE_CONTAINS_BOOST);
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_commits() -> Vec<CommitRecord> {
        vec![
            CommitRecord::new("abc123", "Fix bug"),
            CommitRecord::new("def456", "Add feature"),
        ]
    }

    #[test]
    fn test_subsequence_match() {
        assert!(is_fuzzy_match("abc123 Fix bug", "fb"));
        assert!(is_fuzzy_match("abc123 Fix bug", "a1fb"));
        assert!(!is_fuzzy_match("abc123 Fix bug", "bf"));
        assert!(!is_fuzzy_match("abc123 Fix bug", "xyz"));
    }

    #[test]
    fn test_empty_query_always_matches() {
        assert!(is_fuzzy_match("", ""));
        assert!(is_fuzzy_match("anything", ""));
    }

    #[test]
    fn test_query_longer_than_text() {
        assert!(!is_fuzzy_match("ab", "abc"));
        assert!(!is_fuzzy_match("", "a"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_fuzzy_match("Fix Bug", "FIX"));
        assert!(is_fuzzy_match("FIX BUG", "fix"));
    }

    #[test]
    fn test_unicode_case_folding() {
        assert!(is_fuzzy_match("Ärger mit Öl", "äö"));
        assert!(is_fuzzy_match("ΣΟΦΙΑ", "σφ"));
        assert!(is_fuzzy_match("日本語のコミット", "日コ"));
        assert!(!is_fuzzy_match("日本語", "語日"));
    }

    #[test]
    fn test_empty_query_returns_all() {
        let commits = create_test_commits();
        let results = rank_commits(&commits, "", Ranking::Scored);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].record.hash, "abc123");
        assert_eq!(results[1].record.hash, "def456");
        assert!(results.iter().all(|m| m.score == 0));
    }

    #[test]
    fn test_fuzzy_filter_scenario() {
        let commits = create_test_commits();
        for ranking in [Ranking::Scored, Ranking::Ordered] {
            let results = match_commits(&commits, "fb", ranking);
            assert_eq!(results, vec![CommitRecord::new("abc123", "Fix bug")]);
        }
    }

    #[test]
    fn test_no_match() {
        let commits = create_test_commits();
        let results = match_commits(&commits, "xyz", Ranking::Scored);
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_record_set() {
        let results = match_commits(&[], "anything", Ranking::Scored);
        assert!(results.is_empty());
        let results = match_commits(&[], "", Ranking::Ordered);
        assert!(results.is_empty());
    }

    #[test]
    fn test_ordered_keeps_history_order() {
        let commits = vec![
            CommitRecord::new("111", "refactor parser"),
            CommitRecord::new("222", "parser"),
            CommitRecord::new("333", "unrelated"),
            CommitRecord::new("444", "fix the parser tests"),
        ];

        let results = match_commits(&commits, "parser", Ranking::Ordered);
        let hashes: Vec<&str> = results.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec!["111", "222", "444"]);
    }

    #[test]
    fn test_scored_prefers_message_prefix() {
        let commits = vec![
            CommitRecord::new("111", "refactor parser"),
            CommitRecord::new("222", "parser cleanup"),
            CommitRecord::new("333", "unrelated"),
        ];

        let results = rank_commits(&commits, "parser", Ranking::Scored);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].record.hash, "222");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_scored_prefers_hash_prefix() {
        let commits = vec![
            CommitRecord::new("0f1e2d", "bump deadbeef fixture"),
            CommitRecord::new("deadbeef00", "Initial commit"),
        ];

        let results = rank_commits(&commits, "deadbeef", Ranking::Scored);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].record.hash, "deadbeef00");
        assert!(results[0].score > HASH_PREFIX_BOOST);
    }

    #[test]
    fn test_scored_ties_keep_history_order() {
        let commits = vec![
            CommitRecord::new("aaa", "same message"),
            CommitRecord::new("bbb", "same message"),
            CommitRecord::new("ccc", "same message"),
        ];

        let results = match_commits(&commits, "same", Ranking::Scored);
        let hashes: Vec<&str> = results.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn test_full_hash_query_matches_record() {
        let commits = vec![
            CommitRecord::new("9fceb02d0ae598e95dc970b74767f19372d61af8", "Initial commit"),
            CommitRecord::new("e83c5163316f89bfbde7d9ab23ca2e25604af290", "Add README"),
        ];

        let results = match_commits(
            &commits,
            "e83c5163316f89bfbde7d9ab23ca2e25604af290",
            Ranking::Scored,
        );
        assert_eq!(results[0].hash, "e83c5163316f89bfbde7d9ab23ca2e25604af290");
    }

    #[test]
    fn test_ranking_from_str() {
        assert_eq!("scored".parse::<Ranking>(), Ok(Ranking::Scored));
        assert_eq!("Ordered".parse::<Ranking>(), Ok(Ranking::Ordered));
        assert!("best".parse::<Ranking>().is_err());
        assert_eq!(Ranking::default(), Ranking::Scored);
        assert_eq!(Ranking::Ordered.to_string(), "ordered");
    }

    #[test]
    fn test_whitespace_query_goes_through_predicate() {
        let commits = vec![
            CommitRecord::new("abc123", "Fix bug"),
            CommitRecord::new("def456", ""),
        ];

        // "def456 " holds a single space, "abc123 Fix bug" holds two
        let results = match_commits(&commits, "  ", Ranking::Ordered);
        assert_eq!(results, vec![CommitRecord::new("abc123", "Fix bug")]);

        let results = match_commits(&commits, " ", Ranking::Scored);
        assert_eq!(results.len(), 2);
    }
}
