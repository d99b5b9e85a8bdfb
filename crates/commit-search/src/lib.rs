//! Fuzzy commit search for the commit browser
//!
//! This crate provides the matching core used to filter commit history
//! interactively:
//! - A plain [`CommitRecord`] with free functions for derived display/search text
//! - Case-insensitive subsequence matching ([`is_fuzzy_match`])
//! - Two explicit ranking policies ([`Ranking::Scored`] powered by nucleo-matcher,
//!   and [`Ranking::Ordered`] which keeps history order)
//!
//! # Example
//!
//! ```rust
//! use commit_search::{match_commits, CommitRecord, Ranking};
//!
//! let commits = vec![
//!     CommitRecord::new("abc123", "Fix bug"),
//!     CommitRecord::new("def456", "Add feature"),
//! ];
//!
//! let found = match_commits(&commits, "fb", Ranking::Scored);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].hash, "abc123");
//! ```

mod record;
mod search;

pub use record::{CommitRecord, description, searchable_text, short_hash, title};
pub use search::{CommitMatch, Ranking, is_fuzzy_match, match_commits, rank_commits};
