//! Commit record and the text derived from it

/// A single commit from version-control history
///
/// Records are created in bulk when history is read and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full commit hash (non-empty, unique)
    pub hash: String,

    /// Commit subject line (may be empty)
    pub message: String,
}

impl CommitRecord {
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
        }
    }
}

/// Text a search query is matched against: hash and message joined by a space
pub fn searchable_text(record: &CommitRecord) -> String {
    format!("{} {}", record.hash, record.message)
}

/// List title for a commit (the hash)
pub fn title(record: &CommitRecord) -> &str {
    &record.hash
}

/// List description for a commit (the message)
pub fn description(record: &CommitRecord) -> &str {
    &record.message
}

/// Abbreviated hash, cut on a char boundary
pub fn short_hash(record: &CommitRecord, len: usize) -> &str {
    let hash = title(record);
    match hash.char_indices().nth(len) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}
