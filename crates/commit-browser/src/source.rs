//! Commit history source
//!
//! Reads `(hash, message)` records, most recent first, by running `git log`
//! once at startup.

use std::{
    fmt::Debug,
    path::{Path, PathBuf},
    process::Command,
};

use commit_search::CommitRecord;
use log::{debug, warn};
use thiserror::Error;

/// Field separator in the `git log` format string (ASCII unit separator).
/// Cannot appear in a commit hash, so the first occurrence ends the hash.
const FIELD_SEPARATOR: char = '\u{1f}';

/// Reasons the commit history could not be retrieved
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`git log` exited with {status}: {stderr}")]
    Git { status: String, stderr: String },

    #[error("`git log` output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Anything that can supply commit history
pub trait CommitSource: Debug {
    /// Read all commits, most recent first
    fn commits(&self) -> Result<Vec<CommitRecord>, SourceError>;
}

/// Commit source backed by the `git` command line tool
#[derive(Debug, Clone)]
pub struct GitLog {
    git_command: String,
    repo: PathBuf,
    max_count: Option<usize>,
}

impl GitLog {
    pub fn new(git_command: impl Into<String>, repo: impl AsRef<Path>, max_count: Option<usize>) -> Self {
        Self {
            git_command: git_command.into(),
            repo: repo.as_ref().to_path_buf(),
            max_count,
        }
    }

    /// Arguments passed to git (without the program name)
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-C".to_string(),
            self.repo.to_string_lossy().to_string(),
            "-c".to_string(),
            "color.ui=never".to_string(),
            "log".to_string(),
            "--pretty=format:%H%x1f%s".to_string(),
        ];
        if let Some(max_count) = self.max_count {
            args.push(format!("--max-count={}", max_count));
        }
        args
    }
}

impl CommitSource for GitLog {
    fn commits(&self) -> Result<Vec<CommitRecord>, SourceError> {
        let args = self.args();
        debug!("Running {} {}", self.git_command, args.join(" "));

        let output = Command::new(&self.git_command)
            .args(&args)
            .env("NO_COLOR", "1")
            .output()
            .map_err(|source| SourceError::Spawn {
                command: self.git_command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::Git {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        let commits = parse_git_log(&stdout);
        debug!("Loaded {} commits from {}", commits.len(), self.repo.display());

        Ok(commits)
    }
}

/// In-memory commit source
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub commits: Vec<CommitRecord>,
}

#[cfg(test)]
impl CommitSource for StaticSource {
    fn commits(&self) -> Result<Vec<CommitRecord>, SourceError> {
        Ok(self.commits.clone())
    }
}

/// Parse `git log --pretty=format:%H%x1f%s` output
///
/// Each line is split once at the first separator. Lines without a separator
/// or with an empty hash are skipped.
pub fn parse_git_log(output: &str) -> Vec<CommitRecord> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| match line.split_once(FIELD_SEPARATOR) {
            Some((hash, message)) if !hash.trim().is_empty() => {
                Some(CommitRecord::new(hash.trim(), message))
            }
            _ => {
                warn!("Skipping malformed git log line: {:?}", line);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_git_log() {
        let output = "abc123\u{1f}Fix bug\ndef456\u{1f}Add feature";
        let commits = parse_git_log(output);
        assert_eq!(
            commits,
            vec![
                CommitRecord::new("abc123", "Fix bug"),
                CommitRecord::new("def456", "Add feature"),
            ]
        );
    }

    #[test]
    fn test_parse_splits_only_once() {
        let output = "abc123\u{1f}weird \u{1f} message | with pipes";
        let commits = parse_git_log(output);
        assert_eq!(commits[0].message, "weird \u{1f} message | with pipes");
    }

    #[test]
    fn test_parse_keeps_empty_message() {
        let commits = parse_git_log("abc123\u{1f}\n");
        assert_eq!(commits, vec![CommitRecord::new("abc123", "")]);
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let output = "abc123\u{1f}ok\nno separator here\n\u{1f}missing hash\n\ndef456\u{1f}also ok";
        let commits = parse_git_log(output);
        let hashes: Vec<&str> = commits.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec!["abc123", "def456"]);
    }

    #[test]
    fn test_parse_windows_line_endings() {
        let commits = parse_git_log("abc123\u{1f}Fix bug\r\ndef456\u{1f}Add\r\n");
        assert_eq!(commits[0].message, "Fix bug");
        assert_eq!(commits[1].message, "Add");
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_git_log("").is_empty());
    }

    #[test]
    fn test_git_args() {
        let source = GitLog::new("git", "/tmp/repo", Some(50));
        let args = source.args();
        assert_eq!(args[0], "-C");
        assert_eq!(args[1], "/tmp/repo");
        assert!(args.contains(&"log".to_string()));
        assert!(args.contains(&"--pretty=format:%H%x1f%s".to_string()));
        assert_eq!(args.last().unwrap(), "--max-count=50");
    }

    #[test]
    fn test_missing_git_binary_is_spawn_error() {
        let source = GitLog::new("definitely-not-a-git-binary-xyz", ".", None);
        let err = source.commits().unwrap_err();
        assert!(matches!(err, SourceError::Spawn { .. }));
        assert!(err.to_string().contains("definitely-not-a-git-binary-xyz"));
    }

    #[test]
    fn test_static_source() {
        let source = StaticSource {
            commits: vec![CommitRecord::new("abc123", "Fix bug")],
        };
        assert_eq!(source.commits().unwrap().len(), 1);
    }
}
