use commit_search::Ranking;
use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::cli::Cli;

const CONFIG_FILE: &str = "commit-browser.toml";

/// Application configuration loaded from commit-browser.toml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_git_command")]
    pub git_command: String,
    /// Limit on loaded commits (None = whole history)
    #[serde(default)]
    pub max_count: Option<usize>,
    #[serde(default)]
    pub ranking: Ranking,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_short_hash_len")]
    pub short_hash_len: usize,
    #[serde(default = "default_print_selection")]
    pub print_selection: bool,
    /// Repository path, only settable from the command line
    #[serde(skip, default = "default_repo")]
    pub repo: PathBuf,
}

fn default_git_command() -> String {
    "git".to_string()
}

fn default_tick_rate_ms() -> u64 {
    500 // Search cursor blink interval
}

fn default_short_hash_len() -> usize {
    8
}

fn default_print_selection() -> bool {
    true
}

fn default_repo() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_command: default_git_command(),
            max_count: None,
            ranking: Ranking::default(),
            tick_rate_ms: default_tick_rate_ms(),
            short_hash_len: default_short_hash_len(),
            print_selection: default_print_selection(),
            repo: default_repo(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, else CWD, then home directory, or use defaults
    pub fn load(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            if let Some(config) = Self::read(path) {
                return config;
            }
            log::warn!("Config file {} not usable, using defaults", path.display());
            return Self::default();
        }

        // Try current directory first
        if let Some(config) = Self::read(Path::new(CONFIG_FILE)) {
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Some(config) = Self::read(&home_config) {
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    fn read(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match Self::parse(&content) {
            Ok(config) => {
                log::debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(err) => {
                log::warn!("Ignoring invalid config {}: {}", path.display(), err);
                None
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Command-line flags win over the config file
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        self.repo = cli.repo.clone();
        if cli.max_count.is_some() {
            self.max_count = cli.max_count;
        }
        if let Some(ranking) = cli.ranking {
            self.ranking = ranking;
        }
        if cli.no_print_selection {
            self.print_selection = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config = Config::parse(
            r#"
            git_command = "/usr/local/bin/git"
            max_count = 1000
            ranking = "ordered"
            tick_rate_ms = 250
            short_hash_len = 12
            print_selection = false
            "#,
        )
        .unwrap();

        assert_eq!(config.git_command, "/usr/local/bin/git");
        assert_eq!(config.max_count, Some(1000));
        assert_eq!(config.ranking, Ranking::Ordered);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.short_hash_len, 12);
        assert!(!config.print_selection);
    }

    #[test]
    fn test_invalid_ranking_is_an_error() {
        assert!(Config::parse(r#"ranking = "fastest""#).is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = Config::parse("max_count = 10\nranking = \"ordered\"").unwrap();
        let cli = Cli::try_parse_from([
            "commit-browser",
            "/tmp/repo",
            "--max-count",
            "20",
            "--ranking",
            "scored",
            "--no-print-selection",
        ])
        .unwrap();

        let config = config.with_cli(&cli);
        assert_eq!(config.repo, PathBuf::from("/tmp/repo"));
        assert_eq!(config.max_count, Some(20));
        assert_eq!(config.ranking, Ranking::Scored);
        assert!(!config.print_selection);
    }

    #[test]
    fn test_cli_without_flags_keeps_file_values() {
        let config = Config::parse("max_count = 10").unwrap();
        let cli = Cli::try_parse_from(["commit-browser"]).unwrap();

        let config = config.with_cli(&cli);
        assert_eq!(config.max_count, Some(10));
        assert_eq!(config.ranking, Ranking::Scored);
        assert!(config.print_selection);
    }
}
