use std::path::PathBuf;

use clap::{ArgAction, Parser};
use commit_search::Ranking;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Browse and fuzzy-search git commit history in the terminal.",
    after_help = crate::shortcuts::help_text()
)]
pub struct Cli {
    /// Repository to read history from.
    #[arg(value_name = "PATH", default_value = ".")]
    pub repo: PathBuf,

    /// Only load the most recent N commits.
    #[arg(long = "max-count", short = 'n', value_name = "N")]
    pub max_count: Option<usize>,

    /// Result ordering: scored (best match first) or ordered (history order).
    #[arg(long, value_name = "RANKING")]
    pub ranking: Option<Ranking>,

    /// Do not print the selected commit hash on exit.
    #[arg(long = "no-print-selection", action = ArgAction::SetTrue)]
    pub no_print_selection: bool,

    /// Path to the TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}
