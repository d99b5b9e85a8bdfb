/// Effect system for Redux architecture
/// Reducers return (State, Vec<Effect>) where Effects describe side effects to perform
/// The update() function executes these effects
use anyhow::Result;
use log::{debug, error};

use crate::{App, actions::Action};

/// Effects that reducers can request to be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read commit history from the configured source
    LoadCommits,

    /// Put a commit hash on the system clipboard
    CopyToClipboard { hash: String },
}

/// Execute an effect and return follow-up actions to dispatch
///
/// Failures of the effect itself are reported back as actions so the reducers
/// can show them; an `Err` here means the app cannot continue.
pub fn execute_effect(app: &mut App, effect: &Effect) -> Result<Vec<Action>> {
    let mut follow_up_actions = Vec::new();

    match effect {
        Effect::LoadCommits => {
            let result = app.source.commits().map_err(|err| {
                error!("Failed to load commits: {}", err);
                err.to_string()
            });
            if let Ok(commits) = &result {
                debug!("Commit source returned {} records", commits.len());
            }
            follow_up_actions.push(Action::CommitsLoaded(result));
        }

        Effect::CopyToClipboard { hash } => {
            let result = match app.clipboard.copy(hash) {
                Ok(()) => {
                    debug!("Copied {} to clipboard", hash);
                    Ok(hash.clone())
                }
                Err(err) => {
                    error!("Failed to copy {} to clipboard: {}", hash, err);
                    Err(err.to_string())
                }
            };
            follow_up_actions.push(Action::ClipboardComplete(result));
        }
    }

    Ok(follow_up_actions)
}
