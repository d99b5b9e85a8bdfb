use commit_search::short_hash;
use log::debug;

use crate::{
    actions::Action,
    config::Config,
    effect::Effect,
    state::*,
    view_models::commit_list::list_height,
};

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns (new state, effects to perform)
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    // Commits and status read the search input before the UI reducer clears it
    let (commits_state, commits_effects) =
        commits_reducer(state.commits, action, &state.ui, &state.config);
    state.commits = commits_state;
    effects.extend(commits_effects);

    let (status_state, status_effects) =
        status_reducer(state.status, action, &state.ui, &state.commits, &state.config);
    state.status = status_state;
    effects.extend(status_effects);

    let (ui_state, ui_effects) = ui_reducer(state.ui, action, &state.commits);
    state.ui = ui_state;
    effects.extend(ui_effects);

    let (debug_console_state, debug_console_effects) =
        debug_console_reducer(state.debug_console, action);
    state.debug_console = debug_console_state;
    effects.extend(debug_console_effects);

    (state, effects)
}

/// UI state reducer - search input, blink, quit and commit choice
fn ui_reducer(mut state: UiState, action: &Action, commits: &CommitsState) -> (UiState, Vec<Effect>) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Escape => {
            if state.search_input.is_empty() {
                state.should_quit = true;
            } else {
                state.search_input.clear();
            }
        }
        Action::SearchInput(c) => {
            state.search_input.push(*c);
            state.cursor_visible = true;
        }
        Action::SearchBackspace => {
            state.search_input.pop();
            state.cursor_visible = true;
        }
        Action::Submit => {
            if state.search_input.is_empty() {
                if let Some(commit) = commits.list.selected() {
                    state.chosen_commit = Some(commit.clone());
                }
            } else {
                // Query was consumed by the commits reducer
                state.search_input.clear();
            }
        }
        Action::Resize(_, height) => {
            state.list_viewport_height = list_height(*height);
        }
        Action::Tick => {
            state.cursor_visible = !state.cursor_visible;
        }
        _ => {}
    }

    (state, vec![])
}

/// Commit list reducer
/// ALL search and navigation logic lives here - reducer returns effects to be performed
fn commits_reducer(
    mut state: CommitsState,
    action: &Action,
    ui: &UiState,
    config: &Config,
) -> (CommitsState, Vec<Effect>) {
    let mut effects = vec![];
    let page = ui.list_viewport_height.max(1) as isize;

    match action {
        Action::Bootstrap => {
            state.loading_state = LoadingState::Loading;
            effects.push(Effect::LoadCommits);
        }
        Action::CommitsLoaded(Ok(commits)) => {
            state.list = CommitListState::new(commits.clone());
            state.loading_state = LoadingState::Loaded;
            state.applied_query = None;
        }
        Action::CommitsLoaded(Err(err)) => {
            state.list.reset(Vec::new());
            state.loading_state = LoadingState::Error(err.clone());
            state.applied_query = None;
        }
        Action::Submit if !ui.search_input.is_empty() => {
            state.list.filter(&ui.search_input, config.ranking);
            debug!(
                "Search {:?} ({}) matched {} of {} commits",
                ui.search_input,
                config.ranking,
                state.list.visible().len(),
                state.list.total()
            );
            state.applied_query = Some(ui.search_input.clone());
        }
        Action::ResetFilter => {
            state.list.filter("", config.ranking);
            state.applied_query = None;
        }
        Action::NavigateUp => state.list.move_cursor(-1),
        Action::NavigateDown => state.list.move_cursor(1),
        Action::PageUp => state.list.move_cursor(-page),
        Action::PageDown => state.list.move_cursor(page),
        Action::NavigateFirst => state.list.select_first(),
        Action::NavigateLast => state.list.select_last(),
        Action::CopySelectedHash => {
            if let Some(commit) = state.list.selected() {
                effects.push(Effect::CopyToClipboard {
                    hash: commit.hash.clone(),
                });
            }
        }
        _ => {}
    }

    (state, effects)
}

/// Status line reducer - transient messages
fn status_reducer(
    mut state: StatusState,
    action: &Action,
    ui: &UiState,
    commits: &CommitsState,
    config: &Config,
) -> (StatusState, Vec<Effect>) {
    match action {
        Action::Submit if ui.search_input.is_empty() => {
            if let Some(commit) = commits.list.selected() {
                state.status = Some(TaskStatus::new(
                    format!(
                        "Selected commit: {}",
                        short_hash(commit, config.short_hash_len)
                    ),
                    TaskStatusType::Success,
                ));
            }
        }
        Action::CommitsLoaded(Ok(commits)) if commits.is_empty() => {
            state.status = Some(TaskStatus::new("No commits found", TaskStatusType::Info));
        }
        Action::CommitsLoaded(Ok(commits)) => {
            state.status = Some(TaskStatus::new(
                format!("Loaded {} commits", commits.len()),
                TaskStatusType::Info,
            ));
        }
        Action::ClipboardComplete(Ok(hash)) => {
            let short: String = hash.chars().take(config.short_hash_len).collect();
            state.status = Some(TaskStatus::new(
                format!("Copied {} to clipboard", short),
                TaskStatusType::Success,
            ));
        }
        Action::ClipboardComplete(Err(err)) => {
            state.status = Some(TaskStatus::new(
                format!("Error copying to clipboard: {}", err),
                TaskStatusType::Error,
            ));
        }
        Action::CopySelectedHash if commits.list.selected().is_none() => {
            state.status = Some(TaskStatus::new(
                "No commit selected",
                TaskStatusType::Warning,
            ));
        }
        Action::Tick => {
            if let Some(status) = state.status.as_mut() {
                status.ticks_remaining = status.ticks_remaining.saturating_sub(1);
                if status.ticks_remaining == 0 {
                    state.status = None;
                }
            }
        }
        _ => {}
    }

    (state, vec![])
}

/// Debug console reducer
fn debug_console_reducer(
    mut state: DebugConsoleState,
    action: &Action,
) -> (DebugConsoleState, Vec<Effect>) {
    match action {
        Action::ToggleDebugConsole => {
            state.is_open = !state.is_open;
            if state.is_open {
                state.scroll_offset = 0;
                state.auto_scroll = true;
            }
        }
        Action::Resize(_, height) => {
            state.viewport_height = state.viewport_for(*height);
            state.scroll_offset = state.scroll_offset.min(state.max_scroll_offset());
        }
        Action::ScrollDebugConsoleUp => {
            state.scroll_offset = state.effective_offset().saturating_sub(1);
            state.auto_scroll = false;
        }
        Action::ScrollDebugConsoleDown => {
            state.scroll_offset = (state.effective_offset() + 1).min(state.max_scroll_offset());
            state.auto_scroll = false;
        }
        Action::ToggleDebugAutoScroll => {
            state.auto_scroll = !state.auto_scroll;
        }
        Action::ClearDebugLogs => {
            if let Ok(mut logs) = state.logs.lock() {
                logs.clear();
            }
            state.scroll_offset = 0;
        }
        _ => {}
    }

    (state, vec![])
}
