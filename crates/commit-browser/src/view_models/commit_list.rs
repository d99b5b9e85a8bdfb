use commit_search::{CommitRecord, description, short_hash};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    shortcuts::footer_hints,
    state::{AppState, LoadingState, TaskStatusType},
    theme::Theme,
};

/// Smallest terminal the layout is drawn in
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 6;

/// Rows used by everything but the list: title, search line, status, footer
const CHROME_ROWS: u16 = 4;

const SEARCH_PROMPT: &str = "> ";
const SEARCH_PLACEHOLDER: &str = "Search commits...";
const CURSOR: &str = "█";
const ELLIPSIS: char = '…';

/// Rows available to the commit list at the given terminal height
pub fn list_height(terminal_height: u16) -> usize {
    terminal_height.saturating_sub(CHROME_ROWS) as usize
}

/// View model for the commit browser screen - all presentation data pre-computed
#[derive(Debug, Clone, PartialEq)]
pub struct CommitListViewModel {
    /// Terminal is below MIN_WIDTH x MIN_HEIGHT; draw only `too_small_message`
    pub too_small: bool,
    pub too_small_message: String,
    /// Pre-formatted title: " Commits (3/120) "
    pub title: String,
    pub search: SearchBoxViewModel,
    pub body: ListBody,
    /// Bottom status line (transient message or list summary)
    pub status: StatusLine,
    /// (key, label) pairs for the footer
    pub footer: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchBoxViewModel {
    pub prompt: String,
    /// Typed query, or the placeholder when nothing is typed
    pub text: String,
    pub is_placeholder: bool,
    /// Blinking cursor glyph, empty in the "off" phase
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    Loading,
    Error(String),
    /// Nothing to show, with the reason
    Empty(String),
    Rows(Vec<CommitRow>),
}

/// A single row in the commit list
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRow {
    pub is_selected: bool,
    /// Indentation plus selection marker, e.g. "  > " or "    "
    pub indicator: String,
    pub hash: String,
    /// Message, pre-truncated to the remaining width
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub message: String,
    /// None for the plain list summary
    pub status_type: Option<TaskStatusType>,
}

impl CommitListViewModel {
    /// Build view model from app state for a terminal of `width` x `height`
    pub fn from_state(state: &AppState, width: u16, height: u16) -> Self {
        let too_small = width < MIN_WIDTH || height < MIN_HEIGHT;
        let too_small_message = truncate(
            &format!("Terminal too small ({}x{})", width, height),
            width as usize,
        );

        let list = &state.commits.list;
        let title = format!(" Commits ({}/{}) ", list.visible().len(), list.total());

        let body = match &state.commits.loading_state {
            LoadingState::Idle | LoadingState::Loading => ListBody::Loading,
            LoadingState::Error(err) => ListBody::Error(format!("Could not read commits: {}", err)),
            LoadingState::Loaded if list.total() == 0 => {
                ListBody::Empty("No commits in this repository".to_string())
            }
            LoadingState::Loaded if list.visible().is_empty() => {
                ListBody::Empty("No matching commits".to_string())
            }
            LoadingState::Loaded => ListBody::Rows(build_rows(
                list.visible(),
                list.cursor(),
                list_height(height),
                width as usize,
                state.config.short_hash_len,
                &state.theme,
            )),
        };

        let status = match &state.status.status {
            Some(status) => StatusLine {
                message: status.message.clone(),
                status_type: Some(status.status_type.clone()),
            },
            None => StatusLine {
                message: summary(state),
                status_type: None,
            },
        };

        Self {
            too_small,
            too_small_message,
            title,
            search: search_box(&state.ui.search_input, state.ui.cursor_visible),
            body,
            status: StatusLine {
                message: truncate(&status.message, width as usize),
                ..status
            },
            footer: footer_hints()
                .into_iter()
                .map(|(key, label)| (key.to_string(), label.to_string()))
                .collect(),
        }
    }
}

fn search_box(input: &str, cursor_visible: bool) -> SearchBoxViewModel {
    let is_placeholder = input.is_empty();
    SearchBoxViewModel {
        prompt: SEARCH_PROMPT.to_string(),
        text: if is_placeholder {
            SEARCH_PLACEHOLDER.to_string()
        } else {
            input.to_string()
        },
        is_placeholder,
        cursor: if cursor_visible {
            CURSOR.to_string()
        } else {
            " ".to_string()
        },
    }
}

fn summary(state: &AppState) -> String {
    let list = &state.commits.list;
    match &state.commits.applied_query {
        Some(query) => format!(
            "{} of {} commits match {:?} ({})",
            list.visible().len(),
            list.total(),
            query,
            state.config.ranking
        ),
        None => format!("{} commits", list.total()),
    }
}

/// Offset of the first visible row so the cursor stays in view,
/// kept centred except near the ends of the list
pub fn scroll_offset(total: usize, selected: usize, visible_height: usize) -> usize {
    if total == 0 || selected < visible_height / 2 {
        0
    } else if selected >= total.saturating_sub(visible_height / 2) {
        total.saturating_sub(visible_height)
    } else {
        selected.saturating_sub(visible_height / 2)
    }
}

fn build_rows(
    records: &[CommitRecord],
    cursor: Option<usize>,
    visible_height: usize,
    width: usize,
    short_hash_len: usize,
    theme: &Theme,
) -> Vec<CommitRow> {
    let selected = cursor.unwrap_or(0);
    let offset = scroll_offset(records.len(), selected, visible_height);

    records
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_height)
        .map(|(i, record)| {
            let is_selected = cursor == Some(i);
            let indicator = if is_selected {
                format!("{}> ", " ".repeat(theme.selected_indent as usize))
            } else {
                " ".repeat(theme.item_indent as usize)
            };

            let hash = short_hash(record, short_hash_len).to_string();
            let used = indicator.width() + hash.width() + 1;
            let message = truncate(description(record), width.saturating_sub(used));

            CommitRow {
                is_selected,
                indicator,
                hash,
                message,
            }
        })
        .collect()
}

/// Cut `text` to at most `max` terminal cells on a char boundary, marking the cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}
