use commit_search::{CommitRecord, Ranking, match_commits};

use crate::{config::Config, log_capture::LogBuffer, theme::Theme};

/// Root application state following Redux pattern
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub commits: CommitsState,
    pub status: StatusState,
    pub debug_console: DebugConsoleState,
    pub config: Config,
    pub theme: Theme,
}

/// UI-specific state (search input, cursor blink, quit flag)
#[derive(Debug, Clone)]
pub struct UiState {
    /// Text typed into the search box, not yet submitted
    pub search_input: String,
    /// Search cursor blink phase, toggled on every tick
    pub cursor_visible: bool,
    pub should_quit: bool,
    /// Rows available to the commit list, derived from the terminal height
    pub list_viewport_height: usize,
    /// Commit chosen with Enter (printed on exit)
    pub chosen_commit: Option<CommitRecord>,
}

/// Commit list and loading state
#[derive(Debug, Clone, Default)]
pub struct CommitsState {
    pub list: CommitListState,
    pub loading_state: LoadingState,
    /// Last submitted query, None while the full list is shown
    pub applied_query: Option<String>,
}

/// The full commit set, the visible (filtered) subset and the selection cursor
///
/// Invariant: `cursor` is `Some(i)` with `i < visible.len()` whenever
/// `visible` is non-empty, and `None` when it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitListState {
    all: Vec<CommitRecord>,
    visible: Vec<CommitRecord>,
    cursor: Option<usize>,
}

impl CommitListState {
    pub fn new(records: Vec<CommitRecord>) -> Self {
        let mut state = Self::default();
        state.reset(records);
        state
    }

    /// Replace the full record set and show all of it
    pub fn reset(&mut self, records: Vec<CommitRecord>) {
        self.visible = records.clone();
        self.all = records;
        self.cursor = first_index(&self.visible);
    }

    /// Show the records of the full set matching `query`
    ///
    /// Each search starts from the full set; an empty query shows everything.
    pub fn filter(&mut self, query: &str, ranking: Ranking) {
        self.visible = match_commits(&self.all, query, ranking);
        self.cursor = first_index(&self.visible);
    }

    /// Move the cursor by `delta`, clamped to the visible list
    pub fn move_cursor(&mut self, delta: isize) {
        if let Some(cursor) = self.cursor {
            let last = self.visible.len().saturating_sub(1);
            let target = cursor.saturating_add_signed(delta).min(last);
            self.cursor = Some(target);
        }
    }

    pub fn select_first(&mut self) {
        self.cursor = first_index(&self.visible);
    }

    pub fn select_last(&mut self) {
        self.cursor = self.visible.len().checked_sub(1);
    }

    /// Record under the cursor
    pub fn selected(&self) -> Option<&CommitRecord> {
        self.cursor.and_then(|i| self.visible.get(i))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn visible(&self) -> &[CommitRecord] {
        &self.visible
    }

    pub fn total(&self) -> usize {
        self.all.len()
    }
}

fn first_index(records: &[CommitRecord]) -> Option<usize> {
    if records.is_empty() { None } else { Some(0) }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Transient status line state
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskStatus {
    pub message: String,
    pub status_type: TaskStatusType,
    /// Ticks left before the message is cleared
    pub ticks_remaining: u8,
}

impl TaskStatus {
    /// Ticks a status message stays visible
    pub const LIFETIME_TICKS: u8 = 8;

    pub fn new(message: impl Into<String>, status_type: TaskStatusType) -> Self {
        Self {
            message: message.into(),
            status_type,
            ticks_remaining: Self::LIFETIME_TICKS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskStatusType {
    Success,
    Error,
    Warning,
    Info,
}

/// Debug console state (drop-down log viewer)
#[derive(Debug, Clone)]
pub struct DebugConsoleState {
    pub is_open: bool,
    pub scroll_offset: usize,
    pub auto_scroll: bool,   // Follow new logs as they arrive
    pub height_percent: u16, // Height as percentage of screen
    /// Log rows visible inside the console borders
    pub viewport_height: usize,
    pub logs: LogBuffer,
}

impl DebugConsoleState {
    /// Log rows visible when the terminal is `terminal_height` rows tall
    pub fn viewport_for(&self, terminal_height: u16) -> usize {
        let console_height = u32::from(terminal_height) * u32::from(self.height_percent) / 100;
        console_height.saturating_sub(2) as usize // Borders
    }

    /// Largest offset that still fills the viewport
    pub fn max_scroll_offset(&self) -> usize {
        let total = self.logs.lock().map(|logs| logs.len()).unwrap_or(0);
        total.saturating_sub(self.viewport_height)
    }

    /// Offset the view starts from; auto-scroll pins it to the newest entries
    pub fn effective_offset(&self) -> usize {
        if self.auto_scroll {
            self.max_scroll_offset()
        } else {
            self.scroll_offset.min(self.max_scroll_offset())
        }
    }
}

// Default implementations

impl Default for UiState {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            cursor_visible: true,
            should_quit: false,
            list_viewport_height: 10,
            chosen_commit: None,
        }
    }
}

impl Default for DebugConsoleState {
    fn default() -> Self {
        Self {
            is_open: false,
            scroll_offset: 0,
            auto_scroll: true,
            height_percent: 50,
            viewport_height: 10,
            logs: crate::log_capture::DebugConsoleLogger::create_buffer(),
        }
    }
}
