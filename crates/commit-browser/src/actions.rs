use commit_search::CommitRecord;

/// Action enum - represents all possible actions in the application
/// Actions are dispatched to the reducer to update state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Startup
    Bootstrap,

    // Search input
    SearchInput(char),
    SearchBackspace,
    /// Enter: run the typed query, or choose the current commit when the input is empty
    Submit,
    /// Esc: clear the typed query, or quit when it is already empty
    Escape,
    ResetFilter,

    // Navigation
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    NavigateFirst,
    NavigateLast,

    CopySelectedHash,

    // Terminal events
    Resize(u16, u16),
    Tick, // Cursor blink and status expiry

    // Effect completion notifications
    CommitsLoaded(Result<Vec<CommitRecord>, String>),
    ClipboardComplete(Result<String, String>), // Ok(copied hash)

    // Debug console (drop-down)
    ToggleDebugConsole,
    ScrollDebugConsoleUp,
    ScrollDebugConsoleDown,
    ToggleDebugAutoScroll,
    ClearDebugLogs,

    Quit,
    None,
}
