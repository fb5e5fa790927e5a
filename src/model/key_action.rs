//! Domain-level keyboard actions independent of key bindings.

/// Actions available while browsing results.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Show the help modal. Default: h/H
    Help,
    /// Capture a new filter pattern. Default: /
    EnterFilter,
    /// Reset the filter to match everything. Default: n
    ClearFilter,
    /// Leave the result list and prompt for a new query. Default: c
    NewSearch,
    /// Exit the application. Default: q
    Quit,
    /// Scroll the visible window up by one match. Default: ↑
    ScrollUp,
    /// Scroll the visible window down by one match. Default: ↓
    ScrollDown,
}
