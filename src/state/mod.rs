//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod filter;
pub mod prompt;
pub mod viewport;

// Re-export for convenience
pub use app_state::{AppState, Effect, HelpReturn, Mode, ENUMERATION_ERROR_LINE, QUIT_SENTINEL};
pub use filter::{highlight_segments, matches, FilterState, Segment};
pub use prompt::{PromptEditor, PromptInput, PromptOutcome, FILTER_LABEL, QUERY_LABEL};
pub use viewport::{paginate, Page, PageStats, VisibleRow};
