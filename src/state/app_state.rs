//! Controller state and transitions.
//!
//! AppState owns everything that changes while the browser runs: the
//! result store, the filter, the scroll offset and the active prompt.
//! Transitions are pure; the impure shell (view) performs the effects
//! they request, such as running a search.

use crate::config::KeyBindings;
use crate::model::{EnumerationError, KeyAction, LineStore};
use crate::state::filter::FilterState;
use crate::state::prompt::{
    PromptEditor, PromptInput, PromptOutcome, DEFAULT_MAX_INPUT_LEN, FILTER_LABEL, QUERY_LABEL,
};
use crate::state::viewport::{paginate, Page, PageStats};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Query text that exits instead of searching.
pub const QUIT_SENTINEL: &str = "q";

/// Result line shown in place of results when the enumerator fails.
pub const ENUMERATION_ERROR_LINE: &str = "Error: unable to run find";

/// Where the help modal returns once dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpReturn {
    /// Back to the query prompt (help shown at startup).
    AwaitingQuery,
    /// Back to the result list.
    Browsing,
}

/// Controller states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Collecting a search query.
    AwaitingQuery {
        /// Query being edited.
        prompt: PromptEditor,
    },
    /// Showing results. `filter_prompt` is set while a filter pattern is being typed.
    Browsing {
        /// Filter pattern being edited, if any.
        filter_prompt: Option<PromptEditor>,
    },
    /// Help modal; any key dismisses it.
    Help {
        /// State to return to when dismissed.
        resume: HelpReturn,
    },
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do beyond redrawing.
    None,
    /// Run the enumerator with this query, then call [`AppState::apply_search_result`].
    Search(String),
    /// Restore the terminal and exit.
    Quit,
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    mode: Mode,
    store: LineStore,
    filter: FilterState,
    /// Matching lines skipped before the visible window.
    offset: usize,
    /// Counts from the most recent redraw; scroll keys are decided against these.
    last_page: PageStats,
    max_input_len: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_LEN, false)
    }
}

impl AppState {
    /// Create the initial state.
    ///
    /// With `show_help_on_start` the help modal is shown first and the
    /// query prompt follows once it is dismissed.
    pub fn new(max_input_len: usize, show_help_on_start: bool) -> Self {
        let mode = if show_help_on_start {
            Mode::Help {
                resume: HelpReturn::AwaitingQuery,
            }
        } else {
            Mode::AwaitingQuery {
                prompt: PromptEditor::begin(QUERY_LABEL, max_input_len),
            }
        };
        Self {
            mode,
            store: LineStore::new(),
            filter: FilterState::default(),
            offset: 0,
            last_page: PageStats::default(),
            max_input_len,
        }
    }

    /// Current controller state.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Results of the last search.
    pub fn store(&self) -> &LineStore {
        &self.store
    }

    /// Filter applied to the results.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Matching lines scrolled past.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Counts recorded by the most recent redraw.
    pub fn last_page(&self) -> PageStats {
        self.last_page
    }

    /// The prompt currently collecting input, if any.
    pub fn active_prompt(&self) -> Option<&PromptEditor> {
        match &self.mode {
            Mode::AwaitingQuery { prompt } => Some(prompt),
            Mode::Browsing {
                filter_prompt: Some(prompt),
            } => Some(prompt),
            _ => None,
        }
    }

    /// Compute the visible window at the current offset.
    pub fn page(&self, max_rows: usize) -> Page<'_> {
        paginate(&self.store, &self.filter, self.offset, max_rows)
    }

    /// Remember the counts of a rendered page.
    ///
    /// Returns `true` when the page came back empty past the end of the
    /// matches; the offset has then been pulled back and the caller should
    /// render again.
    pub fn record_page(&mut self, stats: PageStats) -> bool {
        self.last_page = stats;
        if stats.shown == 0 && self.offset > 0 {
            self.offset = stats.total_matching.saturating_sub(stats.capacity);
            return true;
        }
        false
    }

    /// Dispatch one key press.
    ///
    /// Ctrl+C quits from any state. Otherwise prompts consume edit keys,
    /// the help modal consumes any key, and browsing goes through `bindings`.
    pub fn handle_key(&mut self, key: KeyEvent, bindings: &KeyBindings) -> Effect {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Effect::Quit;
        }

        match &mut self.mode {
            Mode::Help { resume } => {
                let resume = *resume;
                self.dismiss_help(resume);
                Effect::None
            }
            Mode::AwaitingQuery { prompt } => {
                let Some(input) = PromptInput::from_key(key) else {
                    return Effect::None;
                };
                match prompt.handle(input) {
                    PromptOutcome::Pending => Effect::None,
                    PromptOutcome::Committed(query) if query == QUIT_SENTINEL => Effect::Quit,
                    PromptOutcome::Committed(query) => Effect::Search(query),
                }
            }
            Mode::Browsing {
                filter_prompt: Some(prompt),
            } => {
                let Some(input) = PromptInput::from_key(key) else {
                    return Effect::None;
                };
                if let PromptOutcome::Committed(pattern) = prompt.handle(input) {
                    self.set_filter(pattern);
                }
                Effect::None
            }
            Mode::Browsing {
                filter_prompt: None,
            } => match bindings.get(key) {
                Some(action) => self.apply_action(action),
                None => Effect::None,
            },
        }
    }

    /// Apply a browsing action.
    ///
    /// No-op outside `Browsing` or while a filter prompt is open.
    pub fn apply_action(&mut self, action: KeyAction) -> Effect {
        if !matches!(
            self.mode,
            Mode::Browsing {
                filter_prompt: None
            }
        ) {
            return Effect::None;
        }

        match action {
            KeyAction::Help => {
                self.mode = Mode::Help {
                    resume: HelpReturn::Browsing,
                };
            }
            KeyAction::EnterFilter => {
                self.mode = Mode::Browsing {
                    filter_prompt: Some(PromptEditor::begin(FILTER_LABEL, self.max_input_len)),
                };
            }
            KeyAction::ClearFilter => {
                self.filter.clear();
                self.offset = 0;
            }
            KeyAction::NewSearch => {
                self.mode = Mode::AwaitingQuery {
                    prompt: PromptEditor::begin(QUERY_LABEL, self.max_input_len),
                };
            }
            KeyAction::Quit => return Effect::Quit,
            KeyAction::ScrollDown => {
                let PageStats {
                    shown,
                    total_matching,
                    ..
                } = self.last_page;
                if self.offset + shown < total_matching {
                    self.offset += 1;
                }
            }
            KeyAction::ScrollUp => {
                self.offset = self.offset.saturating_sub(1);
            }
        }
        Effect::None
    }

    /// Install the outcome of a search and switch to browsing.
    ///
    /// Results replace the store wholesale. A failure leaves a single
    /// error line. Either way the filter and offset start fresh.
    pub fn apply_search_result(&mut self, result: Result<Vec<String>, EnumerationError>) {
        match result {
            Ok(lines) => self.store.replace(lines),
            Err(_) => self.store.replace([ENUMERATION_ERROR_LINE.to_string()]),
        }
        self.filter.clear();
        self.offset = 0;
        self.last_page = PageStats::default();
        self.mode = Mode::Browsing {
            filter_prompt: None,
        };
    }

    fn set_filter(&mut self, pattern: String) {
        self.filter.set(pattern);
        self.offset = 0;
        self.mode = Mode::Browsing {
            filter_prompt: None,
        };
    }

    fn dismiss_help(&mut self, resume: HelpReturn) {
        self.mode = match resume {
            HelpReturn::AwaitingQuery => Mode::AwaitingQuery {
                prompt: PromptEditor::begin(QUERY_LABEL, self.max_input_len),
            },
            HelpReturn::Browsing => Mode::Browsing {
                filter_prompt: None,
            },
        };
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
