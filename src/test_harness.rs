//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend, ScriptedEnumerator> with convenient methods for
//! simulating user interactions. Search results come from a script instead
//! of a real `find` process.

use crate::model::EnumerationError;
use crate::source::Enumerator;
use crate::state::{AppState, PageStats};
use crate::view::{ColorConfig, ResultStyles, TuiApp};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::HashMap;

/// Convert a ratatui buffer to a string, one line per row.
///
/// Trailing whitespace is trimmed from each row and empty trailing rows are dropped.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Enumerator answering from a fixed table and recording every query.
///
/// Unknown queries yield no results. Queries listed in `failing` fail.
#[derive(Debug, Default)]
pub struct ScriptedEnumerator {
    results: HashMap<String, Vec<String>>,
    failing: Vec<String>,
    queries: Vec<String>,
}

impl ScriptedEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `lines`.
    pub fn with_results(mut self, query: &str, lines: &[&str]) -> Self {
        self.results.insert(
            query.to_string(),
            lines.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Fail every enumeration of `query`.
    pub fn failing_on(mut self, query: &str) -> Self {
        self.failing.push(query.to_string());
        self
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }
}

impl Enumerator for ScriptedEnumerator {
    fn enumerate(&mut self, pattern: &str) -> Result<Vec<String>, EnumerationError> {
        self.queries.push(pattern.to_string());
        if self.failing.iter().any(|q| q == pattern) {
            return Err(EnumerationError::NoOutput);
        }
        Ok(self.results.get(pattern).cloned().unwrap_or_default())
    }
}

/// Test harness for acceptance testing
///
/// Every key is routed through the same event path as the real loop,
/// so each key press is followed by a redraw.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend, ScriptedEnumerator>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Start at the query prompt on an 80x24 terminal.
    pub fn new(enumerator: ScriptedEnumerator) -> Self {
        Self::with_size(enumerator, 80, 24)
    }

    /// Start at the query prompt with a custom terminal size.
    pub fn with_size(enumerator: ScriptedEnumerator, width: u16, height: u16) -> Self {
        Self::build(enumerator, width, height, false)
    }

    /// Start with the help modal shown, as the binary does by default.
    pub fn with_startup_help(enumerator: ScriptedEnumerator) -> Self {
        Self::build(enumerator, 80, 24, true)
    }

    fn build(enumerator: ScriptedEnumerator, width: u16, height: u16, help: bool) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let app_state = AppState::new(crate::state::prompt::DEFAULT_MAX_INPUT_LEN, help);
        let styles = ResultStyles::with_color_config(ColorConfig::enabled());

        let mut app = TuiApp::new_for_test(terminal, app_state, enumerator, styles);
        app.render_test().unwrap();

        Self { app, running: true }
    }

    /// Send a single key event
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let event = Event::Key(KeyEvent::new(key, mods));
        let quit = self.app.handle_event_test(event).unwrap();
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a key release, which the event loop must ignore.
    pub fn send_key_release(&mut self, key: KeyCode) -> bool {
        let mut event = KeyEvent::new(key, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        self.app.handle_event_test(Event::Key(event)).unwrap()
    }

    /// Type text character by character (no Enter).
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Type `query` at the query prompt and commit it.
    pub fn search(&mut self, query: &str) -> bool {
        self.type_text(query);
        self.send_key(KeyCode::Enter)
    }

    /// Open the filter prompt, type `pattern` and commit it.
    pub fn filter(&mut self, pattern: &str) {
        self.send_key(KeyCode::Char('/'));
        self.type_text(pattern);
        self.send_key(KeyCode::Enter);
    }

    /// Resize the terminal and deliver the resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app
            .handle_event_test(Event::Resize(width, height))
            .unwrap();
    }

    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Counts from the last redraw.
    pub fn last_page(&self) -> PageStats {
        self.app.app_state().last_page()
    }

    pub fn queries(&self) -> &[String] {
        self.app.enumerator().queries()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current screen contents.
    pub fn screen(&self) -> String {
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Screen row `y`, untrimmed.
    pub fn row(&self, y: u16) -> String {
        let buffer = self.app.terminal().backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    /// Style of the cell at (`x`, `y`).
    pub fn cell_fg(&self, x: u16, y: u16) -> ratatui::style::Color {
        self.app.terminal().backend().buffer()[(x, y)].fg
    }

    /// Cursor position as last set by a draw.
    pub fn cursor(&mut self) -> ratatui::layout::Position {
        self.app.terminal_mut().get_cursor_position().unwrap()
    }
}
