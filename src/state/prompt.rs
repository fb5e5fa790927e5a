//! Bounded single-line text capture (pure state transitions).
//!
//! Used for both the search query and the filter pattern. Editing only
//! touches the tail of the buffer: there is no cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Default maximum number of characters a prompt accepts.
pub const DEFAULT_MAX_INPUT_LEN: usize = 511;

/// Label shown while collecting a search query.
pub const QUERY_LABEL: &str = "find> ";

/// Label shown while collecting a filter pattern.
pub const FILTER_LABEL: &str = "filter> ";

/// Edit operations a prompt understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptInput {
    /// Append a character.
    Char(char),
    /// Remove the last character.
    Backspace,
    /// Finish the capture (Enter).
    Commit,
}

impl PromptInput {
    /// Translate a key press into a prompt edit.
    ///
    /// Returns `None` for keys the prompt ignores (arrows, Esc, Ctrl chords).
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Enter => Some(PromptInput::Commit),
            KeyCode::Backspace => Some(PromptInput::Backspace),
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                None
            }
            KeyCode::Char(ch) => Some(PromptInput::Char(ch)),
            _ => None,
        }
    }
}

/// What happened after feeding one input to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still collecting.
    Pending,
    /// Enter was pressed; the editor's buffer has been handed over and is empty again.
    Committed(String),
}

/// One capture session: a label plus a bounded edit buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEditor {
    label: &'static str,
    buffer: String,
    max_len: usize,
}

impl PromptEditor {
    /// Start a capture with an empty buffer.
    pub fn begin(label: &'static str, max_len: usize) -> Self {
        Self {
            label,
            buffer: String::new(),
            max_len,
        }
    }

    /// Text drawn before the buffer.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Text typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Apply one edit.
    ///
    /// Printable characters past `max_len` are dropped without error.
    /// Control characters are never inserted.
    pub fn handle(&mut self, input: PromptInput) -> PromptOutcome {
        match input {
            PromptInput::Char(ch) => {
                if !ch.is_control() && self.char_len() < self.max_len {
                    self.buffer.push(ch);
                }
                PromptOutcome::Pending
            }
            PromptInput::Backspace => {
                self.buffer.pop();
                PromptOutcome::Pending
            }
            PromptInput::Commit => PromptOutcome::Committed(std::mem::take(&mut self.buffer)),
        }
    }
}
