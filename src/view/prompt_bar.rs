//! Input region widget: the active prompt, or the current filter.

use super::constants::TEXT_INDENT;
use crate::state::{FilterState, PromptEditor};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Input region contents.
pub enum PromptBar<'a> {
    /// A prompt is collecting text.
    Editing(&'a PromptEditor),
    /// No prompt; show the filter in effect, if any.
    Idle(&'a FilterState),
}

impl PromptBar<'_> {
    /// Terminal cursor position at the end of the typed text.
    ///
    /// `None` when idle. Clamped to the region's inner right edge.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let PromptBar::Editing(editor) = self else {
            return None;
        };
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let typed = editor.label().width() + editor.buffer().width();
        let offset = u16::try_from(typed)
            .unwrap_or(u16::MAX)
            .saturating_add(TEXT_INDENT);
        let x = inner.x.saturating_add(offset).min(inner.right() - 1);
        Some(Position::new(x, inner.y))
    }
}

impl Widget for PromptBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let indent = " ".repeat(usize::from(TEXT_INDENT));
        let line = match self {
            PromptBar::Editing(editor) => Line::from(vec![
                Span::raw(indent),
                Span::styled(editor.label(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(editor.buffer()),
            ]),
            PromptBar::Idle(filter) if filter.is_active() => Line::from(vec![
                Span::raw(indent),
                Span::styled("filter: ", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(filter.pattern()),
            ]),
            PromptBar::Idle(_) => Line::default(),
        };

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
