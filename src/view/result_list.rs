//! Result list widget: visible rows with highlighted filter matches plus
//! a status line.

use super::constants::{STATUS_ROWS, TEXT_INDENT};
use super::styles::ResultStyles;
use crate::model::FileKind;
use crate::state::{highlight_segments, Page};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Text of the status line under the rows.
pub fn status_text(shown: usize, total_matching: usize, offset: usize) -> String {
    format!(
        "[{shown}/{total_matching}] /:filter n:clear H:help c:new q:quit ↑/↓:scroll (offset={offset})"
    )
}

/// Build the spans of one row.
///
/// Plain segments take the file-kind style, matches take the highlight.
pub fn row_line<'a>(
    line: &'a str,
    pattern: &'a str,
    kind: FileKind,
    styles: &ResultStyles,
) -> Line<'a> {
    let base = styles.style_for_kind(kind);
    let spans: Vec<Span<'a>> = highlight_segments(line, pattern)
        .map(|segment| {
            let style = if segment.is_match {
                styles.highlight()
            } else {
                base
            };
            Span::styled(segment.text, style)
        })
        .collect();
    Line::from(spans)
}

/// Bordered list of the visible page.
pub struct ResultList<'a> {
    page: &'a Page<'a>,
    pattern: &'a str,
    offset: usize,
    styles: &'a ResultStyles,
}

impl<'a> ResultList<'a> {
    /// Widget for `page`, highlighting `pattern`.
    pub fn new(page: &'a Page<'a>, pattern: &'a str, offset: usize, styles: &'a ResultStyles) -> Self {
        Self {
            page,
            pattern,
            offset,
            styles,
        }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width <= TEXT_INDENT {
            return;
        }

        let x = inner.x + TEXT_INDENT;
        let width = inner.width - TEXT_INDENT;

        let rows_bottom = inner.bottom().saturating_sub(STATUS_ROWS).max(inner.y);
        for (row, y) in self.page.rows.iter().zip(inner.y..rows_bottom) {
            // classify visible rows only: one stat per drawn line
            let kind = FileKind::classify(row.line);
            let line = row_line(row.line, self.pattern, kind, self.styles);
            buf.set_line(x, y, &line, width);
        }

        let status = status_text(self.page.shown, self.page.total_matching, self.offset);
        buf.set_line(x, rows_bottom, &Line::from(status), width);
    }
}
