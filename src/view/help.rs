//! Help modal listing the key bindings.
//!
//! Drawn over the list region. Any key dismisses it.

use super::styles::ResultStyles;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("find>", "type part of a file or directory name"),
    ("h/H", "show this help"),
    ("/", "filter by substring (matches highlighted)"),
    ("n", "clear filter"),
    ("c", "new search"),
    ("q", "quit"),
    ("↑/↓", "scroll results"),
];

/// Render the help modal into `area`.
pub fn render_help(frame: &mut Frame, area: Rect, styles: &ResultStyles) {
    frame.render_widget(Clear, area);

    let help = Paragraph::new(build_help_content(styles)).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL),
    );
    frame.render_widget(help, area);
}

fn build_help_content(styles: &ResultStyles) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = BINDINGS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {key:<10} "), styles.key_hint()),
                Span::raw(format!(": {desc}")),
            ])
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Press any key...",
        Style::default().add_modifier(Modifier::DIM),
    )));
    lines
}
