//! Screen layout: list region on top, input region at the bottom.
//!
//! Regions are recomputed from the frame on every draw, so a resize
//! reflows them on the next redraw without touching controller state.

use super::constants::{INPUT_REGION_HEIGHT, LIST_BORDER_ROWS, STATUS_ROWS};
use super::help::render_help;
use super::prompt_bar::PromptBar;
use super::result_list::ResultList;
use super::styles::ResultStyles;
use crate::state::{AppState, Mode, PageStats};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// The two display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Result list with its status line.
    pub list: Rect,
    /// Prompt area at the bottom.
    pub input: Rect,
}

impl Regions {
    /// Split the terminal area into the two regions.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(INPUT_REGION_HEIGHT),
            ])
            .split(area);

        Self {
            list: chunks[0],
            input: chunks[1],
        }
    }

    /// Result rows that fit in the list region.
    pub fn list_capacity(&self) -> usize {
        usize::from(
            self.list
                .height
                .saturating_sub(LIST_BORDER_ROWS + STATUS_ROWS),
        )
    }
}

/// Render the whole screen and return the counts of the page drawn.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &ResultStyles) -> PageStats {
    let regions = Regions::compute(frame.area());
    let page = state.page(regions.list_capacity());

    if let Mode::Help { .. } = state.mode() {
        render_help(frame, regions.list, styles);
    } else {
        let list = ResultList::new(&page, state.filter().pattern(), state.offset(), styles);
        frame.render_widget(list, regions.list);
    }

    let bar = match state.active_prompt() {
        Some(editor) => PromptBar::Editing(editor),
        None => PromptBar::Idle(state.filter()),
    };
    let cursor = bar.cursor_position(regions.input);
    frame.render_widget(bar, regions.input);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }

    page.stats()
}
