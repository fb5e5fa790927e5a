//! Visible window computation over the filtered result list.
//!
//! The filtered subsequence is never materialized: every call walks the
//! whole store once. That is O(n) per redraw, which is fine at the scale
//! of an interactive `find`.

use crate::model::LineStore;
use crate::state::filter::FilterState;

/// One visible result, tagged with its position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    /// Position in the store.
    pub index: usize,
    /// The stored line.
    pub line: &'a str,
}

/// Counts from a single pagination pass.
///
/// The controller keeps the last one around so scroll keys can be
/// decided without re-walking the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageStats {
    /// Rows actually collected.
    pub shown: usize,
    /// Lines matching the filter across the whole store.
    pub total_matching: usize,
    /// Row budget the page was computed with.
    pub capacity: usize,
}

/// Result of [`paginate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// Number of rows collected.
    pub shown: usize,
    /// Lines matching the filter across the whole store.
    pub total_matching: usize,
    /// Row budget the page was computed with.
    pub capacity: usize,
    /// The visible rows, in store order.
    pub rows: Vec<VisibleRow<'a>>,
}

impl Page<'_> {
    /// Counts without the borrowed rows.
    pub fn stats(&self) -> PageStats {
        PageStats {
            shown: self.shown,
            total_matching: self.total_matching,
            capacity: self.capacity,
        }
    }
}

/// Skip `offset` matching lines, then collect up to `max_rows` more.
///
/// An `offset` at or past `total_matching` yields an empty page; clamping
/// is the caller's job.
pub fn paginate<'a>(
    store: &'a LineStore,
    filter: &FilterState,
    offset: usize,
    max_rows: usize,
) -> Page<'a> {
    let mut total_matching = 0;
    let mut rows = Vec::with_capacity(max_rows.min(store.size()));

    for (index, line) in store.iter().enumerate() {
        if !filter.matches(line) {
            continue;
        }
        if total_matching >= offset && rows.len() < max_rows {
            rows.push(VisibleRow { index, line });
        }
        total_matching += 1;
    }

    Page {
        shown: rows.len(),
        total_matching,
        capacity: max_rows,
        rows,
    }
}
