//! Substring filter and highlight segmentation.
//!
//! Matching is case-sensitive and byte-exact: no normalization, no folding.
//! The external search itself is case-insensitive, so a result can be
//! present in the list yet fail a filter that differs only in case.

/// Current filter pattern. Empty means every line matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pattern: String,
}

impl FilterState {
    /// Filter on `pattern`.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The pattern in effect; empty when no filter is set.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True when a non-empty pattern narrows the list.
    pub fn is_active(&self) -> bool {
        !self.pattern.is_empty()
    }

    /// Replace the pattern.
    pub fn set(&mut self, pattern: String) {
        self.pattern = pattern;
    }

    /// Drop the pattern so every line matches.
    pub fn clear(&mut self) {
        self.pattern.clear();
    }

    /// Whether `line` passes this filter.
    pub fn matches(&self, line: &str) -> bool {
        matches(line, &self.pattern)
    }
}

/// Substring predicate. An empty pattern matches every line.
pub fn matches(line: &str, pattern: &str) -> bool {
    pattern.is_empty() || line.contains(pattern)
}

/// A run of text from a line, tagged with whether it is a pattern occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Slice of the line being split.
    pub text: &'a str,
    /// True when `text` is an occurrence of the pattern.
    pub is_match: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    fn hit(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

/// Split `line` into alternating plain and matching segments.
///
/// Occurrences are found left to right without overlap. Concatenating the
/// segment texts in order reproduces `line` exactly. An empty pattern
/// yields the whole line as one plain segment.
pub fn highlight_segments<'a>(line: &'a str, pattern: &'a str) -> HighlightSegments<'a> {
    HighlightSegments {
        rest: line,
        pattern,
        pending_hit: None,
        whole_line: pattern.is_empty(),
    }
}

/// Iterator returned by [`highlight_segments`].
#[derive(Debug, Clone)]
pub struct HighlightSegments<'a> {
    rest: &'a str,
    pattern: &'a str,
    pending_hit: Option<&'a str>,
    whole_line: bool,
}

impl<'a> Iterator for HighlightSegments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.whole_line {
            self.whole_line = false;
            let line = std::mem::take(&mut self.rest);
            return Some(Segment::plain(line));
        }

        if let Some(hit) = self.pending_hit.take() {
            return Some(Segment::hit(hit));
        }

        if self.rest.is_empty() || self.pattern.is_empty() {
            return None;
        }

        match self.rest.find(self.pattern) {
            Some(pos) => {
                let end = pos + self.pattern.len();
                let gap = &self.rest[..pos];
                let hit = &self.rest[pos..end];
                self.rest = &self.rest[end..];
                if gap.is_empty() {
                    Some(Segment::hit(hit))
                } else {
                    self.pending_hit = Some(hit);
                    Some(Segment::plain(gap))
                }
            }
            None => {
                let tail = std::mem::take(&mut self.rest);
                Some(Segment::plain(tail))
            }
        }
    }
}
