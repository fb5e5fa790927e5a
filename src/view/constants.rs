//! Layout dimension constants for TUI rendering.

/// Height of the input region in lines (border + one text row).
pub const INPUT_REGION_HEIGHT: u16 = 3;

/// Rows of the list region taken by its top and bottom border.
pub const LIST_BORDER_ROWS: u16 = 2;

/// Rows inside the list region reserved for the status line.
pub const STATUS_ROWS: u16 = 1;

/// Blank columns between a region's left border and its text.
pub const TEXT_INDENT: u16 = 1;
