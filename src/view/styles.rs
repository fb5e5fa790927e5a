//! Result styling configuration.
//!
//! Directories are blue, executables green, filter matches yellow.

use crate::model::FileKind;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determined by the `--no-color` CLI flag and the `NO_COLOR` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ResultStyles =====

/// Styles for result rows and the filter highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultStyles {
    directory: Style,
    executable: Style,
    highlight: Style,
    key_hint: Style,
}

impl ResultStyles {
    /// Create styles honoring `config`.
    ///
    /// Without colors, kinds are unstyled and the highlight is bold so
    /// matches stay visible.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                directory: Style::default().fg(Color::Blue),
                executable: Style::default().fg(Color::Green),
                highlight: Style::default().fg(Color::Yellow),
                key_hint: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                directory: Style::default(),
                executable: Style::default(),
                highlight: Style::default().add_modifier(Modifier::BOLD),
                key_hint: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }

    /// Style for the non-matching parts of a row.
    pub fn style_for_kind(&self, kind: FileKind) -> Style {
        match kind {
            FileKind::Directory => self.directory,
            FileKind::Executable => self.executable,
            FileKind::Other => Style::default(),
        }
    }

    /// Style for filter occurrences.
    pub fn highlight(&self) -> Style {
        self.highlight
    }

    /// Style for key names in the help modal.
    pub fn key_hint(&self) -> Style {
        self.key_hint
    }
}

// ===== Tests =====
