//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
pub mod layout;
mod prompt_bar;
mod result_list;
mod styles;

pub use help::render_help;
pub use layout::{render_layout, Regions};
pub use prompt_bar::PromptBar;
pub use result_list::{row_line, status_text, ResultList};
pub use styles::{ColorConfig, ResultStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::source::{Enumerator, FindEnumerator};
use crate::state::{AppState, Effect, PageStats};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// enumerator so tests can script search results.
pub struct TuiApp<B, E>
where
    B: ratatui::backend::Backend,
    E: Enumerator,
{
    terminal: Terminal<B>,
    app_state: AppState,
    enumerator: E,
    key_bindings: KeyBindings,
    styles: ResultStyles,
}

impl TuiApp<CrosstermBackend<Stdout>, FindEnumerator> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(config: &ResolvedConfig, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state: AppState::new(config.max_input_len, config.show_help_on_start),
            enumerator: FindEnumerator::new(&config.search_root),
            key_bindings: KeyBindings::default(),
            styles: ResultStyles::with_color_config(colors),
        })
    }

    /// Run the main event loop
    ///
    /// Blocks on each key read. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let event = event::read()?;
            if self.handle_event(event)? {
                return Ok(());
            }
        }
    }
}

impl<B, E> TuiApp<B, E>
where
    B: ratatui::backend::Backend,
    E: Enumerator,
{
    /// Handle one terminal event and redraw if anything may have changed.
    ///
    /// Returns true if app should quit
    fn handle_event(&mut self, event: Event) -> Result<bool, TuiError> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if self.handle_key(key) {
                    return Ok(true);
                }
                self.draw()?;
            }
            Event::Resize(width, height) => {
                self.handle_resize(width, height)?;
                self.draw()?;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let filter_before = self.app_state.filter().pattern().to_string();

        match self.app_state.handle_key(key, &self.key_bindings) {
            Effect::None => {
                let filter = self.app_state.filter().pattern();
                if filter != filter_before {
                    debug!(filter, "Filter changed");
                }
                false
            }
            Effect::Quit => {
                info!("Quit requested");
                true
            }
            Effect::Search(query) => {
                self.run_search(&query);
                false
            }
        }
    }

    /// Run the enumerator synchronously; the UI is unresponsive until it returns.
    fn run_search(&mut self, query: &str) {
        info!(query, "Starting search");
        let started = Instant::now();
        let result = self.enumerator.enumerate(query);

        match &result {
            Ok(lines) => info!(
                query,
                results = lines.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Search finished"
            ),
            Err(err) => warn!(query, error = %err, "Search failed"),
        }

        self.app_state.apply_search_result(result);
    }

    /// Handle a terminal resize event
    ///
    /// Only the terminal's buffers change; regions are recomputed on the next draw.
    fn handle_resize(&mut self, width: u16, height: u16) -> Result<(), TuiError> {
        debug!("Handling resize to {}x{}", width, height);
        self.terminal.autoresize()?;
        Ok(())
    }

    /// Render the current frame
    ///
    /// Renders twice when the first pass finds the offset past the last
    /// match: the offset is pulled back and the corrected page is drawn.
    fn draw(&mut self) -> Result<(), TuiError> {
        if self.render()? {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<bool, TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        let mut stats = PageStats::default();

        self.terminal.draw(|frame| {
            stats = layout::render_layout(frame, state, styles);
        })?;

        Ok(self.app_state.record_page(stats))
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B, E> TuiApp<B, E>
where
    B: ratatui::backend::Backend,
    E: Enumerator,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        enumerator: E,
        styles: ResultStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            enumerator,
            key_bindings: KeyBindings::default(),
            styles,
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn enumerator(&self) -> &E {
        &self.enumerator
    }

    pub(crate) fn handle_event_test(&mut self, event: Event) -> Result<bool, TuiError> {
        self.handle_event(event)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Initialize and run the TUI with resolved configuration.
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and restores the terminal on every exit path.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig, colors: ColorConfig) -> Result<(), TuiError> {
    install_panic_hook();

    let result = TuiApp::new(config, colors).and_then(|mut app| app.run());

    // Always restore terminal state, even when setup or the loop failed
    let restored = restore_terminal();
    result?;
    restored
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

/// Restore terminal to normal state
///
/// Disables raw mode, leaves alternate screen, shows the cursor
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(Show)?;
    Ok(())
}
