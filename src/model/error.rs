//! Error types for findview.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's run function
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - log file setup failures
//!   - [`TuiError`](crate::view::TuiError) - terminal failures, fatal
//! - [`EnumerationError`] - external search failures
//!
//! # Error Recovery Strategy
//!
//! Enumeration failures are **non-fatal**: the controller replaces the result list with a
//! single synthetic error line and the user recovers by starting a new search. Terminal
//! errors are fatal and propagate to `main` after the terminal has been restored.
//! Nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the browser cannot function. The terminal is restored
    /// before this error reaches `main`.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Failures of the external path enumerator.
///
/// A non-zero exit status is not a failure: `find` reports unreadable directories that
/// way while still printing every path it could reach.
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// The enumerator process could not be started.
    ///
    /// # Examples
    ///
    /// ```
    /// use findview::model::EnumerationError;
    /// use std::path::PathBuf;
    ///
    /// let err = EnumerationError::Spawn {
    ///     program: PathBuf::from("find"),
    ///     source: std::io::Error::from(std::io::ErrorKind::NotFound),
    /// };
    /// assert!(err.to_string().contains("find"));
    /// ```
    #[error("Failed to start {program:?}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The process started but had no readable stdout.
    #[error("Enumerator produced no output stream")]
    NoOutput,

    /// Reading the process output or reaping the process failed.
    #[error("Failed to read enumerator output: {0}")]
    Read(#[from] std::io::Error),
}
