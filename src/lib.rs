//! findview
//!
//! Full-screen terminal browser for filesystem search results.
//!
//! The pure core (`model`, `state`) holds the result list, the filter and the
//! controller state machine. The impure shell (`source`, `view`) runs `find`
//! and owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
