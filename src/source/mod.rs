//! Path enumeration sources.
//!
//! An enumerator turns a free-text pattern into candidate paths. The
//! controller treats it as a black box that either yields lines or fails.

use crate::model::EnumerationError;

pub mod find;
pub mod sanitize;

pub use find::FindEnumerator;
pub use sanitize::sanitize;

/// Produces candidate paths for a search pattern.
///
/// Calls are synchronous. Implementations must release any process or
/// stream they open before returning, on success and on failure.
pub trait Enumerator {
    /// Return sanitized, non-empty result lines in output order.
    fn enumerate(&mut self, pattern: &str) -> Result<Vec<String>, EnumerationError>;
}
