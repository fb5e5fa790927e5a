//! Internal test modules - whitebox tests with crate access
//!
//! Harness-driven acceptance tests run the real event path against a
//! TestBackend and a scripted enumerator.
