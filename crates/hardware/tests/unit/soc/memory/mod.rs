//! Synchronous memory tests.
