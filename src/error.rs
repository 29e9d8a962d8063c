//! Error types for the markup harness

use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying the page
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the fixture file
    #[error("Fixture read failed: {0}")]
    Fixture(String),

    /// A CSS selector could not be parsed
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// A query expected at least one matching element
    #[error("No element matches selector: {0}")]
    NoMatch(String),
}
