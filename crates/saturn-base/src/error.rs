//! Unified error types for Saturn.

use thiserror::Error;

/// The main error type for Saturn operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw literal whose variable magnitude cannot be represented.
    #[error("Variable out of range: {0}")]
    VariableOutOfRange(i64),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
