//! Error types for the StackIt board core.
//!
//! This module defines the crate-wide error type [`BoardError`] and the
//! [`Result`] alias used across the codebase. Variants derive their `Error`
//! and `Display` implementations through `thiserror`.
//!
//! Most board operations are designed to recover locally instead of erroring:
//! an unknown filter mode falls back to the unfiltered view, an out-of-range page
//! request is clamped, and an empty projection renders an explicit empty state.
//! The variants below cover the conditions that genuinely cannot be absorbed.

use thiserror::Error;

/// The main error type for board operations.
///
/// This enum consolidates the error conditions that can occur while setting up
/// and driving the board core, from configuration parsing to seed-data loading.
/// I/O failures from configuration file reads convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use stackit_board::domain::BoardError;
///
/// fn validate_config() -> Result<(), BoardError> {
///     Err(BoardError::Config("page_size must be at least 1".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum BoardError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed or contains values
    /// outside their valid range. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (configuration file
    /// reads). Automatically converts from `std::io::Error` using the `#[from]`
    /// attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The embedded seed data could not be decoded.
    ///
    /// Occurs when the bundled sample-question JSON fails to deserialize.
    /// The string contains the underlying parse error.
    #[error("Seed data error: {0}")]
    Seed(String),

    /// A record store operation failed.
    ///
    /// Occurs when the store is asked to do something its invariants forbid,
    /// such as inserting a record whose identifier is already taken.
    #[error("Store error: {0}")]
    Store(String),
}

/// A specialized `Result` type for board operations.
///
/// This is a type alias for `std::result::Result<T, BoardError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use stackit_board::domain::Result;
///
/// fn load_board() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, BoardError>;
