//! Error types for the timesheet and payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself never fails: malformed punches degrade to
//! "unset" and degenerate salary inputs resolve to defined defaults. Errors
//! exist only at the configuration and request-validation boundary.

use thiserror::Error;

/// The main error type for the timesheet and payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use ponto_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contained semantically invalid data.
    #[error("Invalid configuration: {message}")]
    ConfigInvalid {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// A shift template string did not have the expected shape.
    #[error("Invalid shift template '{value}': {message}")]
    InvalidTemplate {
        /// The template string that failed to parse.
        value: String,
        /// A description of what made the template invalid.
        message: String,
    },

    /// A salary input field was out of its allowed range.
    #[error("Invalid salary input field '{field}': {message}")]
    InvalidSalaryInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
