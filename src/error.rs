//! Error types for the Redemption Points Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the hard failures the engine can report. Structural problems in a
//! rule set are not errors; see [`crate::models::ValidationIssue`].

use thiserror::Error;

/// The main error type for the Redemption Points Engine.
///
/// # Example
///
/// ```
/// use redeem_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "order_total".to_string(),
///     message: "must not be negative (got -5)".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'order_total': must not be negative (got -5)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An evaluation input was negative, NaN or infinite.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The name of the rejected input.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file exists but could not be read.
    #[error("Failed to read configuration file '{path}': {message}")]
    ConfigReadError {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A non-file rule source failed to produce rules.
    #[error("Rule source '{source_name}' failed: {message}")]
    RuleSourceError {
        /// A description of the source (e.g. "static", "admin-api").
        source_name: String,
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`] on the order total.
    pub fn invalid_order_total(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: "order_total".to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
