//! Error types for the valuation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a valuation. Each variant carries the
//! entity id or field it concerns so the failure can be traced back to the
//! recorded participation data.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the valuation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use valuation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
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

    /// A loaded policy contains a value the methodology cannot use.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A trip ends before it starts.
    #[error("Invalid date range for '{entity_id}': end date {end_date} is before start date {start_date}")]
    InvalidDateRange {
        /// The trip the dates belong to.
        entity_id: String,
        /// The recorded start date.
        start_date: NaiveDate,
        /// The recorded end date.
        end_date: NaiveDate,
    },

    /// An input value is out of range or inconsistent.
    #[error("Invalid input for '{entity_id}' field '{field}': {message}")]
    InvalidInput {
        /// The entity (participation, trip or allocation) the value belongs to.
        entity_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A professional category outside the fixed enumeration.
    #[error("Unknown professional category: {value}")]
    UnknownCategory {
        /// The category value that was supplied.
        value: String,
    },
}

impl EngineError {
    /// An `InvalidInput` for arithmetic that leaves the representable range.
    pub(crate) fn out_of_range(entity_id: &str, field: &str) -> Self {
        EngineError::InvalidInput {
            entity_id: entity_id.to_string(),
            field: field.to_string(),
            message: "value is too large to calculate with".to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
