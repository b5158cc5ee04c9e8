// ABOUTME: Unified error handling with stable error codes for the ration engine
// ABOUTME: Defines ErrorCode, AppError, and AppResult used across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure the engine can report is mapped onto a stable [`ErrorCode`].
//! Calculation-level failures are modelled by [`CalculationError`]; callers
//! outside the engine (CLI, surrounding application) work with [`AppError`].

/// Calculation error taxonomy (invalid profile, invalid capacity, missing feed data)
pub mod calculation;

pub use calculation::CalculationError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Calculation input (3000-3999)
    #[serde(rename = "INVALID_PROFILE")]
    /// Physiological inputs out of range
    InvalidProfile = 3000,
    #[serde(rename = "INVALID_CAPACITY")]
    /// Intake capacity resolved to zero or negative
    InvalidCapacity = 3001,
    #[serde(rename = "MISSING_FEED_DATA")]
    /// Feed lacks required per-unit values
    MissingFeedData = 3002,
    #[serde(rename = "INVALID_FEED_INPUT")]
    /// Feed line carries an out-of-range value
    InvalidFeedInput = 3003,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_INVALID")]
    /// Constant table failed validation
    ConfigInvalid = 6000,

    // Input/output (9000-9999)
    #[serde(rename = "SERIALIZATION_ERROR")]
    /// JSON encoding or decoding failed
    SerializationError = 9001,
    #[serde(rename = "IO_ERROR")]
    /// Reading an input document or writing a report failed
    IoError = 9002,
}

impl ErrorCode {
    /// Get a user-facing description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidProfile => "The animal profile contains out-of-range values",
            Self::InvalidCapacity => "The intake capacity resolved to zero or a negative value",
            Self::MissingFeedData => "A feed in the ration lacks required nutritional values",
            Self::InvalidFeedInput => "A feed line in the ration is invalid",
            Self::ConfigInvalid => "The nutrition standards configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::IoError => "Reading or writing a document failed",
        }
    }

    /// Whether the caller must correct its input before retrying
    ///
    /// Calculation errors are never transient; they block the result.
    #[must_use]
    pub const fn is_blocking_input_error(self) -> bool {
        matches!(
            self,
            Self::InvalidProfile
                | Self::InvalidCapacity
                | Self::MissingFeedData
                | Self::InvalidFeedInput
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::InvalidProfile => "INVALID_PROFILE",
            Self::InvalidCapacity => "INVALID_CAPACITY",
            Self::MissingFeedData => "MISSING_FEED_DATA",
            Self::InvalidFeedInput => "INVALID_FEED_INPUT",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::IoError => "IO_ERROR",
        };
        f.write_str(code)
    }
}

/// Unified error type for the application layer
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error response for callers that render errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional structured context
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
            details: error.details.clone(),
        }
    }
}

impl From<CalculationError> for AppError {
    fn from(error: CalculationError) -> Self {
        let code = error.code();
        let details = error.details();
        Self::new(code, error.to_string())
            .with_details(details)
            .with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::IoError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_error_keeps_code_and_details() {
        let error: AppError = CalculationError::missing_feed_data("Grass silage", "vem").into();

        assert_eq!(error.code, ErrorCode::MissingFeedData);
        assert_eq!(error.details["feed"], "Grass silage");
        assert_eq!(error.details["field"], "vem");
        assert!(error.message.contains("Grass silage"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::new(ErrorCode::InvalidProfile, "parity must be at least 1");
        let response = ErrorResponse::from(&error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("INVALID_PROFILE"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_blocking_codes() {
        assert!(ErrorCode::InvalidCapacity.is_blocking_input_error());
        assert!(!ErrorCode::IoError.is_blocking_input_error());
        assert_eq!(ErrorCode::MissingFeedData.to_string(), "MISSING_FEED_DATA");
    }
}
