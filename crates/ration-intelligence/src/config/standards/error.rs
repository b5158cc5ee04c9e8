// ABOUTME: Configuration error types for nutrition standards validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and inconsistent bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for nutrition standards validation.

use ration_core::errors::CalculationError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bounds are inverted or overlap (e.g., warning threshold above ok threshold)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for CalculationError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidStandards(error.to_string())
    }
}
