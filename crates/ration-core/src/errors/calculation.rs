// ABOUTME: Calculation-specific error taxonomy for the ration engine
// ABOUTME: Invalid profile, invalid capacity, missing feed data, invalid feed input, bad standards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calculation Error Types
//!
//! Every variant is a blocking input error: the calculation produces no result
//! tree and the caller has to correct its input. Nothing here is retried.

use super::ErrorCode;
use serde_json::json;
use thiserror::Error;

/// Errors raised while validating or evaluating a ration calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Physiological input out of range (negative weight, parity < 1, ...)
    #[error("invalid profile field `{field}`: {reason}")]
    InvalidProfile {
        /// Offending profile field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Intake capacity resolved to zero or a negative value
    #[error("intake capacity resolved to {capacity:.3} VW; cannot compute saturation")]
    InvalidCapacity {
        /// Resolved capacity in filling-value units
        capacity: f64,
    },

    /// A feed lacks a required per-unit value (VEM, DVE, OEB) or is unknown
    #[error("feed `{feed}` is missing required value `{field}`")]
    MissingFeedData {
        /// Feed name
        feed: String,
        /// Missing field
        field: &'static str,
    },

    /// A feed line carries an out-of-range value (dry-matter percent outside 0-100)
    #[error("feed `{feed}` has invalid input: {reason}")]
    InvalidFeedInput {
        /// Feed name
        feed: String,
        /// Why the line was rejected
        reason: String,
    },

    /// The nutrition standards failed validation
    #[error("nutrition standards are invalid: {0}")]
    InvalidStandards(String),
}

impl CalculationError {
    /// Create an invalid profile error
    #[must_use]
    pub fn invalid_profile(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field,
            reason: reason.into(),
        }
    }

    /// Create a missing feed data error
    #[must_use]
    pub fn missing_feed_data(feed: impl Into<String>, field: &'static str) -> Self {
        Self::MissingFeedData {
            feed: feed.into(),
            field,
        }
    }

    /// Create an invalid feed input error
    #[must_use]
    pub fn invalid_feed_input(feed: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFeedInput {
            feed: feed.into(),
            reason: reason.into(),
        }
    }

    /// Map to the stable error code
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidProfile { .. } => ErrorCode::InvalidProfile,
            Self::InvalidCapacity { .. } => ErrorCode::InvalidCapacity,
            Self::MissingFeedData { .. } => ErrorCode::MissingFeedData,
            Self::InvalidFeedInput { .. } => ErrorCode::InvalidFeedInput,
            Self::InvalidStandards(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// Structured details for error responses
    #[must_use]
    pub fn details(&self) -> serde_json::Value {
        match self {
            Self::InvalidProfile { field, reason } => json!({ "field": field, "reason": reason }),
            Self::InvalidCapacity { capacity } => json!({ "capacity": capacity }),
            Self::MissingFeedData { feed, field } => json!({ "feed": feed, "field": field }),
            Self::InvalidFeedInput { feed, reason } => json!({ "feed": feed, "reason": reason }),
            Self::InvalidStandards(reason) => json!({ "reason": reason }),
        }
    }
}
