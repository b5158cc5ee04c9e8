// ABOUTME: Application configuration bundling logging settings and the nutrition standards
// ABOUTME: Loads both from the environment and validates before any calculation runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the ration audit engine
//!
//! - **Logging**: level, format and enrichment of structured logs
//! - **Standards**: the nutrition standards (constant table) every calculator reads
//!
//! Standards are loaded once, validated, and from then on only borrowed.

use crate::logging::LoggingConfig;
use ration_core::errors::{AppError, AppResult};
use ration_intelligence::config::NutritionStandards;
use std::env;
use tracing::debug;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Nutrition standards
    pub standards: NutritionStandards,
    /// Deployment environment (development, staging, production)
    pub environment: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            standards: NutritionStandards::default(),
            environment: "development".into(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when a `RATION_*` override cannot be parsed or
    /// the resulting standards fail validation
    pub fn from_env() -> AppResult<Self> {
        let standards = NutritionStandards::load().map_err(|e| {
            AppError::config(format!("Failed to load nutrition standards: {e}")).with_source(e)
        })?;
        let config = Self {
            logging: LoggingConfig::from_env(),
            standards,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        };
        debug!(environment = %config.environment, "Engine configuration loaded");
        Ok(config)
    }

    /// Replace the standards after validating them
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when the standards fail validation
    pub fn with_standards(mut self, standards: NutritionStandards) -> AppResult<Self> {
        standards
            .validate()
            .map_err(|e| AppError::config(e.to_string()).with_source(e))?;
        self.standards = standards;
        Ok(self)
    }

    /// Whether this is a production deployment
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
