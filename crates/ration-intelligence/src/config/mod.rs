// ABOUTME: Configuration module for ration-intelligence crate
// ABOUTME: Re-exports the nutrition standards (constant table) types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrition standards: requirement coefficients, intake model, evaluation bands
pub mod standards;

pub use standards::{ConfigError, NutritionStandards};
