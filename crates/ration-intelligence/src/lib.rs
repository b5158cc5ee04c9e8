// ABOUTME: Ration calculation engine: nutrition standards, audit steps, and the five calculators
// ABOUTME: Extracted from the application crate so the numeric model compiles and tests on its own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ration Intelligence
//!
//! The numeric engine behind the ration audit. Every function is a pure
//! function of its arguments and a borrowed [`NutritionStandards`] table.
//!
//! ## Modules
//!
//! - **config**: Nutrition standards with environment overrides and validation
//! - **audit**: Calculation steps, step builder, audit trail accumulator
//! - **algorithms**: Requirement strategy and production source selection
//! - **`requirement_calculator`**: VEM and DVE requirement
//! - **`intake_capacity`**: Voluntary intake capacity (VOC) and saturation
//! - **`feed_contribution`**: Per-feed dry matter and nutrient contributions
//! - **`supply_aggregator`**: Ration totals
//! - **`balance_evaluator`**: Supply versus requirement per nutrient

/// Nutrition standards configuration
pub mod config;

/// Traceable calculation steps
pub mod audit;

/// Requirement strategy selection
pub mod algorithms;

/// VEM and DVE requirement calculation
pub mod requirement_calculator;

/// Intake capacity calculation
pub mod intake_capacity;

/// Feed contribution calculation
pub mod feed_contribution;

/// Ration supply aggregation
pub mod supply_aggregator;

/// Nutrient balance evaluation
pub mod balance_evaluator;

pub use algorithms::{ProductionSource, RequirementStrategy};
pub use audit::{format_value, AuditTrail, CalculationStep, StepBuilder, StepInput};
pub use balance_evaluator::{evaluate, BalanceStatus, NutrientBalance};
pub use config::{ConfigError, NutritionStandards};
pub use feed_contribution::{contribution_for, validate_line, FeedContribution};
pub use intake_capacity::{
    assess_saturation, compute_voc, compute_voc_capacity, VocCapacity, VocResult, VocStatus,
};
pub use requirement_calculator::{
    calculate_fpcm, calculate_protein_yield, compute_dve_requirement, compute_requirement,
    compute_vem_requirement, metabolic_weight, NutrientRequirement, RequirementAdjustment,
    RequirementSet,
};
pub use supply_aggregator::{aggregate, SupplyTotals};
