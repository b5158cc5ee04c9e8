// ABOUTME: Algorithm selection layer for the ration engine
// ABOUTME: Enum-based requirement strategies selected from typed animal profile fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Selection Module
//!
//! Type-safe, enum-based selection between requirement models. The choice is
//! driven by explicit profile fields (`uses_dynamic_requirements`, production
//! defaults, static targets) and the resolved production source.
//!
//! # Example
//!
//! ```rust,no_run
//! use ration_core::models::{AnimalProfile, MilkProductionRecord};
//! use ration_intelligence::algorithms::{ProductionSource, RequirementStrategy};
//!
//! let profile = AnimalProfile::lactating("Cow 1042", 675.0, 3, 120, 90);
//! let milk_record = Some(MilkProductionRecord {
//!     milk_kg: 30.0,
//!     fat_percent: 4.4,
//!     protein_percent: 3.5,
//! });
//!
//! let source = ProductionSource::resolve(&profile, milk_record.as_ref());
//! let strategy = RequirementStrategy::select(&profile, &source)?;
//! assert_eq!(strategy, RequirementStrategy::Standard);
//! # Ok::<(), ration_core::errors::CalculationError>(())
//! ```

pub mod requirement_strategy;

pub use requirement_strategy::{ProductionSource, RequirementStrategy};
