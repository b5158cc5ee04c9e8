// ABOUTME: Main library entry point for the auditable ration calculation engine
// ABOUTME: Orchestration, report writer, feed catalog bridge, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ration Audit
//!
//! Calculates whether a proposed ration meets the energy (VEM), protein
//! (DVE, OEB), structure (SW) and intake-capacity (VOC) needs of a dairy
//! cow, and records every intermediate number as an auditable step.
//!
//! ## Architecture
//!
//! - **`ration-core`**: error codes, animal and feed models, units, citations
//! - **`ration-intelligence`**: nutrition standards and the five calculators
//! - **calculation**: orchestration, summary block, plain-text report
//! - **`feed_catalog`**: feed master-data lookup and lab analysis conversion
//! - **config** / **logging**: application configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ration_audit::calculation::{run, AuditableCalculationInputs};
//! use ration_audit::models::{
//!     AnimalProfile, FeedBasis, FeedDefinition, FeedInput, MilkProductionRecord,
//! };
//! use ration_audit::standards::NutritionStandards;
//!
//! let profile = AnimalProfile::lactating("Cow 1042", 675.0, 3, 120, 90);
//! let silage = FeedDefinition::new(
//!     "grass_silage",
//!     FeedBasis::PerKgDryMatter,
//!     951.0,
//!     76.0,
//!     28.0,
//!     2.75,
//!     1.05,
//!     45.0,
//! );
//! let inputs = AuditableCalculationInputs::new(profile)
//!     .with_milk_record(MilkProductionRecord {
//!         milk_kg: 30.0,
//!         fat_percent: 4.4,
//!         protein_percent: 3.5,
//!     })
//!     .with_feed(silage, FeedInput::new(40.0));
//!
//! let result = run(&inputs, NutritionStandards::global())?;
//! println!("{}", result.to_report());
//! # Ok::<(), ration_audit::errors::CalculationError>(())
//! ```

/// Calculation orchestration, summary and report
pub mod calculation;

/// Application configuration
pub mod config;

/// Error types and stable error codes
pub mod errors;

/// Feed master-data catalog bridge
pub mod feed_catalog;

/// Structured logging setup and calculation events
pub mod logging;

/// Domain models from `ration-core`
pub use ration_core::models;

/// Nutrition standards from `ration-intelligence`
pub use ration_intelligence::config as standards;

pub use calculation::{
    run, run_at, run_batch, to_report, validate_inputs, AuditableCalculationInputs,
    AuditableCalculationResult, CalculationSummary, RationLine,
};
pub use config::EngineConfig;
pub use feed_catalog::{resolve_ration, CatalogLine, FeedCatalog, InMemoryFeedCatalog, LabAnalysis};
