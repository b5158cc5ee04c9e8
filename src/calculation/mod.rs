// ABOUTME: Audit orchestration of a complete ration calculation
// ABOUTME: Inputs, orchestrator, summary block and the plain-text report writer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calculation Module
//!
//! Sequences requirement, feed contribution, supply aggregation, intake
//! capacity and balance evaluation into one [`AuditableCalculationResult`].
//! All inputs are validated before the first step is computed, so a failed
//! calculation never yields a partial result.

/// Calculation inputs (animal, milk record, ration lines, grazing flag)
pub mod inputs;

/// Orchestration of the calculation pipeline
pub mod orchestrator;

/// Plain-text report serialization
pub mod report;

/// Summary block of a calculation
pub mod summary;

pub use inputs::{AuditableCalculationInputs, RationLine};
pub use orchestrator::{run, run_at, run_batch, validate_inputs, AuditableCalculationResult};
pub use report::to_report;
pub use summary::CalculationSummary;
