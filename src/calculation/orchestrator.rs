// ABOUTME: Orchestrates one complete auditable ration calculation
// ABOUTME: Validates all inputs up front, then runs requirement, contribution, supply, VOC and balance steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::inputs::AuditableCalculationInputs;
use super::report;
use super::summary::CalculationSummary;
use crate::logging::AuditLogger;
use chrono::{DateTime, Utc};
use ration_core::errors::{AppError, AppResult, CalculationError};
use ration_core::models::Nutrient;
use ration_intelligence::algorithms::{ProductionSource, RequirementStrategy};
use ration_intelligence::balance_evaluator::{self, NutrientBalance};
use ration_intelligence::config::NutritionStandards;
use ration_intelligence::feed_contribution::{self, FeedContribution};
use ration_intelligence::intake_capacity::{self, VocResult};
use ration_intelligence::requirement_calculator::{self, RequirementSet};
use ration_intelligence::supply_aggregator::{self, SupplyTotals};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info_span};

/// Complete, self-describing result of one ration calculation
///
/// Every figure carries the step that produced it, so the whole result can be
/// rendered as an audit report without recomputing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditableCalculationResult {
    /// When the calculation ran
    pub timestamp: DateTime<Utc>,
    /// Echo of the inputs
    pub inputs: AuditableCalculationInputs,
    /// VEM and DVE requirement
    pub requirements: RequirementSet,
    /// Intake capacity and saturation
    pub voc: VocResult,
    /// Contributions of the feeds actually fed, in input order
    pub contributions: Vec<FeedContribution>,
    /// Ration totals
    pub totals: SupplyTotals,
    /// Balances in the order VEM, DVE, OEB, SW
    pub balances: Vec<NutrientBalance>,
    /// Summary block
    pub summary: CalculationSummary,
}

impl AuditableCalculationResult {
    /// Balance of one nutrient
    #[must_use]
    pub fn balance(&self, nutrient: Nutrient) -> Option<&NutrientBalance> {
        self.balances.iter().find(|b| b.parameter == nutrient)
    }

    /// Render the plain-text audit report
    #[must_use]
    pub fn to_report(&self) -> String {
        report::to_report(self)
    }

    /// Serialize the full result tree as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` if encoding fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Validate every input of a calculation without computing anything
///
/// Checks the standards, the profile, the milk record, the availability of a
/// production figure and each fed ration line.
///
/// # Errors
///
/// Returns the first blocking `CalculationError` found
pub fn validate_inputs(
    inputs: &AuditableCalculationInputs,
    standards: &NutritionStandards,
) -> Result<(), CalculationError> {
    standards.validate()?;

    inputs.profile.validate()?;
    if let Some(record) = &inputs.milk_record {
        record.validate()?;
    }

    let source = ProductionSource::resolve(&inputs.profile, inputs.milk_record.as_ref());
    RequirementStrategy::select(&inputs.profile, &source)?;

    for line in &inputs.feeds {
        feed_contribution::validate_line(&line.feed, &line.input, standards)?;
    }
    Ok(())
}

fn calculate(
    inputs: &AuditableCalculationInputs,
    timestamp: DateTime<Utc>,
    standards: &NutritionStandards,
) -> Result<AuditableCalculationResult, CalculationError> {
    validate_inputs(inputs, standards)?;

    let requirements = requirement_calculator::compute_requirement(
        &inputs.profile,
        inputs.milk_record.as_ref(),
        inputs.is_grazing,
        standards,
    )?;
    debug!(
        strategy = %requirements.strategy,
        source = requirements.production_source.label(),
        vem = requirements.vem.value(),
        dve = requirements.dve.value(),
        "Requirements computed"
    );

    let mut contributions = Vec::with_capacity(inputs.feeds.len());
    for line in &inputs.feeds {
        if let Some(contribution) =
            feed_contribution::contribution_for(&line.feed, &line.input, standards)?
        {
            contributions.push(contribution);
        }
    }
    debug!(
        lines = inputs.feeds.len(),
        fed = contributions.len(),
        "Feed contributions computed"
    );

    let totals = supply_aggregator::aggregate(&contributions, inputs.is_grazing, standards);
    debug!(
        dry_matter_kg = totals.dry_matter.result,
        vem = totals.vem.result,
        vw = totals.vw.result,
        "Supply aggregated"
    );

    let voc = intake_capacity::compute_voc(
        &inputs.profile,
        inputs.is_grazing,
        totals.vw.result,
        standards,
    )?;
    debug!(
        capacity_vw = voc.capacity_vw,
        saturation_percent = voc.saturation_percent,
        status = %voc.status,
        "Intake capacity assessed"
    );

    let balances = balance_evaluator::evaluate(&requirements, &totals, standards);
    let summary = CalculationSummary::from_parts(&balances, &voc, &totals);

    Ok(AuditableCalculationResult {
        timestamp,
        inputs: inputs.clone(),
        requirements,
        voc,
        contributions,
        totals,
        balances,
        summary,
    })
}

/// Run a calculation with an explicit timestamp
///
/// The result is a pure function of the inputs, the timestamp and the
/// standards, which makes reports reproducible.
///
/// # Errors
///
/// Returns a `CalculationError` when any input fails validation or the intake
/// capacity is not positive; no partial result is produced
pub fn run_at(
    inputs: &AuditableCalculationInputs,
    timestamp: DateTime<Utc>,
    standards: &NutritionStandards,
) -> Result<AuditableCalculationResult, CalculationError> {
    let animal = inputs.profile.name.as_str();
    let span = info_span!("ration_calculation", animal = %animal);
    let _guard = span.enter();

    let started = Instant::now();
    match calculate(inputs, timestamp, standards) {
        Ok(result) => {
            AuditLogger::log_calculation(animal, &result.summary, started.elapsed().as_micros());
            Ok(result)
        }
        Err(error) => {
            AuditLogger::log_rejection(animal, &AppError::from(error.clone()));
            Err(error)
        }
    }
}

/// Run a calculation stamped with the current time
///
/// # Errors
///
/// See [`run_at`]
pub fn run(
    inputs: &AuditableCalculationInputs,
    standards: &NutritionStandards,
) -> Result<AuditableCalculationResult, CalculationError> {
    run_at(inputs, Utc::now(), standards)
}

/// Run independent calculations in parallel
///
/// Results come back in input order; one failing calculation does not affect
/// the others.
#[must_use]
pub fn run_batch(
    batch: &[AuditableCalculationInputs],
    standards: &NutritionStandards,
) -> Vec<Result<AuditableCalculationResult, CalculationError>> {
    let started = Instant::now();
    let timestamp = Utc::now();
    let results: Vec<_> = batch
        .par_iter()
        .map(|inputs| run_at(inputs, timestamp, standards))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    AuditLogger::log_batch(results.len(), failed, started.elapsed().as_millis());
    results
}
