// ABOUTME: Per-feed contribution of dry matter, VEM, DVE, OEB, SW and VW to a ration
// ABOUTME: Applies the per-kg-DS versus per-kg-product accounting basis of each feed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feed Contribution Module
//!
//! Dry matter is always `amount x DS% / 100`. The nutrient multiplier depends
//! on the feed's basis: per-kg-DS values multiply the dry matter, per-kg-product
//! values multiply the as-fed amount. Swapping the two would misstate every
//! nutrient by the dry-matter ratio.

use crate::audit::{format_value, CalculationStep};
use crate::config::standards::NutritionStandards;
use ration_core::constants::{sources, units};
use ration_core::errors::CalculationError;
use ration_core::models::{FeedBasis, FeedDefinition, FeedInput, FeedNutrients};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What one ration line contributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedContribution {
    /// Catalog key of the feed
    pub feed_name: String,
    /// Human-readable feed name
    pub display_name: String,
    /// Accounting basis of the per-unit values
    pub basis: FeedBasis,
    /// Amount fed (kg)
    pub amount_kg: f64,
    /// Effective dry-matter percentage
    pub ds_percent: f64,
    /// Dry matter intake (kg DS)
    pub dry_matter: CalculationStep,
    /// Energy contribution
    pub vem: CalculationStep,
    /// DVE contribution (g)
    pub dve: CalculationStep,
    /// OEB contribution (g)
    pub oeb: CalculationStep,
    /// Structure value contribution
    pub sw: CalculationStep,
    /// Filling value contribution
    pub vw: CalculationStep,
    /// SW came from the fallback default
    pub sw_defaulted: bool,
    /// VW came from the fallback default
    pub vw_defaulted: bool,
}

impl FeedContribution {
    /// Dry matter in kg
    #[must_use]
    pub const fn dry_matter_kg(&self) -> f64 {
        self.dry_matter.result
    }

    /// Nutrient steps in report order (VEM, DVE, OEB, SW, VW)
    #[must_use]
    pub fn nutrient_steps(&self) -> [&CalculationStep; 5] {
        [&self.vem, &self.dve, &self.oeb, &self.sw, &self.vw]
    }
}

/// Check a ration line without computing anything
///
/// Lines that are not fed pass unchecked.
///
/// # Errors
///
/// Returns `CalculationError::MissingFeedData` when VEM, DVE or OEB is absent
/// and `CalculationError::InvalidFeedInput` for a dry-matter percentage outside 0-100
pub fn validate_line(
    feed: &FeedDefinition,
    input: &FeedInput,
    standards: &NutritionStandards,
) -> Result<(), CalculationError> {
    if !input.is_fed() {
        return Ok(());
    }
    if !input.amount_kg.is_finite() {
        return Err(CalculationError::invalid_feed_input(
            &feed.name,
            format!("amount must be a finite number, got {}", input.amount_kg),
        ));
    }
    let fallbacks = &standards.evaluation.fallbacks;
    feed.nutrients(fallbacks.structure_value, fallbacks.filling_value)?;
    input.effective_ds_percent(feed)?;
    Ok(())
}

fn nutrient_step(
    label: &str,
    feed: &FeedDefinition,
    per_unit: f64,
    multiplier: f64,
    unit: &str,
    defaulted: bool,
) -> CalculationStep {
    let multiplier_name = match feed.basis {
        FeedBasis::PerKgDryMatter => "dry_matter_kg",
        FeedBasis::PerKgProduct => "amount_kg",
    };
    let mut calculation = format!("{} x {}", format_value(per_unit), format_value(multiplier));
    if defaulted {
        calculation.push_str(" (default value)");
    }

    CalculationStep::builder(format!("{} {label}", feed.display_name))
        .formula(format!("{label} {} x {multiplier_name}", feed.basis))
        .input(format!("{label}_per_unit"), per_unit)
        .input(multiplier_name, multiplier)
        .calculation(calculation)
        .unit(unit)
        .source(sources::FEED_TABLE)
        .build(per_unit * multiplier)
}

/// Compute the contribution of one ration line
///
/// Returns `Ok(None)` for a line with amount <= 0: such a feed is not fed and
/// produces no contribution at all.
///
/// # Errors
///
/// Returns `CalculationError::MissingFeedData` when VEM, DVE or OEB is absent
/// and `CalculationError::InvalidFeedInput` for a dry-matter percentage outside 0-100
pub fn contribution_for(
    feed: &FeedDefinition,
    input: &FeedInput,
    standards: &NutritionStandards,
) -> Result<Option<FeedContribution>, CalculationError> {
    if !input.is_fed() {
        debug!(
            feed = %feed.name,
            amount_kg = input.amount_kg,
            "Feed not fed, excluded from ration"
        );
        return Ok(None);
    }
    validate_line(feed, input, standards)?;

    let fallbacks = &standards.evaluation.fallbacks;
    let FeedNutrients {
        vem,
        dve,
        oeb,
        sw,
        vw,
        sw_defaulted,
        vw_defaulted,
    } = feed.nutrients(fallbacks.structure_value, fallbacks.filling_value)?;
    let ds_percent = input.effective_ds_percent(feed)?;

    let dry_matter_kg = input.amount_kg * ds_percent / 100.0;
    let dry_matter = CalculationStep::builder(format!("{} dry matter", feed.display_name))
        .formula("amount x DS% / 100")
        .input("amount_kg", input.amount_kg)
        .input("ds_percent", ds_percent)
        .calculation(format!(
            "{} x {} / 100",
            format_value(input.amount_kg),
            format_value(ds_percent)
        ))
        .unit(units::KG_DRY_MATTER)
        .source(sources::FEED_TABLE)
        .build(dry_matter_kg);

    let multiplier = match feed.basis {
        FeedBasis::PerKgDryMatter => dry_matter_kg,
        FeedBasis::PerKgProduct => input.amount_kg,
    };

    Ok(Some(FeedContribution {
        feed_name: feed.name.clone(),
        display_name: feed.display_name.clone(),
        basis: feed.basis,
        amount_kg: input.amount_kg,
        ds_percent,
        vem: nutrient_step("VEM", feed, vem, multiplier, units::VEM, false),
        dve: nutrient_step("DVE", feed, dve, multiplier, units::GRAMS_PER_DAY, false),
        oeb: nutrient_step("OEB", feed, oeb, multiplier, units::GRAMS_PER_DAY, false),
        sw: nutrient_step(
            "SW",
            feed,
            sw,
            multiplier,
            units::STRUCTURE_UNITS,
            sw_defaulted,
        ),
        vw: nutrient_step(
            "VW",
            feed,
            vw,
            multiplier,
            units::FILLING_UNITS,
            vw_defaulted,
        ),
        dry_matter,
        sw_defaulted,
        vw_defaulted,
    }))
}
