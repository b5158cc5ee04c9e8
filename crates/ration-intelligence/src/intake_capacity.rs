// ABOUTME: Voluntary intake capacity (VOC) calculation and ration saturation assessment
// ABOUTME: Lactation age, maturity, lactation and pregnancy components in filling-value units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intake Capacity Module
//!
//! The voluntary intake capacity is the filling value a cow can take in per
//! day. It is built from a maturity component driven by lactation age, a
//! lactation component that rises after calving and then slowly declines, and
//! a pregnancy component that lowers capacity in late gestation.
//!
//! # Scientific References
//!
//! - Zom, R.L.G., et al. (2012). Development of a model for the prediction of feed
//!   intake by dairy cows. *Livestock Science*, 143, 43-57.

use crate::audit::{format_value, AuditTrail, CalculationStep};
use crate::config::standards::NutritionStandards;
use ration_core::constants::{sources, units};
use ration_core::errors::CalculationError;
use ration_core::models::AnimalProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Saturation status of the intake capacity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VocStatus {
    /// Ration fits within capacity
    Ok,
    /// Ration slightly exceeds capacity, within tolerance
    Warning,
    /// Ration exceeds capacity beyond tolerance
    Exceeded,
}

impl VocStatus {
    /// Classify a saturation percentage
    #[must_use]
    pub fn from_saturation(saturation_percent: f64, tolerance_percent: f64) -> Self {
        if saturation_percent <= 100.0 {
            Self::Ok
        } else if saturation_percent <= tolerance_percent {
            Self::Warning
        } else {
            Self::Exceeded
        }
    }

    /// Lowercase label used in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }
}

impl fmt::Display for VocStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Intake capacity before it is compared with a ration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocCapacity {
    /// Intermediate steps, in evaluation order
    pub steps: Vec<CalculationStep>,
    /// Capacity in filling-value units
    pub capacity_vw: f64,
    /// Capacity in kilograms dry matter
    pub capacity_kg_ds: f64,
    /// Whether the animal is grazing
    pub is_grazing: bool,
}

/// Intake capacity compared with the filling value of a ration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocResult {
    /// Intermediate steps, in evaluation order, ending with the saturation step
    pub steps: Vec<CalculationStep>,
    /// Capacity in filling-value units
    pub capacity_vw: f64,
    /// Capacity in kilograms dry matter
    pub capacity_kg_ds: f64,
    /// Filling value supplied by the ration
    pub total_vw_supplied: f64,
    /// Supplied filling value as a percentage of capacity
    pub saturation_percent: f64,
    /// Saturation status
    pub status: VocStatus,
    /// Whether the animal is grazing
    pub is_grazing: bool,
}

/// Compute the intake capacity of an animal
///
/// Formula:
/// - LA = 24 + 13 x (parity - 1) months
/// - maturity = 12.0 - 2.8 x e^(-0.0621 x (LA - 24))
/// - lactation = 4.8 x (1 - e^(-0.06 x DIM)) - 0.006 x DIM (lactating only)
/// - pregnancy = -0.008 x (DP - 150) when DP > 150
/// - VOC = maturity + lactation + pregnancy; kg DS = VOC / 0.75
///
/// The grazing flag is recorded on the total step; it does not change capacity.
///
/// # Reference
/// Zom et al. (2012)
///
/// # Errors
///
/// Returns `CalculationError::InvalidCapacity` when the capacity is zero or negative
pub fn compute_voc_capacity(
    profile: &AnimalProfile,
    is_grazing: bool,
    standards: &NutritionStandards,
) -> Result<VocCapacity, CalculationError> {
    let voc = &standards.intake;
    let mut trail = AuditTrail::new();

    let parity = f64::from(profile.parity);
    let lactation_age = trail.record(
        CalculationStep::builder("Lactation age")
            .formula("first_calving_age + calving_interval x (parity - 1)")
            .input("parity", parity)
            .input("first_calving_age", voc.first_calving_age_months)
            .input("calving_interval", voc.calving_interval_months)
            .calculation(format!(
                "{} + {} x ({} - 1)",
                format_value(voc.first_calving_age_months),
                format_value(voc.calving_interval_months),
                profile.parity
            ))
            .unit(units::MONTHS)
            .source(sources::VOC)
            .build(
                voc.calving_interval_months
                    .mul_add(parity - 1.0, voc.first_calving_age_months),
            ),
    );

    let age_offset = lactation_age - voc.first_calving_age_months;
    let maturity = trail.record(
        CalculationStep::builder("VOC maturity component")
            .formula("max - deficit x e^(-rate x (LA - first_calving_age))")
            .input("lactation_age", lactation_age)
            .input("max", voc.maturity_max)
            .input("deficit", voc.maturity_deficit)
            .input("rate", voc.maturity_rate)
            .calculation(format!(
                "{} - {} x e^(-{} x {})",
                format_value(voc.maturity_max),
                format_value(voc.maturity_deficit),
                format_value(voc.maturity_rate),
                format_value(age_offset)
            ))
            .unit(units::FILLING_UNITS)
            .source(sources::VOC)
            .build(
                voc.maturity_deficit
                    .mul_add(-(-voc.maturity_rate * age_offset).exp(), voc.maturity_max),
            ),
    );

    let dim = f64::from(profile.days_in_milk);
    let lactation_value = if profile.is_lactating {
        voc.lactation_amplitude.mul_add(
            1.0 - (-voc.lactation_rate * dim).exp(),
            -voc.lactation_decline * dim,
        )
    } else {
        0.0
    };
    let lactation = trail.record(
        CalculationStep::builder("VOC lactation component")
            .formula("amplitude x (1 - e^(-rate x DIM)) - decline x DIM (lactating only)")
            .input("days_in_milk", dim)
            .input("amplitude", voc.lactation_amplitude)
            .input("rate", voc.lactation_rate)
            .input("decline", voc.lactation_decline)
            .calculation(if profile.is_lactating {
                format!(
                    "{} x (1 - e^(-{} x {})) - {} x {}",
                    format_value(voc.lactation_amplitude),
                    format_value(voc.lactation_rate),
                    profile.days_in_milk,
                    format_value(voc.lactation_decline),
                    profile.days_in_milk
                )
            } else {
                "not lactating: 0".to_owned()
            })
            .unit(units::FILLING_UNITS)
            .source(sources::VOC)
            .build(lactation_value),
    );

    let days_over = profile.days_pregnant - voc.pregnancy_threshold_days;
    let pregnancy = trail.record(
        CalculationStep::builder("VOC pregnancy component")
            .formula(format!(
                "-rate x (DP - {}) when DP > {}, else 0",
                voc.pregnancy_threshold_days, voc.pregnancy_threshold_days
            ))
            .input("days_pregnant", f64::from(profile.days_pregnant))
            .input("rate", voc.pregnancy_rate)
            .calculation(if days_over > 0 {
                format!(
                    "-{} x ({} - {})",
                    format_value(voc.pregnancy_rate),
                    profile.days_pregnant,
                    voc.pregnancy_threshold_days
                )
            } else {
                format!(
                    "{} <= {}: 0",
                    profile.days_pregnant, voc.pregnancy_threshold_days
                )
            })
            .unit(units::FILLING_UNITS)
            .source(sources::VOC)
            .build(if days_over > 0 {
                -voc.pregnancy_rate * f64::from(days_over)
            } else {
                0.0
            }),
    );

    let capacity_vw = trail.record(
        CalculationStep::builder("VOC total")
            .formula("maturity + lactation + pregnancy")
            .input("maturity", maturity)
            .input("lactation", lactation)
            .input("pregnancy", pregnancy)
            .input("is_grazing", if is_grazing { 1.0 } else { 0.0 })
            .calculation(format!(
                "{} + {} + {}",
                format_value(maturity),
                format_value(lactation),
                format_value(pregnancy)
            ))
            .unit(units::FILLING_UNITS)
            .source(sources::VOC)
            .build(maturity + lactation + pregnancy),
    );

    if !capacity_vw.is_finite() || capacity_vw <= 0.0 {
        return Err(CalculationError::InvalidCapacity {
            capacity: capacity_vw,
        });
    }

    let capacity_kg_ds = trail.record(
        CalculationStep::builder("VOC in kg DS")
            .formula("VOC / reference_vw_per_kg_ds")
            .input("voc", capacity_vw)
            .input("reference_vw_per_kg_ds", voc.reference_vw_per_kg_ds)
            .calculation(format!(
                "{} / {}",
                format_value(capacity_vw),
                format_value(voc.reference_vw_per_kg_ds)
            ))
            .unit(units::KG_DRY_MATTER)
            .source(sources::VOC)
            .build(capacity_vw / voc.reference_vw_per_kg_ds),
    );

    Ok(VocCapacity {
        steps: trail.into_steps(),
        capacity_vw,
        capacity_kg_ds,
        is_grazing,
    })
}

/// Compare a capacity with the filling value supplied by a ration
///
/// Formula: saturation = VW supplied / VOC x 100
#[must_use]
pub fn assess_saturation(
    capacity: VocCapacity,
    total_vw_supplied: f64,
    standards: &NutritionStandards,
) -> VocResult {
    let tolerance = standards.intake.tolerance_percent;
    let saturation_percent = total_vw_supplied / capacity.capacity_vw * 100.0;
    let status = VocStatus::from_saturation(saturation_percent, tolerance);

    let mut steps = capacity.steps;
    steps.push(
        CalculationStep::builder("VOC saturation")
            .formula("VW supplied / VOC x 100")
            .input("vw_supplied", total_vw_supplied)
            .input("voc", capacity.capacity_vw)
            .input("tolerance_percent", tolerance)
            .calculation(format!(
                "{} / {} x 100 ({status})",
                format_value(total_vw_supplied),
                format_value(capacity.capacity_vw)
            ))
            .unit(units::PERCENT)
            .source(sources::VOC)
            .build(saturation_percent),
    );

    VocResult {
        steps,
        capacity_vw: capacity.capacity_vw,
        capacity_kg_ds: capacity.capacity_kg_ds,
        total_vw_supplied,
        saturation_percent,
        status,
        is_grazing: capacity.is_grazing,
    }
}

/// Compute the intake capacity and its saturation by a ration in one call
///
/// # Errors
///
/// Returns `CalculationError::InvalidCapacity` when the capacity is zero or negative
pub fn compute_voc(
    profile: &AnimalProfile,
    is_grazing: bool,
    total_vw_supplied: f64,
    standards: &NutritionStandards,
) -> Result<VocResult, CalculationError> {
    let capacity = compute_voc_capacity(profile, is_grazing, standards)?;
    Ok(assess_saturation(capacity, total_vw_supplied, standards))
}
