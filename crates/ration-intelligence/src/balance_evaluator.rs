// ABOUTME: Nutrient balance evaluation comparing ration supply against requirement
// ABOUTME: Coverage bands for VEM/DVE, threshold checks for OEB and structure value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Balance Evaluator Module
//!
//! VEM and DVE are ratio targets judged by percent coverage. OEB and SW are
//! thresholds: OEB must not be negative, SW per kg DS must reach a minimum.
//! Threshold nutrients never carry a coverage percentage.

use crate::audit::{format_value, CalculationStep};
use crate::config::standards::{CoverageBands, NutritionStandards, StructureNorm};
use crate::requirement_calculator::RequirementSet;
use crate::supply_aggregator::SupplyTotals;
use ration_core::constants::sources;
use ration_core::models::Nutrient;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one nutrient balance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    /// Requirement met
    Ok,
    /// Slightly short of the requirement
    Warning,
    /// Clearly short of the requirement
    Deficient,
}

impl BalanceStatus {
    /// Classify a coverage percentage; an undefined percentage is deficient
    #[must_use]
    pub fn from_coverage(percent: Option<f64>, bands: &CoverageBands) -> Self {
        match percent {
            Some(p) if p >= bands.ok_percent => Self::Ok,
            Some(p) if p >= bands.warning_percent => Self::Warning,
            _ => Self::Deficient,
        }
    }

    /// Classify a structure value per kg DS against the norm
    #[must_use]
    pub fn from_structure(sw_per_kg_ds: f64, norm: &StructureNorm) -> Self {
        if sw_per_kg_ds >= norm.minimum_per_kg_ds {
            Self::Ok
        } else if sw_per_kg_ds >= norm.minimum_per_kg_ds - norm.warning_margin {
            Self::Warning
        } else {
            Self::Deficient
        }
    }

    /// Lowercase label used in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Deficient => "deficient",
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Supply versus requirement of one nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientBalance {
    /// Nutrient parameter
    pub parameter: Nutrient,
    /// Requirement (or threshold)
    pub requirement: f64,
    /// Supply
    pub supply: f64,
    /// Supply minus requirement
    pub balance: f64,
    /// Coverage percentage, absent for thresholds and degenerate requirements
    pub balance_percent: Option<f64>,
    /// Unit of requirement and supply
    pub unit: String,
    /// Balance status
    pub status: BalanceStatus,
    /// Step that produced the supply figure
    pub supply_step: CalculationStep,
    /// Step that produced the balance and status
    pub balance_step: CalculationStep,
}

/// Coverage percentage, undefined for a non-positive requirement
#[must_use]
pub fn coverage_percent(supply: f64, requirement: f64) -> Option<f64> {
    (requirement > 0.0).then(|| supply / requirement * 100.0)
}

fn ratio_balance(
    nutrient: Nutrient,
    requirement: f64,
    supply_step: &CalculationStep,
    bands: &CoverageBands,
) -> NutrientBalance {
    let supply = supply_step.result;
    let balance = supply - requirement;
    let percent = coverage_percent(supply, requirement);
    let status = BalanceStatus::from_coverage(percent, bands);

    let calculation = percent.map_or_else(
        || {
            format!(
                "requirement {} <= 0: coverage undefined ({status})",
                format_value(requirement)
            )
        },
        |p| {
            format!(
                "{} - {} = {}; {} / {} x 100 = {}% ({status})",
                format_value(supply),
                format_value(requirement),
                format_value(balance),
                format_value(supply),
                format_value(requirement),
                format_value(p)
            )
        },
    );

    let balance_step = CalculationStep::builder(format!("{nutrient} balance"))
        .formula(format!(
            "supply - requirement; coverage = supply / requirement x 100 (ok >= {}%, warning >= {}%)",
            format_value(bands.ok_percent),
            format_value(bands.warning_percent)
        ))
        .input("supply", supply)
        .input("requirement", requirement)
        .calculation(calculation)
        .unit(nutrient.unit())
        .source(sources::COVERAGE)
        .build(balance);

    NutrientBalance {
        parameter: nutrient,
        requirement,
        supply,
        balance,
        balance_percent: percent,
        unit: nutrient.unit().to_owned(),
        status,
        supply_step: supply_step.clone(),
        balance_step,
    }
}

fn oeb_balance(supply_step: &CalculationStep) -> NutrientBalance {
    let nutrient = Nutrient::Oeb;
    let supply = supply_step.result;
    let status = if supply >= 0.0 {
        BalanceStatus::Ok
    } else {
        BalanceStatus::Deficient
    };

    let balance_step = CalculationStep::builder("OEB balance")
        .formula("supply >= 0")
        .input("supply", supply)
        .input("threshold", 0.0)
        .calculation(format!(
            "{} {} 0: {status}",
            format_value(supply),
            if supply >= 0.0 { ">=" } else { "<" }
        ))
        .unit(nutrient.unit())
        .source(sources::OEB_THRESHOLD)
        .build(supply);

    NutrientBalance {
        parameter: nutrient,
        requirement: 0.0,
        supply,
        balance: supply,
        balance_percent: None,
        unit: nutrient.unit().to_owned(),
        status,
        supply_step: supply_step.clone(),
        balance_step,
    }
}

fn structure_balance(supply_step: &CalculationStep, norm: &StructureNorm) -> NutrientBalance {
    let nutrient = Nutrient::Sw;
    let supply = supply_step.result;
    let minimum = norm.minimum_per_kg_ds;
    let balance = supply - minimum;
    let status = BalanceStatus::from_structure(supply, norm);

    let balance_step = CalculationStep::builder("SW balance")
        .formula(format!(
            "SW per kg DS >= {} (warning within {})",
            format_value(minimum),
            format_value(norm.warning_margin)
        ))
        .input("supply", supply)
        .input("minimum", minimum)
        .input("warning_margin", norm.warning_margin)
        .calculation(format!(
            "{} - {} = {} ({status})",
            format_value(supply),
            format_value(minimum),
            format_value(balance)
        ))
        .unit(nutrient.unit())
        .source(sources::STRUCTURE_NORM)
        .build(balance);

    NutrientBalance {
        parameter: nutrient,
        requirement: minimum,
        supply,
        balance,
        balance_percent: None,
        unit: nutrient.unit().to_owned(),
        status,
        supply_step: supply_step.clone(),
        balance_step,
    }
}

/// Evaluate every nutrient balance
///
/// Returns balances in the order VEM, DVE, OEB, SW.
#[must_use]
pub fn evaluate(
    requirements: &RequirementSet,
    supply: &SupplyTotals,
    standards: &NutritionStandards,
) -> Vec<NutrientBalance> {
    let evaluation = &standards.evaluation;
    vec![
        ratio_balance(
            Nutrient::Vem,
            requirements.vem.value(),
            &supply.vem,
            &evaluation.coverage,
        ),
        ratio_balance(
            Nutrient::Dve,
            requirements.dve.value(),
            &supply.dve,
            &evaluation.coverage,
        ),
        oeb_balance(&supply.oeb),
        structure_balance(&supply.sw_per_kg_ds, &evaluation.structure),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_bands() {
        let bands = CoverageBands::default();
        assert_eq!(
            BalanceStatus::from_coverage(Some(95.0), &bands),
            BalanceStatus::Ok
        );
        assert_eq!(
            BalanceStatus::from_coverage(Some(94.9), &bands),
            BalanceStatus::Warning
        );
        assert_eq!(
            BalanceStatus::from_coverage(Some(85.0), &bands),
            BalanceStatus::Warning
        );
        assert_eq!(
            BalanceStatus::from_coverage(Some(84.9), &bands),
            BalanceStatus::Deficient
        );
        assert_eq!(
            BalanceStatus::from_coverage(None, &bands),
            BalanceStatus::Deficient
        );
    }

    #[test]
    fn test_coverage_undefined_for_zero_requirement() {
        assert!(coverage_percent(100.0, 0.0).is_none());
        assert!(coverage_percent(100.0, -5.0).is_none());
        assert!((coverage_percent(50.0, 200.0).unwrap() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_structure_bands() {
        let norm = StructureNorm::default();
        assert_eq!(BalanceStatus::from_structure(1.0, &norm), BalanceStatus::Ok);
        assert_eq!(
            BalanceStatus::from_structure(0.95, &norm),
            BalanceStatus::Warning
        );
        assert_eq!(
            BalanceStatus::from_structure(0.85, &norm),
            BalanceStatus::Deficient
        );
    }
}
