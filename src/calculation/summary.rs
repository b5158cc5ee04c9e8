// ABOUTME: Summary block of a ration calculation for quick display
// ABOUTME: Rounded coverage percentages, VOC utilization, SW status and overall adequacy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ration_core::models::Nutrient;
use ration_intelligence::balance_evaluator::{BalanceStatus, NutrientBalance};
use ration_intelligence::intake_capacity::{VocResult, VocStatus};
use ration_intelligence::supply_aggregator::SupplyTotals;
use serde::{Deserialize, Serialize};

/// Headline figures of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationSummary {
    /// VEM coverage (%), one decimal; absent when the requirement is not positive
    pub vem_coverage_percent: Option<f64>,
    /// VEM status
    pub vem_status: BalanceStatus,
    /// DVE coverage (%), one decimal; absent when the requirement is not positive
    pub dve_coverage_percent: Option<f64>,
    /// DVE status
    pub dve_status: BalanceStatus,
    /// OEB status
    pub oeb_status: BalanceStatus,
    /// Intake capacity utilization (%), one decimal
    pub voc_utilization_percent: f64,
    /// Intake capacity status
    pub voc_status: VocStatus,
    /// Structure value per kg DS, two decimals
    pub sw_per_kg_ds: f64,
    /// Structure value status
    pub sw_status: BalanceStatus,
    /// Total dry matter fed (kg DS), two decimals
    pub dry_matter_kg: f64,
    /// Every balance is ok and the intake capacity is not exceeded
    pub adequate: bool,
}

/// Round for display
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    // adding +0.0 turns -0.0 into +0.0
    (value * factor).round() / factor + 0.0
}

impl CalculationSummary {
    /// Build the summary from the evaluated parts
    #[must_use]
    pub fn from_parts(
        balances: &[NutrientBalance],
        voc: &VocResult,
        totals: &SupplyTotals,
    ) -> Self {
        let find = |n: Nutrient| balances.iter().find(|b| b.parameter == n);
        let status = |n: Nutrient| find(n).map_or(BalanceStatus::Deficient, |b| b.status);
        let coverage = |n: Nutrient| {
            find(n)
                .and_then(|b| b.balance_percent)
                .map(|p| round_to(p, 1))
        };

        let all_ok = !balances.is_empty() && balances.iter().all(|b| b.status == BalanceStatus::Ok);

        Self {
            vem_coverage_percent: coverage(Nutrient::Vem),
            vem_status: status(Nutrient::Vem),
            dve_coverage_percent: coverage(Nutrient::Dve),
            dve_status: status(Nutrient::Dve),
            oeb_status: status(Nutrient::Oeb),
            voc_utilization_percent: round_to(voc.saturation_percent, 1),
            voc_status: voc.status,
            sw_per_kg_ds: round_to(totals.sw_per_kg_ds.result, 2),
            sw_status: status(Nutrient::Sw),
            dry_matter_kg: round_to(totals.dry_matter.result, 2),
            adequate: all_ok && voc.status != VocStatus::Exceeded,
        }
    }
}
