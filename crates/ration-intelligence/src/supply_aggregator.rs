// ABOUTME: Ration-level supply totals from per-feed contributions
// ABOUTME: Sums dry matter and nutrients, weights SW/VW by dry matter, adds the grazing VEM surcharge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::audit::{format_value, CalculationStep};
use crate::config::standards::NutritionStandards;
use crate::feed_contribution::FeedContribution;
use ration_core::constants::{sources, units};
use serde::{Deserialize, Serialize};

/// Aggregated supply of a ration
///
/// An empty ration yields all-zero totals; that is a valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyTotals {
    /// Number of feeds actually fed
    pub feed_count: usize,
    /// Total dry matter (kg DS)
    pub dry_matter: CalculationStep,
    /// VEM from feeds
    pub feed_vem: CalculationStep,
    /// Grazing VEM surcharge (zero when not grazing)
    pub grazing_surcharge: CalculationStep,
    /// Total VEM including the surcharge
    pub vem: CalculationStep,
    /// Total DVE (g)
    pub dve: CalculationStep,
    /// Total OEB (g)
    pub oeb: CalculationStep,
    /// Total structure value
    pub sw: CalculationStep,
    /// Total filling value
    pub vw: CalculationStep,
    /// Dry-matter weighted structure value per kg DS
    pub sw_per_kg_ds: CalculationStep,
    /// Dry-matter weighted filling value per kg DS
    pub vw_per_kg_ds: CalculationStep,
}

impl SupplyTotals {
    /// All steps in report order
    #[must_use]
    pub fn steps(&self) -> [&CalculationStep; 10] {
        [
            &self.dry_matter,
            &self.feed_vem,
            &self.grazing_surcharge,
            &self.vem,
            &self.dve,
            &self.oeb,
            &self.sw,
            &self.vw,
            &self.sw_per_kg_ds,
            &self.vw_per_kg_ds,
        ]
    }
}

fn sum_step(
    name: &str,
    contributions: &[FeedContribution],
    select: impl Fn(&FeedContribution) -> &CalculationStep,
    unit: &str,
) -> CalculationStep {
    let values: Vec<f64> = contributions.iter().map(|c| select(c).result).collect();
    let calculation = if values.is_empty() {
        "no feeds: 0".to_owned()
    } else {
        values
            .iter()
            .map(|v| format_value(*v))
            .collect::<Vec<_>>()
            .join(" + ")
    };

    let mut builder = CalculationStep::builder(name)
        .formula("sum over fed feeds")
        .calculation(calculation)
        .unit(unit)
        .source(sources::RATION_TOTALS);
    for contribution in contributions {
        builder = builder.input(contribution.feed_name.clone(), select(contribution).result);
    }
    builder.build(values.iter().fold(0.0, |acc, v| acc + v))
}

fn per_kg_ds_step(
    name: &str,
    total: &CalculationStep,
    dry_matter: f64,
    unit: &str,
) -> CalculationStep {
    let builder = CalculationStep::builder(name)
        .formula("sum(value x DS share) = total / dry matter")
        .input("total", total.result)
        .input("dry_matter_kg", dry_matter)
        .unit(unit)
        .source(sources::RATION_TOTALS);

    if dry_matter > 0.0 {
        builder
            .calculation(format!(
                "{} / {}",
                format_value(total.result),
                format_value(dry_matter)
            ))
            .build(total.result / dry_matter)
    } else {
        builder.calculation("no dry matter: 0").build(0.0)
    }
}

/// Aggregate feed contributions into ration totals
///
/// SW and VW per kg DS are weighted by each feed's dry-matter share. The
/// grazing surcharge changes the VEM total only.
#[must_use]
pub fn aggregate(
    contributions: &[FeedContribution],
    is_grazing: bool,
    standards: &NutritionStandards,
) -> SupplyTotals {
    let dry_matter = sum_step(
        "Total dry matter",
        contributions,
        |c| &c.dry_matter,
        units::KG_DRY_MATTER,
    );
    let feed_vem = sum_step("VEM from feeds", contributions, |c| &c.vem, units::VEM);

    let surcharge = standards.requirements.grazing.supply_surcharge_vem;
    let grazing_surcharge = CalculationStep::builder("Grazing VEM surcharge")
        .formula("surcharge if grazing, else 0")
        .input("is_grazing", if is_grazing { 1.0 } else { 0.0 })
        .input("surcharge", surcharge)
        .calculation(if is_grazing {
            format!("grazing: {}", format_value(surcharge))
        } else {
            "not grazing: 0".to_owned()
        })
        .unit(units::VEM)
        .source(sources::GRAZING_SUPPLY)
        .build(if is_grazing { surcharge } else { 0.0 });

    let vem = CalculationStep::builder("Total VEM supply")
        .formula("VEM from feeds + grazing surcharge")
        .input("feed_vem", feed_vem.result)
        .input("grazing_surcharge", grazing_surcharge.result)
        .calculation(format!(
            "{} + {}",
            format_value(feed_vem.result),
            format_value(grazing_surcharge.result)
        ))
        .unit(units::VEM)
        .source(sources::RATION_TOTALS)
        .build(feed_vem.result + grazing_surcharge.result);

    let dve = sum_step("Total DVE supply", contributions, |c| &c.dve, units::GRAMS_PER_DAY);
    let oeb = sum_step("Total OEB supply", contributions, |c| &c.oeb, units::GRAMS_PER_DAY);
    let sw = sum_step("Total SW supply", contributions, |c| &c.sw, units::STRUCTURE_UNITS);
    let vw = sum_step("Total VW supply", contributions, |c| &c.vw, units::FILLING_UNITS);

    let sw_per_kg_ds = per_kg_ds_step("SW per kg DS", &sw, dry_matter.result, units::SW_PER_KG_DS);
    let vw_per_kg_ds = per_kg_ds_step("VW per kg DS", &vw, dry_matter.result, units::VW_PER_KG_DS);

    SupplyTotals {
        feed_count: contributions.len(),
        dry_matter,
        feed_vem,
        grazing_surcharge,
        vem,
        dve,
        oeb,
        sw,
        vw,
        sw_per_kg_ds,
        vw_per_kg_ds,
    }
}
