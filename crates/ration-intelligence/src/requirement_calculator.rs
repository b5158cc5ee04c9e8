// ABOUTME: Energy (VEM) and protein (DVE) requirement calculation for dairy cows
// ABOUTME: Factorial maintenance, production, pregnancy, growth and grazing terms with audit steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Requirement Calculator Module
//!
//! Computes the daily VEM and DVE requirement of one animal as a factorial sum.
//! Every term, including zero-valued ones, is returned as a [`CalculationStep`]
//! so the report shows that each check took place.
//!
//! # Scientific References
//!
//! - CVB (2022). *Voedernormen landbouwhuisdieren*, tables 1.1-1.5.
//! - Van Es, A.J.H. (1978). Feed evaluation for ruminants I. *Livestock Production Science*, 5, 331-345.
//! - Tamminga, S., et al. (1994). The Dutch protein evaluation system: the DVE/OEB-system.
//!   *Livestock Production Science*, 40, 139-155.

use crate::algorithms::{ProductionSource, RequirementStrategy};
use crate::audit::{format_value, CalculationStep};
use crate::config::standards::{FpcmCoefficients, NutritionStandards, RequirementStandards};
use ration_core::constants::{sources, units};
use ration_core::errors::CalculationError;
use ration_core::models::{AnimalProfile, MilkProductionRecord, Nutrient};
use serde::{Deserialize, Serialize};

/// Dynamic-model correction of one nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementAdjustment {
    /// Multiplicative factor
    pub factor: CalculationStep,
    /// Additive correction derived from the factor
    pub correction: CalculationStep,
}

/// Requirement of one nutrient with every contributing step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientRequirement {
    /// VEM or DVE
    pub nutrient: Nutrient,
    /// Maintenance on metabolic body weight
    pub maintenance: CalculationStep,
    /// Milk production
    pub production: CalculationStep,
    /// Late-gestation allowance
    pub pregnancy: CalculationStep,
    /// Growth allowance for young cows
    pub growth: CalculationStep,
    /// Grazing activity allowance (VEM only)
    pub grazing: Option<CalculationStep>,
    /// Dynamic-model correction
    pub adjustment: Option<RequirementAdjustment>,
    /// Requirement total
    pub total: CalculationStep,
}

impl NutrientRequirement {
    /// Total requirement
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.total.result
    }

    /// All steps in report order
    #[must_use]
    pub fn steps(&self) -> Vec<&CalculationStep> {
        let mut steps = vec![
            &self.maintenance,
            &self.production,
            &self.pregnancy,
            &self.growth,
        ];
        if let Some(grazing) = &self.grazing {
            steps.push(grazing);
        }
        if let Some(adjustment) = &self.adjustment {
            steps.push(&adjustment.factor);
            steps.push(&adjustment.correction);
        }
        steps.push(&self.total);
        steps
    }
}

/// VEM and DVE requirements of one animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Requirement model that was applied
    pub strategy: RequirementStrategy,
    /// Where the milk figures came from
    pub production_source: ProductionSource,
    /// Fat-and-protein corrected milk
    pub fpcm: CalculationStep,
    /// Milk protein yield (g/day)
    pub protein_yield: CalculationStep,
    /// Energy requirement
    pub vem: NutrientRequirement,
    /// Protein requirement
    pub dve: NutrientRequirement,
}

/// Calculate fat-and-protein corrected milk
///
/// Formula: FPCM = milk x (0.337 + 0.116 x fat% + 0.06 x protein%)
///
/// # Reference
/// CVB Voedernormen 2022, Eq. 1.1
#[must_use]
pub fn calculate_fpcm(record: &MilkProductionRecord, coefficients: &FpcmCoefficients) -> f64 {
    record.milk_kg
        * coefficients.protein_coef.mul_add(
            record.protein_percent,
            coefficients
                .fat_coef
                .mul_add(record.fat_percent, coefficients.base),
        )
}

/// Calculate milk protein yield in grams per day
///
/// Formula: PY = milk x protein% x 10
#[must_use]
pub fn calculate_protein_yield(record: &MilkProductionRecord) -> f64 {
    record.milk_kg * record.protein_percent * 10.0
}

/// Calculate metabolic body weight (BW^exponent)
#[must_use]
pub fn metabolic_weight(body_weight_kg: f64, exponent: f64) -> f64 {
    body_weight_kg.powf(exponent)
}

fn fpcm_step(production: &ProductionSource, coefficients: &FpcmCoefficients) -> CalculationStep {
    let builder = CalculationStep::builder("FPCM")
        .formula("milk x (base + fat_coef x fat% + protein_coef x protein%)")
        .unit(units::KG_PER_DAY)
        .source(sources::FPCM);

    match production.record() {
        Some(record) => {
            let fpcm = calculate_fpcm(record, coefficients);
            builder
                .input("milk_kg", record.milk_kg)
                .input("fat_percent", record.fat_percent)
                .input("protein_percent", record.protein_percent)
                .calculation(format!(
                    "{} x ({} + {} x {} + {} x {}) [{}]",
                    format_value(record.milk_kg),
                    format_value(coefficients.base),
                    format_value(coefficients.fat_coef),
                    format_value(record.fat_percent),
                    format_value(coefficients.protein_coef),
                    format_value(record.protein_percent),
                    production.label()
                ))
                .build(fpcm)
        }
        None => builder
            .calculation(format!("no milk production ({})", production.label()))
            .build(0.0),
    }
}

fn protein_yield_step(production: &ProductionSource) -> CalculationStep {
    let builder = CalculationStep::builder("Protein yield")
        .formula("milk x protein% x 10")
        .unit(units::GRAMS_PER_DAY)
        .source(sources::PROTEIN_YIELD);

    match production.record() {
        Some(record) => builder
            .input("milk_kg", record.milk_kg)
            .input("protein_percent", record.protein_percent)
            .calculation(format!(
                "{} x {} x 10",
                format_value(record.milk_kg),
                format_value(record.protein_percent)
            ))
            .build(calculate_protein_yield(record)),
        None => builder
            .calculation(format!("no milk production ({})", production.label()))
            .build(0.0),
    }
}

fn maintenance_step(
    nutrient: Nutrient,
    profile: &AnimalProfile,
    coefficient: f64,
    config: &RequirementStandards,
    source: &str,
) -> CalculationStep {
    let exponent = config.metabolic_weight_exponent;
    let mbw = metabolic_weight(profile.body_weight_kg, exponent);
    let state = if profile.is_lactating {
        "lactating"
    } else {
        "dry"
    };

    CalculationStep::builder(format!("{nutrient} maintenance"))
        .formula(format!(
            "coefficient({state}) x BW^{}",
            format_value(exponent)
        ))
        .input("coefficient", coefficient)
        .input("body_weight_kg", profile.body_weight_kg)
        .input("exponent", exponent)
        .calculation(format!(
            "{} x {}^{} = {} x {}",
            format_value(coefficient),
            format_value(profile.body_weight_kg),
            format_value(exponent),
            format_value(coefficient),
            format_value(mbw)
        ))
        .unit(nutrient.unit())
        .source(source)
        .build(coefficient * mbw)
}

fn pregnancy_step(
    nutrient: Nutrient,
    profile: &AnimalProfile,
    allowance: f64,
    threshold: i32,
) -> CalculationStep {
    let applies = profile.days_pregnant >= threshold;
    let calculation = if applies {
        format!(
            "{} >= {}: {}",
            profile.days_pregnant,
            threshold,
            format_value(allowance)
        )
    } else {
        format!("{} < {}: 0", profile.days_pregnant, threshold)
    };

    CalculationStep::builder(format!("{nutrient} pregnancy"))
        .formula(format!("allowance if days_pregnant >= {threshold}, else 0"))
        .input("days_pregnant", f64::from(profile.days_pregnant))
        .input("threshold_days", f64::from(threshold))
        .input("allowance", allowance)
        .calculation(calculation)
        .unit(nutrient.unit())
        .source(sources::PREGNANCY)
        .build(if applies { allowance } else { 0.0 })
}

fn growth_step(
    nutrient: Nutrient,
    profile: &AnimalProfile,
    first: f64,
    second: f64,
    days_in_milk_limit: i32,
) -> CalculationStep {
    let young = profile.days_in_milk < days_in_milk_limit;
    let allowance = match profile.parity {
        1 if young => first,
        2 if young => second,
        _ => 0.0,
    };
    let calculation = if allowance > 0.0 {
        format!(
            "parity {}, DIM {} < {}: {}",
            profile.parity,
            profile.days_in_milk,
            days_in_milk_limit,
            format_value(allowance)
        )
    } else {
        format!(
            "parity {}, DIM {}: no growth allowance",
            profile.parity, profile.days_in_milk
        )
    };

    CalculationStep::builder(format!("{nutrient} growth"))
        .formula(format!(
            "allowance(parity) if parity in {{1, 2}} and DIM < {days_in_milk_limit}, else 0"
        ))
        .input("parity", f64::from(profile.parity))
        .input("days_in_milk", f64::from(profile.days_in_milk))
        .input("first_lactation_allowance", first)
        .input("second_lactation_allowance", second)
        .calculation(calculation)
        .unit(nutrient.unit())
        .source(sources::GROWTH)
        .build(allowance)
}

fn total_step(
    nutrient: Nutrient,
    terms: &[(&str, f64)],
    strategy: RequirementStrategy,
    static_target: Option<f64>,
) -> CalculationStep {
    let sum: f64 = terms.iter().map(|(_, value)| value).sum();
    let names: Vec<&str> = terms.iter().map(|(name, _)| *name).collect();
    let values: Vec<String> = terms
        .iter()
        .map(|(_, value)| format_value(*value))
        .collect();

    let mut builder = CalculationStep::builder(format!("{nutrient} requirement total"))
        .unit(nutrient.unit());
    for (name, value) in terms {
        builder = builder.input(*name, *value);
    }

    match (strategy, static_target) {
        (RequirementStrategy::StaticTarget, Some(target)) => builder
            .formula(format!(
                "target_{} (static target)",
                nutrient.label().to_lowercase()
            ))
            .input("target", target)
            .calculation(format!(
                "static target {} (factorial sum {} = {})",
                format_value(target),
                values.join(" + "),
                format_value(sum)
            ))
            .source(sources::STATIC_TARGET)
            .build(target),
        _ => builder
            .formula(names.join(" + "))
            .calculation(values.join(" + "))
            .source(sources::REQUIREMENT_TOTAL)
            .build(sum),
    }
}

/// Compute the VEM requirement
///
/// Formula: VEM = maintenance + production + pregnancy + growth + grazing
/// - maintenance = 53.0 (lactating) or 42.4 (dry) x BW^0.75
/// - production = 442 x FPCM
/// - pregnancy = 850 once days pregnant >= 190
/// - growth = 660 (parity 1) or 330 (parity 2) while DIM < 100
/// - grazing = 1175 when grazing
///
/// The dynamic strategy adds `(maintenance + production) x (factor - 1)` with
/// `factor = 1 + (FPCM - 15) x 0.00165`.
///
/// # Reference
/// CVB Voedernormen 2022, Table 1.1; Van Es (1978)
#[must_use]
pub fn compute_vem_requirement(
    profile: &AnimalProfile,
    strategy: RequirementStrategy,
    fpcm: f64,
    is_grazing: bool,
    standards: &NutritionStandards,
) -> NutrientRequirement {
    let config = &standards.requirements;
    let nutrient = Nutrient::Vem;

    let coefficient = if profile.is_lactating {
        config.vem.maintenance_lactating
    } else {
        config.vem.maintenance_dry
    };
    let maintenance = maintenance_step(
        nutrient,
        profile,
        coefficient,
        config,
        sources::VEM_MAINTENANCE,
    );

    let production = CalculationStep::builder("VEM production")
        .formula("per_kg_fpcm x FPCM")
        .input("per_kg_fpcm", config.vem.per_kg_fpcm)
        .input("fpcm_kg", fpcm)
        .calculation(format!(
            "{} x {}",
            format_value(config.vem.per_kg_fpcm),
            format_value(fpcm)
        ))
        .unit(units::VEM)
        .source(sources::VEM_PRODUCTION)
        .build(config.vem.per_kg_fpcm * fpcm);

    let pregnancy = pregnancy_step(
        nutrient,
        profile,
        config.pregnancy.vem,
        config.pregnancy.threshold_days,
    );
    let growth = growth_step(
        nutrient,
        profile,
        config.growth.first_lactation_vem,
        config.growth.second_lactation_vem,
        config.growth.days_in_milk_limit,
    );

    let grazing_allowance = if is_grazing {
        config.grazing.activity_vem
    } else {
        0.0
    };
    let grazing = CalculationStep::builder("VEM grazing")
        .formula("activity allowance if grazing, else 0")
        .input("is_grazing", if is_grazing { 1.0 } else { 0.0 })
        .input("allowance", config.grazing.activity_vem)
        .calculation(if is_grazing {
            format!("grazing: {}", format_value(config.grazing.activity_vem))
        } else {
            "not grazing: 0".to_owned()
        })
        .unit(units::VEM)
        .source(sources::GRAZING)
        .build(grazing_allowance);

    let adjustment = (strategy == RequirementStrategy::Dynamic).then(|| {
        let dynamic = &config.dynamic;
        let factor_value =
            (fpcm - dynamic.reference_fpcm_kg).mul_add(dynamic.feeding_level_slope, 1.0);
        let factor = CalculationStep::builder("VEM feeding-level factor")
            .formula("1 + (FPCM - reference) x slope")
            .input("fpcm_kg", fpcm)
            .input("reference_fpcm_kg", dynamic.reference_fpcm_kg)
            .input("slope", dynamic.feeding_level_slope)
            .calculation(format!(
                "1 + ({} - {}) x {}",
                format_value(fpcm),
                format_value(dynamic.reference_fpcm_kg),
                format_value(dynamic.feeding_level_slope)
            ))
            .unit(units::FACTOR)
            .source(sources::DYNAMIC_ADJUSTMENT)
            .build(factor_value);

        let base = maintenance.result + production.result;
        let correction = CalculationStep::builder("VEM feeding-level correction")
            .formula("(maintenance + production) x (factor - 1)")
            .input("maintenance", maintenance.result)
            .input("production", production.result)
            .input("factor", factor_value)
            .calculation(format!(
                "({} + {}) x ({} - 1)",
                format_value(maintenance.result),
                format_value(production.result),
                format_value(factor_value)
            ))
            .unit(units::VEM)
            .source(sources::DYNAMIC_ADJUSTMENT)
            .build(base * (factor_value - 1.0));

        RequirementAdjustment { factor, correction }
    });

    let mut terms = vec![
        ("maintenance", maintenance.result),
        ("production", production.result),
        ("pregnancy", pregnancy.result),
        ("growth", growth.result),
        ("grazing", grazing.result),
    ];
    if let Some(adjustment) = &adjustment {
        terms.push(("feeding_level_correction", adjustment.correction.result));
    }
    let total = total_step(nutrient, &terms, strategy, profile.target_vem);

    NutrientRequirement {
        nutrient,
        maintenance,
        production,
        pregnancy,
        growth,
        grazing: Some(grazing),
        adjustment,
        total,
    }
}

/// Compute the DVE requirement (g/day)
///
/// Formula: DVE = maintenance + production + pregnancy + growth
/// - maintenance = 2.90 (lactating) or 2.40 (dry) x BW^0.75
/// - production = 1.396 x PY + 0.000195 x PY^2, PY = milk protein yield (g/day)
/// - pregnancy = 150 once days pregnant >= 190
/// - growth = 100 (parity 1) or 50 (parity 2) while DIM < 100
///
/// The dynamic strategy multiplies the sum by a lactation-stage factor:
/// 1.05 before 100 DIM, 0.97 after 200 DIM, 1.00 in between.
///
/// # Reference
/// CVB Voedernormen 2022, Table 1.2; Tamminga et al. (1994)
#[must_use]
pub fn compute_dve_requirement(
    profile: &AnimalProfile,
    strategy: RequirementStrategy,
    protein_yield: f64,
    standards: &NutritionStandards,
) -> NutrientRequirement {
    let config = &standards.requirements;
    let nutrient = Nutrient::Dve;

    let coefficient = if profile.is_lactating {
        config.dve.maintenance_lactating
    } else {
        config.dve.maintenance_dry
    };
    let maintenance = maintenance_step(
        nutrient,
        profile,
        coefficient,
        config,
        sources::DVE_MAINTENANCE,
    );

    let linear = config.dve.production_linear;
    let quadratic = config.dve.production_quadratic;
    let production = CalculationStep::builder("DVE production")
        .formula("linear x PY + quadratic x PY^2")
        .input("linear", linear)
        .input("quadratic", quadratic)
        .input("protein_yield_g", protein_yield)
        .calculation(format!(
            "{} x {} + {} x {}^2",
            format_value(linear),
            format_value(protein_yield),
            format_value(quadratic),
            format_value(protein_yield)
        ))
        .unit(units::GRAMS_PER_DAY)
        .source(sources::DVE_PRODUCTION)
        .build(linear.mul_add(protein_yield, quadratic * protein_yield * protein_yield));

    let pregnancy = pregnancy_step(
        nutrient,
        profile,
        config.pregnancy.dve,
        config.pregnancy.threshold_days,
    );
    let growth = growth_step(
        nutrient,
        profile,
        config.growth.first_lactation_dve,
        config.growth.second_lactation_dve,
        config.growth.days_in_milk_limit,
    );

    let adjustment = (strategy == RequirementStrategy::Dynamic).then(|| {
        let dynamic = &config.dynamic;
        let (factor_value, stage) = if profile.days_in_milk < dynamic.early_lactation_days {
            (dynamic.early_lactation_dve_factor, "early lactation")
        } else if profile.days_in_milk > dynamic.late_lactation_days {
            (dynamic.late_lactation_dve_factor, "late lactation")
        } else {
            (1.0, "mid lactation")
        };
        let factor = CalculationStep::builder("DVE lactation-stage factor")
            .formula(format!(
                "early (DIM < {}) / mid / late (DIM > {}) factor",
                dynamic.early_lactation_days, dynamic.late_lactation_days
            ))
            .input("days_in_milk", f64::from(profile.days_in_milk))
            .input("early_factor", dynamic.early_lactation_dve_factor)
            .input("late_factor", dynamic.late_lactation_dve_factor)
            .calculation(format!(
                "DIM {}: {stage} = {}",
                profile.days_in_milk,
                format_value(factor_value)
            ))
            .unit(units::FACTOR)
            .source(sources::DYNAMIC_ADJUSTMENT)
            .build(factor_value);

        let base = maintenance.result + production.result + pregnancy.result + growth.result;
        let correction = CalculationStep::builder("DVE lactation-stage correction")
            .formula("(maintenance + production + pregnancy + growth) x (factor - 1)")
            .input("factorial_sum", base)
            .input("factor", factor_value)
            .calculation(format!(
                "{} x ({} - 1)",
                format_value(base),
                format_value(factor_value)
            ))
            .unit(units::GRAMS_PER_DAY)
            .source(sources::DYNAMIC_ADJUSTMENT)
            .build(base * (factor_value - 1.0));

        RequirementAdjustment { factor, correction }
    });

    let mut terms = vec![
        ("maintenance", maintenance.result),
        ("production", production.result),
        ("pregnancy", pregnancy.result),
        ("growth", growth.result),
    ];
    if let Some(adjustment) = &adjustment {
        terms.push(("lactation_stage_correction", adjustment.correction.result));
    }
    let total = total_step(nutrient, &terms, strategy, profile.target_dve);

    NutrientRequirement {
        nutrient,
        maintenance,
        production,
        pregnancy,
        growth,
        grazing: None,
        adjustment,
        total,
    }
}

/// Compute VEM and DVE requirements for one animal
///
/// Validates the profile and milk record before any arithmetic runs, resolves
/// the production source and selects the requirement strategy.
///
/// # Errors
///
/// Returns `CalculationError::InvalidProfile` for out-of-range physiological
/// input or a lactating animal without any production figure or static targets
pub fn compute_requirement(
    profile: &AnimalProfile,
    milk_record: Option<&MilkProductionRecord>,
    is_grazing: bool,
    standards: &NutritionStandards,
) -> Result<RequirementSet, CalculationError> {
    profile.validate()?;
    if let Some(record) = milk_record {
        record.validate()?;
    }

    let production_source = ProductionSource::resolve(profile, milk_record);
    let strategy = RequirementStrategy::select(profile, &production_source)?;

    let fpcm = fpcm_step(&production_source, &standards.requirements.fpcm);
    let protein_yield = protein_yield_step(&production_source);

    let vem = compute_vem_requirement(profile, strategy, fpcm.result, is_grazing, standards);
    let dve = compute_dve_requirement(profile, strategy, protein_yield.result, standards);

    Ok(RequirementSet {
        strategy,
        production_source,
        fpcm,
        protein_yield,
        vem,
        dve,
    })
}
