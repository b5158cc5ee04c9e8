// ABOUTME: Requirement coefficients for energy (VEM) and protein (DVE)
// ABOUTME: Maintenance, production, pregnancy, growth, grazing, and dynamic adjustment settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Requirement Coefficients
//!
//! Factorial requirement model: the daily requirement is the sum of a
//! maintenance term on metabolic body weight, a production term on milk, and
//! fixed allowances for late gestation, growth of young cows, and grazing.
//!
//! # Scientific References
//!
//! - CVB (2022). Voedernormen landbouwhuisdieren, tables 1.1-1.5
//! - Tamminga, S., et al. (1994). The Dutch protein evaluation system: the DVE/OEB-system.
//!   *Livestock Production Science*, 40, 139-155.

use serde::{Deserialize, Serialize};

/// Energy (VEM) requirement coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VemCoefficients {
    /// Maintenance per kg metabolic weight, lactating cow: 53.0
    pub maintenance_lactating: f64,
    /// Maintenance per kg metabolic weight, dry cow: 42.4
    pub maintenance_dry: f64,
    /// VEM per kg fat-and-protein corrected milk: 442
    pub per_kg_fpcm: f64,
}

impl Default for VemCoefficients {
    fn default() -> Self {
        Self {
            maintenance_lactating: 53.0,
            maintenance_dry: 42.4,
            per_kg_fpcm: 442.0,
        }
    }
}

/// Protein (DVE) requirement coefficients
///
/// Production: `DVE = linear x PY + quadratic x PY^2` with PY the milk protein yield in g/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DveCoefficients {
    /// Maintenance per kg metabolic weight, lactating cow (g): 2.90
    pub maintenance_lactating: f64,
    /// Maintenance per kg metabolic weight, dry cow (g): 2.40
    pub maintenance_dry: f64,
    /// Linear production coefficient: 1.396
    pub production_linear: f64,
    /// Quadratic production coefficient: 0.000195
    pub production_quadratic: f64,
}

impl Default for DveCoefficients {
    fn default() -> Self {
        Self {
            maintenance_lactating: 2.90,
            maintenance_dry: 2.40,
            production_linear: 1.396,
            production_quadratic: 0.000_195,
        }
    }
}

/// Fat-and-protein corrected milk coefficients
///
/// `FPCM = milk x (base + fat_coef x fat% + protein_coef x protein%)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FpcmCoefficients {
    /// Constant term: 0.337
    pub base: f64,
    /// Fat percentage coefficient: 0.116
    pub fat_coef: f64,
    /// Protein percentage coefficient: 0.06
    pub protein_coef: f64,
}

impl Default for FpcmCoefficients {
    fn default() -> Self {
        Self {
            base: 0.337,
            fat_coef: 0.116,
            protein_coef: 0.06,
        }
    }
}

/// Late-gestation allowance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyAllowance {
    /// First day of gestation that receives the allowance: 190
    pub threshold_days: i32,
    /// Energy addend (VEM): 850
    pub vem: f64,
    /// Protein addend (g DVE): 150
    pub dve: f64,
}

impl Default for PregnancyAllowance {
    fn default() -> Self {
        Self {
            threshold_days: 190,
            vem: 850.0,
            dve: 150.0,
        }
    }
}

/// Growth allowance for first- and second-lactation cows early in lactation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthAllowance {
    /// Allowance applies while days in milk stays below this limit: 100
    pub days_in_milk_limit: i32,
    /// First lactation energy addend (VEM): 660
    pub first_lactation_vem: f64,
    /// First lactation protein addend (g DVE): 100
    pub first_lactation_dve: f64,
    /// Second lactation energy addend (VEM): 330
    pub second_lactation_vem: f64,
    /// Second lactation protein addend (g DVE): 50
    pub second_lactation_dve: f64,
}

impl Default for GrowthAllowance {
    fn default() -> Self {
        Self {
            days_in_milk_limit: 100,
            first_lactation_vem: 660.0,
            first_lactation_dve: 100.0,
            second_lactation_vem: 330.0,
            second_lactation_dve: 50.0,
        }
    }
}

/// Grazing settings: activity requirement and supply surcharge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrazingAllowance {
    /// Extra energy requirement for walking and grazing activity (VEM): 1175
    pub activity_vem: f64,
    /// Energy credited to supply for unmeasured pasture intake (VEM): 1000
    pub supply_surcharge_vem: f64,
}

impl Default for GrazingAllowance {
    fn default() -> Self {
        Self {
            activity_vem: 1175.0,
            supply_surcharge_vem: 1000.0,
        }
    }
}

/// Dynamic requirement model settings
///
/// VEM: feeding-level correction `1 + (FPCM - reference) x slope` on maintenance + production.
/// DVE: lactation-stage factor on the summed factorial terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicAdjustment {
    /// Reference FPCM for the feeding-level correction (kg): 15
    pub reference_fpcm_kg: f64,
    /// Feeding-level slope per kg FPCM: 0.00165
    pub feeding_level_slope: f64,
    /// Early lactation ends at this many days in milk: 100
    pub early_lactation_days: i32,
    /// Late lactation starts after this many days in milk: 200
    pub late_lactation_days: i32,
    /// DVE factor in early lactation: 1.05
    pub early_lactation_dve_factor: f64,
    /// DVE factor in late lactation: 0.97
    pub late_lactation_dve_factor: f64,
}

impl Default for DynamicAdjustment {
    fn default() -> Self {
        Self {
            reference_fpcm_kg: 15.0,
            feeding_level_slope: 0.001_65,
            early_lactation_days: 100,
            late_lactation_days: 200,
            early_lactation_dve_factor: 1.05,
            late_lactation_dve_factor: 0.97,
        }
    }
}

/// All requirement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementStandards {
    /// Exponent for metabolic body weight: 0.75
    pub metabolic_weight_exponent: f64,
    /// Energy coefficients
    pub vem: VemCoefficients,
    /// Protein coefficients
    pub dve: DveCoefficients,
    /// FPCM coefficients
    pub fpcm: FpcmCoefficients,
    /// Late-gestation allowance
    pub pregnancy: PregnancyAllowance,
    /// Growth allowance
    pub growth: GrowthAllowance,
    /// Grazing settings
    pub grazing: GrazingAllowance,
    /// Dynamic model settings
    pub dynamic: DynamicAdjustment,
}

impl Default for RequirementStandards {
    fn default() -> Self {
        Self {
            metabolic_weight_exponent: 0.75,
            vem: VemCoefficients::default(),
            dve: DveCoefficients::default(),
            fpcm: FpcmCoefficients::default(),
            pregnancy: PregnancyAllowance::default(),
            growth: GrowthAllowance::default(),
            grazing: GrazingAllowance::default(),
            dynamic: DynamicAdjustment::default(),
        }
    }
}
