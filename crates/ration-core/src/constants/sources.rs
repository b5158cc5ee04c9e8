// ABOUTME: Citations for every formula the engine evaluates
// ABOUTME: Each calculation step carries one of these as its source reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Source citations
//!
//! # Scientific References
//!
//! - CVB (2022). *Tabellenboek Veevoeding: Voedernormen landbouwhuisdieren en
//!   voederwaarde veevoeders*. Centraal Veevoederbureau, Wageningen.
//! - Van Es, A.J.H. (1978). Feed evaluation for ruminants I. The systems in use
//!   from May 1977 onwards in the Netherlands. *Livestock Production Science*, 5, 331-345.
//! - Tamminga, S., et al. (1994). The Dutch protein evaluation system: the DVE/OEB-system.
//!   *Livestock Production Science*, 40, 139-155.
//! - Zom, R.L.G., et al. (2012). Development of a model for the prediction of feed intake
//!   by dairy cows. *Livestock Science*, 143, 43-57.

/// Energy maintenance requirement
pub const VEM_MAINTENANCE: &str = "CVB Voedernormen 2022, Table 1.1 (VEM maintenance)";

/// Energy production requirement
pub const VEM_PRODUCTION: &str = "CVB Voedernormen 2022, Table 1.1 (VEM per kg FPCM)";

/// Protein maintenance requirement
pub const DVE_MAINTENANCE: &str = "CVB Voedernormen 2022, Table 1.2 (DVE maintenance)";

/// Protein production requirement
pub const DVE_PRODUCTION: &str = "Tamminga et al. (1994), DVE/OEB system (DVE for milk protein)";

/// Pregnancy allowance
pub const PREGNANCY: &str = "CVB Voedernormen 2022, Table 1.3 (gestation allowance)";

/// Growth allowance for young cows
pub const GROWTH: &str = "CVB Voedernormen 2022, Table 1.4 (growth allowance parity 1-2)";

/// Grazing activity allowance
pub const GRAZING: &str = "CVB Voedernormen 2022, Table 1.5 (grazing activity allowance)";

/// Fat and protein corrected milk
pub const FPCM: &str = "CVB Voedernormen 2022, Eq. 1.1 (FPCM)";

/// Dynamic feeding-level and lactation-stage adjustment
pub const DYNAMIC_ADJUSTMENT: &str =
    "Van Es (1978), feeding-level correction; CVB lactation-stage protein adjustment";

/// Static requirement target provided on the profile
pub const STATIC_TARGET: &str = "Advisor-supplied static target (profile)";

/// Intake capacity model
pub const VOC: &str = "Zom et al. (2012), CVB intake capacity model (VOC)";

/// Feed values and contribution arithmetic
pub const FEED_TABLE: &str = "CVB Veevoedertabel 2022 (feed values)";

/// Structure value norm
pub const STRUCTURE_NORM: &str = "CVB Veevoedertabel 2022, structure value norm (SW)";

/// Ration aggregation
pub const RATION_TOTALS: &str = "Ration aggregation (sum of feed contributions)";

/// Grazing supply surcharge
pub const GRAZING_SUPPLY: &str = "CVB Voedernormen 2022, grazing intake allowance";

/// Milk protein yield
pub const PROTEIN_YIELD: &str = "Milk protein yield (milk x protein% x 10)";

/// Factorial requirement total
pub const REQUIREMENT_TOTAL: &str = "CVB Voedernormen 2022 (factorial requirement sum)";

/// Requirement coverage and status bands
pub const COVERAGE: &str = "CVB Voedernormen 2022 (requirement coverage bands)";

/// Rumen protein balance threshold
pub const OEB_THRESHOLD: &str = "Tamminga et al. (1994), OEB >= 0 threshold";
