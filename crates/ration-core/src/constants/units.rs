// ABOUTME: Units of measure for requirement, supply, and balance figures
// ABOUTME: VEM is dimensionless; DVE/OEB in grams per day; percentages are 0-100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Feed unit milk (energy)
pub const VEM: &str = "VEM";

/// Grams per day (DVE, OEB)
pub const GRAMS_PER_DAY: &str = "g/day";

/// Kilograms per day (milk, FPCM)
pub const KG_PER_DAY: &str = "kg/day";

/// Kilograms dry matter
pub const KG_DRY_MATTER: &str = "kg DS";

/// Kilograms as fed
pub const KG_PRODUCT: &str = "kg";

/// Filling-value units (intake capacity)
pub const FILLING_UNITS: &str = "VW";

/// Structure value units
pub const STRUCTURE_UNITS: &str = "SW";

/// Structure value per kilogram dry matter
pub const SW_PER_KG_DS: &str = "SW/kg DS";

/// Filling value per kilogram dry matter
pub const VW_PER_KG_DS: &str = "VW/kg DS";

/// Percent (0-100)
pub const PERCENT: &str = "%";

/// Months
pub const MONTHS: &str = "months";

/// Dimensionless factor
pub const FACTOR: &str = "factor";
