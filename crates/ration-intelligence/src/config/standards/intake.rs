// ABOUTME: Intake capacity (VOC) model parameters
// ABOUTME: Maturity, lactation, and pregnancy components plus saturation tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intake Capacity Configuration
//!
//! Reference: Zom, R.L.G., et al. (2012). Development of a model for the
//! prediction of feed intake by dairy cows. *Livestock Science*, 143, 43-57.

use serde::{Deserialize, Serialize};

/// Voluntary intake capacity model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocStandards {
    /// Age at first calving (months): 24
    pub first_calving_age_months: f64,
    /// Calving interval (months): 13
    pub calving_interval_months: f64,
    /// Capacity of a fully mature cow (VW): 12.0
    pub maturity_max: f64,
    /// Capacity deficit of a first-calf heifer (VW): 2.8
    pub maturity_deficit: f64,
    /// Maturation rate per month of lactation age: 0.0621
    pub maturity_rate: f64,
    /// Lactation component asymptote (VW): 4.8
    pub lactation_amplitude: f64,
    /// Lactation component rise rate per day in milk: 0.06
    pub lactation_rate: f64,
    /// Lactation component decline per day in milk (VW): 0.006
    pub lactation_decline: f64,
    /// Days pregnant after which capacity declines: 150
    pub pregnancy_threshold_days: i32,
    /// Capacity decline per day pregnant past the threshold (VW): 0.008
    pub pregnancy_rate: f64,
    /// Filling value of the reference ration per kg dry matter: 0.75
    pub reference_vw_per_kg_ds: f64,
    /// Saturation above 100% still reported as warning up to this percentage: 105
    pub tolerance_percent: f64,
}

impl Default for VocStandards {
    fn default() -> Self {
        Self {
            first_calving_age_months: 24.0,
            calving_interval_months: 13.0,
            maturity_max: 12.0,
            maturity_deficit: 2.8,
            maturity_rate: 0.0621,
            lactation_amplitude: 4.8,
            lactation_rate: 0.06,
            lactation_decline: 0.006,
            pregnancy_threshold_days: 150,
            pregnancy_rate: 0.008,
            reference_vw_per_kg_ds: 0.75,
            tolerance_percent: 105.0,
        }
    }
}
