// ABOUTME: Animal profile and milk production models for requirement calculations
// ABOUTME: AnimalProfile, MilkProductionRecord, ProductionDefaults with input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::CalculationError;
use serde::{Deserialize, Serialize};

/// Last day of a standard lactation
pub const MAX_DAYS_IN_MILK: i32 = 305;

/// Length of a full gestation in days
pub const MAX_DAYS_PREGNANT: i32 = 283;

/// Physiological state of one animal (or a representative animal of a group)
///
/// Created by the caller and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalProfile {
    /// Identity or descriptive name (display only, never parsed)
    pub name: String,
    /// Body weight in kilograms
    pub body_weight_kg: f64,
    /// Lactation number, first-calf heifer = 1
    pub parity: u32,
    /// Days in milk (0-305)
    pub days_in_milk: i32,
    /// Days pregnant (0-283)
    pub days_pregnant: i32,
    /// Whether the animal is currently milked
    pub is_lactating: bool,
    /// Static VEM target, used when no production figure is available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_vem: Option<f64>,
    /// Static DVE target (g/day), used when no production figure is available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_dve: Option<f64>,
    /// Selects the dynamic (feeding-level and lactation-stage adjusted) requirement model
    #[serde(default)]
    pub uses_dynamic_requirements: bool,
    /// Expected milk yield and composition when no milk record is supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_defaults: Option<ProductionDefaults>,
}

/// Default milk yield and composition carried explicitly on the profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionDefaults {
    /// Daily milk yield (kg)
    pub milk_kg: f64,
    /// Fat percentage (0-100)
    pub fat_percent: f64,
    /// Protein percentage (0-100)
    pub protein_percent: f64,
}

/// Measured daily milk production (milk recording / MPR)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilkProductionRecord {
    /// Daily milk yield (kg)
    pub milk_kg: f64,
    /// Fat percentage (0-100)
    pub fat_percent: f64,
    /// Protein percentage (0-100)
    pub protein_percent: f64,
}

impl From<ProductionDefaults> for MilkProductionRecord {
    fn from(defaults: ProductionDefaults) -> Self {
        Self {
            milk_kg: defaults.milk_kg,
            fat_percent: defaults.fat_percent,
            protein_percent: defaults.protein_percent,
        }
    }
}

impl AnimalProfile {
    /// Create a lactating profile with the mandatory physiological fields
    #[must_use]
    pub fn lactating(
        name: impl Into<String>,
        body_weight_kg: f64,
        parity: u32,
        days_in_milk: i32,
        days_pregnant: i32,
    ) -> Self {
        Self {
            name: name.into(),
            body_weight_kg,
            parity,
            days_in_milk,
            days_pregnant,
            is_lactating: true,
            target_vem: None,
            target_dve: None,
            uses_dynamic_requirements: false,
            production_defaults: None,
        }
    }

    /// Create a dry (non-lactating) profile
    ///
    /// `days_in_milk` starts at 0, so a parity 1 or 2 animal built this way
    /// receives the growth allowance (DIM < 100). Use
    /// [`with_days_in_milk`](Self::with_days_in_milk) to record the days since
    /// the last calving.
    #[must_use]
    pub fn dry(
        name: impl Into<String>,
        body_weight_kg: f64,
        parity: u32,
        days_pregnant: i32,
    ) -> Self {
        Self {
            is_lactating: false,
            ..Self::lactating(name, body_weight_kg, parity, 0, days_pregnant)
        }
    }

    /// Set the days in milk (days since the last calving)
    #[must_use]
    pub const fn with_days_in_milk(mut self, days_in_milk: i32) -> Self {
        self.days_in_milk = days_in_milk;
        self
    }

    /// Attach production defaults used when no milk record is supplied
    #[must_use]
    pub const fn with_production_defaults(mut self, defaults: ProductionDefaults) -> Self {
        self.production_defaults = Some(defaults);
        self
    }

    /// Attach static VEM and DVE targets
    #[must_use]
    pub const fn with_targets(mut self, target_vem: f64, target_dve: f64) -> Self {
        self.target_vem = Some(target_vem);
        self.target_dve = Some(target_dve);
        self
    }

    /// Enable the dynamic requirement model
    #[must_use]
    pub const fn with_dynamic_requirements(mut self) -> Self {
        self.uses_dynamic_requirements = true;
        self
    }

    /// Whether both static targets are present
    #[must_use]
    pub const fn has_static_targets(&self) -> bool {
        self.target_vem.is_some() && self.target_dve.is_some()
    }

    /// Validate physiological ranges
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidProfile` naming the first offending field
    pub fn validate(&self) -> Result<(), CalculationError> {
        if !self.body_weight_kg.is_finite() || self.body_weight_kg <= 0.0 {
            return Err(CalculationError::invalid_profile(
                "body_weight_kg",
                format!("must be a positive number, got {}", self.body_weight_kg),
            ));
        }
        if self.parity < 1 {
            return Err(CalculationError::invalid_profile(
                "parity",
                "must be at least 1",
            ));
        }
        if !(0..=MAX_DAYS_IN_MILK).contains(&self.days_in_milk) {
            return Err(CalculationError::invalid_profile(
                "days_in_milk",
                format!(
                    "must be between 0 and {MAX_DAYS_IN_MILK}, got {}",
                    self.days_in_milk
                ),
            ));
        }
        if !(0..=MAX_DAYS_PREGNANT).contains(&self.days_pregnant) {
            return Err(CalculationError::invalid_profile(
                "days_pregnant",
                format!(
                    "must be between 0 and {MAX_DAYS_PREGNANT}, got {}",
                    self.days_pregnant
                ),
            ));
        }
        for (field, target) in [
            ("target_vem", self.target_vem),
            ("target_dve", self.target_dve),
        ] {
            if let Some(value) = target {
                if !value.is_finite() || value <= 0.0 {
                    return Err(CalculationError::invalid_profile(
                        field,
                        format!("must be positive when set, got {value}"),
                    ));
                }
            }
        }
        if let Some(defaults) = self.production_defaults {
            MilkProductionRecord::from(defaults).validate_as("production_defaults")?;
        }
        Ok(())
    }
}

impl MilkProductionRecord {
    /// Validate yield and composition ranges
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidProfile` for negative yield or percentages outside 0-100
    pub fn validate(&self) -> Result<(), CalculationError> {
        self.validate_as("milk_record")
    }

    fn validate_as(&self, field: &'static str) -> Result<(), CalculationError> {
        if !self.milk_kg.is_finite() || self.milk_kg < 0.0 {
            return Err(CalculationError::invalid_profile(
                field,
                format!("milk yield must be non-negative, got {}", self.milk_kg),
            ));
        }
        for (label, value) in [("fat", self.fat_percent), ("protein", self.protein_percent)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(CalculationError::invalid_profile(
                    field,
                    format!("{label} percentage must be between 0 and 100, got {value}"),
                ));
            }
        }
        Ok(())
    }
}
