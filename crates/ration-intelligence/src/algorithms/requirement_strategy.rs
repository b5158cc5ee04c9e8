// ABOUTME: Requirement strategy selection and milk production source resolution
// ABOUTME: Standard factorial, dynamic adjusted, and static-target strategies chosen from typed profile fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ration_core::errors::{AppError, CalculationError};
use ration_core::models::{AnimalProfile, MilkProductionRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requirement model applied to an animal
///
/// - `Standard`: factorial sum of maintenance, production, pregnancy, growth and grazing
/// - `Dynamic`: factorial sum with a feeding-level correction on VEM and a
///   lactation-stage factor on DVE
/// - `StaticTarget`: the profile's target VEM/DVE, used when a lactating animal
///   has no production figure at all
///
/// The strategy is picked from typed profile fields, never from the profile name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStrategy {
    /// Factorial requirement model
    #[default]
    Standard,
    /// Factorial model with feeding-level and lactation-stage adjustment
    Dynamic,
    /// Advisor-supplied targets
    StaticTarget,
}

impl RequirementStrategy {
    /// Select the strategy for a profile and its resolved production source
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidProfile` for a lactating animal with no
    /// milk record, no production defaults and no static targets
    pub fn select(
        profile: &AnimalProfile,
        production: &ProductionSource,
    ) -> Result<Self, CalculationError> {
        match production {
            ProductionSource::Unavailable if profile.has_static_targets() => Ok(Self::StaticTarget),
            ProductionSource::Unavailable => Err(CalculationError::invalid_profile(
                "production",
                "lactating animal needs a milk record, production defaults, or static VEM/DVE targets",
            )),
            ProductionSource::NotLactating => Ok(Self::Standard),
            ProductionSource::MilkRecord(_) | ProductionSource::ProfileDefaults(_) => {
                if profile.uses_dynamic_requirements {
                    Ok(Self::Dynamic)
                } else {
                    Ok(Self::Standard)
                }
            }
        }
    }

    /// Get strategy name for logging and reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Dynamic => "dynamic",
            Self::StaticTarget => "static_target",
        }
    }

    /// Get strategy description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Standard => "Factorial: maintenance + production + pregnancy + growth + grazing",
            Self::Dynamic => {
                "Factorial with feeding-level correction (VEM) and lactation-stage factor (DVE)"
            }
            Self::StaticTarget => "Static target from the animal profile",
        }
    }
}

impl fmt::Display for RequirementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RequirementStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "dynamic" => Ok(Self::Dynamic),
            "static_target" | "static" => Ok(Self::StaticTarget),
            other => Err(AppError::config(format!(
                "Unknown requirement strategy: '{other}'. Valid options: standard, dynamic, static_target"
            ))),
        }
    }
}

/// Where the milk figures behind FPCM and protein yield come from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source", content = "record")]
pub enum ProductionSource {
    /// Measured milk production record
    MilkRecord(MilkProductionRecord),
    /// Explicit production defaults on the profile
    ProfileDefaults(MilkProductionRecord),
    /// Dry animal: production is zero
    NotLactating,
    /// Lactating animal without any production figure
    Unavailable,
}

impl ProductionSource {
    /// Resolve the production source
    ///
    /// A dry animal always resolves to `NotLactating`; for a lactating animal a
    /// milk record wins over the profile's production defaults.
    #[must_use]
    pub fn resolve(profile: &AnimalProfile, milk_record: Option<&MilkProductionRecord>) -> Self {
        if !profile.is_lactating {
            return Self::NotLactating;
        }
        match (milk_record, profile.production_defaults) {
            (Some(record), _) => Self::MilkRecord(*record),
            (None, Some(defaults)) => Self::ProfileDefaults(defaults.into()),
            (None, None) => Self::Unavailable,
        }
    }

    /// Milk figures, if any
    #[must_use]
    pub const fn record(&self) -> Option<&MilkProductionRecord> {
        match self {
            Self::MilkRecord(record) | Self::ProfileDefaults(record) => Some(record),
            Self::NotLactating | Self::Unavailable => None,
        }
    }

    /// Short label used in reports
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MilkRecord(_) => "milk production record",
            Self::ProfileDefaults(_) => "profile production defaults",
            Self::NotLactating => "not lactating",
            Self::Unavailable => "unavailable",
        }
    }
}
