// ABOUTME: Nutrition standards (constant table) for requirement, intake, and balance calculations
// ABOUTME: Orchestrates domain-specific settings and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Standards Module
//!
//! The constant table every calculator reads from. It is built once, validated,
//! and then only ever borrowed: calculators take `&NutritionStandards`, so a
//! caller can inject its own table, while [`NutritionStandards::global`] offers
//! a lazily initialised process-wide instance.
//!
//! # Module Structure
//!
//! - `requirements` - VEM/DVE maintenance, production, pregnancy, growth, grazing, dynamic model
//! - `intake` - Intake capacity (VOC) model
//! - `evaluation` - Coverage bands, structure norm, SW/VW fallbacks
//!
//! # Environment Overrides
//!
//! ```bash
//! export RATION_VEM_MAINTENANCE_LACTATING=53.0
//! export RATION_VOC_TOLERANCE_PERCENT=110
//! export RATION_SW_MINIMUM=1.05
//! ```

pub mod error;
pub mod evaluation;
pub mod intake;
pub mod requirements;

pub use error::ConfigError;
pub use evaluation::{CoverageBands, EvaluationStandards, FeedFallbacks, StructureNorm};
pub use intake::VocStandards;
pub use requirements::{
    DveCoefficients, DynamicAdjustment, FpcmCoefficients, GrazingAllowance, GrowthAllowance,
    PregnancyAllowance, RequirementStandards, VemCoefficients,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global standards instance, written once
static NUTRITION_STANDARDS: OnceLock<NutritionStandards> = OnceLock::new();

/// The complete constant table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionStandards {
    /// Requirement coefficients
    pub requirements: RequirementStandards,
    /// Intake capacity model
    pub intake: VocStandards,
    /// Balance evaluation settings
    pub evaluation: EvaluationStandards,
}

impl NutritionStandards {
    /// Get the global standards instance
    pub fn global() -> &'static Self {
        NUTRITION_STANDARDS.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition standards: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load the defaults with environment overrides applied, then validate
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the table
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_requirements()?;
        self.validate_intake()?;
        self.validate_evaluation()
    }

    fn validate_requirements(&self) -> Result<(), ConfigError> {
        let req = &self.requirements;

        if req.metabolic_weight_exponent <= 0.0 || req.metabolic_weight_exponent > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Metabolic weight exponent must be in (0, 1]",
            ));
        }
        if req.vem.maintenance_lactating <= 0.0
            || req.vem.maintenance_dry <= 0.0
            || req.vem.per_kg_fpcm <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "VEM coefficients must be positive",
            ));
        }
        if req.dve.maintenance_lactating <= 0.0
            || req.dve.maintenance_dry <= 0.0
            || req.dve.production_linear <= 0.0
            || req.dve.production_quadratic < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "DVE coefficients must be positive",
            ));
        }
        if req.fpcm.base <= 0.0 || req.fpcm.fat_coef <= 0.0 || req.fpcm.protein_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "FPCM coefficients must be positive",
            ));
        }
        if req.pregnancy.threshold_days <= 0
            || req.pregnancy.vem < 0.0
            || req.pregnancy.dve < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Pregnancy threshold must be positive and allowances non-negative",
            ));
        }
        if req.growth.days_in_milk_limit <= 0
            || req.growth.first_lactation_vem < req.growth.second_lactation_vem
            || req.growth.first_lactation_dve < req.growth.second_lactation_dve
        {
            return Err(ConfigError::InvalidRange(
                "Growth allowance for first lactation must be >= second lactation",
            ));
        }
        if req.grazing.activity_vem < 0.0 || req.grazing.supply_surcharge_vem < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Grazing allowances must be non-negative",
            ));
        }
        if req.dynamic.early_lactation_days >= req.dynamic.late_lactation_days {
            return Err(ConfigError::InvalidRange(
                "early_lactation_days must be < late_lactation_days",
            ));
        }
        if req.dynamic.early_lactation_dve_factor <= 0.0
            || req.dynamic.late_lactation_dve_factor <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Lactation-stage DVE factors must be positive",
            ));
        }
        Ok(())
    }

    fn validate_intake(&self) -> Result<(), ConfigError> {
        let voc = &self.intake;

        if voc.maturity_max <= 0.0 || voc.maturity_deficit < 0.0 || voc.maturity_rate <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "VOC maturity parameters must be positive",
            ));
        }
        if voc.maturity_deficit >= voc.maturity_max {
            return Err(ConfigError::InvalidRange(
                "VOC maturity deficit must be < maturity maximum",
            ));
        }
        if voc.lactation_amplitude < 0.0 || voc.lactation_rate <= 0.0 || voc.lactation_decline < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "VOC lactation parameters must be non-negative",
            ));
        }
        if voc.pregnancy_rate < 0.0 || voc.pregnancy_threshold_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "VOC pregnancy parameters must be non-negative",
            ));
        }
        if voc.reference_vw_per_kg_ds <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Reference filling value per kg DS must be positive",
            ));
        }
        if voc.tolerance_percent <= 100.0 {
            return Err(ConfigError::InvalidRange(
                "VOC tolerance band must lie above 100%",
            ));
        }
        Ok(())
    }

    fn validate_evaluation(&self) -> Result<(), ConfigError> {
        let eval = &self.evaluation;

        if eval.coverage.warning_percent <= 0.0
            || eval.coverage.warning_percent >= eval.coverage.ok_percent
        {
            return Err(ConfigError::InvalidRange(
                "Coverage warning threshold must be positive and < ok threshold",
            ));
        }
        if eval.structure.minimum_per_kg_ds <= 0.0
            || eval.structure.warning_margin < 0.0
            || eval.structure.warning_margin >= eval.structure.minimum_per_kg_ds
        {
            return Err(ConfigError::InvalidRange(
                "Structure warning margin must be non-negative and < minimum",
            ));
        }
        if eval.fallbacks.structure_value < 0.0 || eval.fallbacks.filling_value <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "SW fallback must be non-negative and VW fallback positive",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Requirement overrides
        Self::apply_env_var(
            "RATION_VEM_MAINTENANCE_LACTATING",
            &mut self.requirements.vem.maintenance_lactating,
        )?;
        Self::apply_env_var(
            "RATION_VEM_MAINTENANCE_DRY",
            &mut self.requirements.vem.maintenance_dry,
        )?;
        Self::apply_env_var(
            "RATION_VEM_PER_KG_FPCM",
            &mut self.requirements.vem.per_kg_fpcm,
        )?;
        Self::apply_env_var(
            "RATION_DVE_MAINTENANCE_LACTATING",
            &mut self.requirements.dve.maintenance_lactating,
        )?;
        Self::apply_env_var(
            "RATION_DVE_MAINTENANCE_DRY",
            &mut self.requirements.dve.maintenance_dry,
        )?;
        Self::apply_env_var(
            "RATION_PREGNANCY_THRESHOLD_DAYS",
            &mut self.requirements.pregnancy.threshold_days,
        )?;
        Self::apply_env_var(
            "RATION_GRAZING_ACTIVITY_VEM",
            &mut self.requirements.grazing.activity_vem,
        )?;
        Self::apply_env_var(
            "RATION_GRAZING_SUPPLY_VEM",
            &mut self.requirements.grazing.supply_surcharge_vem,
        )?;

        // Intake capacity overrides
        Self::apply_env_var(
            "RATION_VOC_TOLERANCE_PERCENT",
            &mut self.intake.tolerance_percent,
        )?;
        Self::apply_env_var(
            "RATION_VOC_REFERENCE_VW",
            &mut self.intake.reference_vw_per_kg_ds,
        )?;

        // Evaluation overrides
        Self::apply_env_var(
            "RATION_COVERAGE_OK_PERCENT",
            &mut self.evaluation.coverage.ok_percent,
        )?;
        Self::apply_env_var(
            "RATION_COVERAGE_WARNING_PERCENT",
            &mut self.evaluation.coverage.warning_percent,
        )?;
        Self::apply_env_var(
            "RATION_SW_MINIMUM",
            &mut self.evaluation.structure.minimum_per_kg_ds,
        )?;
        Self::apply_env_var(
            "RATION_SW_WARNING_MARGIN",
            &mut self.evaluation.structure.warning_margin,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NutritionStandards::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_coverage_bands_rejected() {
        let mut standards = NutritionStandards::default();
        standards.evaluation.coverage.warning_percent = 96.0;
        assert!(matches!(
            standards.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_tolerance_must_exceed_hundred() {
        let mut standards = NutritionStandards::default();
        standards.intake.tolerance_percent = 100.0;
        assert!(standards.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_override_applied() {
        env::set_var("RATION_SW_MINIMUM", "1.2");
        let loaded = NutritionStandards::load();
        env::remove_var("RATION_SW_MINIMUM");

        let standards = loaded.unwrap();
        assert!((standards.evaluation.structure.minimum_per_kg_ds - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_env_override_parse_failure() {
        env::set_var("RATION_VOC_TOLERANCE_PERCENT", "lots");
        let loaded = NutritionStandards::load();
        env::remove_var("RATION_VOC_TOLERANCE_PERCENT");

        assert!(matches!(loaded, Err(ConfigError::Parse(_))));
    }
}
