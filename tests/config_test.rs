// ABOUTME: Integration tests for engine configuration and nutrition standards loading
// ABOUTME: Environment overrides, validation failures, logging config parsing and the JSON form of the table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, balanced_ration, init_test_logging};
use ration_audit::calculation::run;
use ration_audit::errors::ErrorCode;
use ration_audit::logging::{LogFormat, LoggingConfig};
use ration_audit::standards::NutritionStandards;
use ration_audit::EngineConfig;
use serial_test::serial;
use std::env;

#[test]
fn test_default_table_values() {
    let standards = NutritionStandards::default();

    assert_close(standards.requirements.vem.maintenance_lactating, 53.0, f64::EPSILON);
    assert_close(standards.requirements.vem.maintenance_dry, 42.4, f64::EPSILON);
    assert_close(standards.requirements.vem.per_kg_fpcm, 442.0, f64::EPSILON);
    assert_close(standards.requirements.dve.maintenance_lactating, 2.9, f64::EPSILON);
    assert_eq!(standards.requirements.pregnancy.threshold_days, 190);
    assert_close(standards.intake.tolerance_percent, 105.0, f64::EPSILON);
    assert_close(standards.evaluation.coverage.ok_percent, 95.0, f64::EPSILON);
    assert_close(standards.evaluation.coverage.warning_percent, 85.0, f64::EPSILON);
    assert_close(standards.evaluation.structure.minimum_per_kg_ds, 1.0, f64::EPSILON);
    assert_close(standards.evaluation.fallbacks.filling_value, 1.0, f64::EPSILON);
}

#[test]
fn test_table_round_trips_through_json() {
    let standards = NutritionStandards::default();
    let json = serde_json::to_string(&standards).unwrap();
    let parsed: NutritionStandards = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, standards);
}

#[test]
fn test_global_table_is_shared() {
    let first = NutritionStandards::global();
    let second = NutritionStandards::global();
    assert!(std::ptr::eq(first, second));
}

#[test]
#[serial]
fn test_engine_config_applies_overrides() {
    env::set_var("RATION_COVERAGE_OK_PERCENT", "98");
    env::set_var("ENVIRONMENT", "production");
    let config = EngineConfig::from_env();
    env::remove_var("RATION_COVERAGE_OK_PERCENT");
    env::remove_var("ENVIRONMENT");

    let config = config.unwrap();
    assert_close(config.standards.evaluation.coverage.ok_percent, 98.0, f64::EPSILON);
    assert!(config.is_production());
    assert!(config.logging.include_location);
}

#[test]
#[serial]
fn test_engine_config_rejects_invalid_override() {
    env::set_var("RATION_COVERAGE_WARNING_PERCENT", "99");
    let config = EngineConfig::from_env();
    env::remove_var("RATION_COVERAGE_WARNING_PERCENT");

    let err = config.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_engine_config_rejects_unparsable_override() {
    env::set_var("RATION_SW_MINIMUM", "one");
    let config = EngineConfig::from_env();
    env::remove_var("RATION_SW_MINIMUM");

    let err = config.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("RATION_SW_MINIMUM"));
}

#[test]
fn test_with_standards_validates() {
    let mut standards = NutritionStandards::default();
    standards.evaluation.structure.minimum_per_kg_ds = -1.0;
    assert!(EngineConfig::default().with_standards(standards).is_err());

    let mut strict = NutritionStandards::default();
    strict.evaluation.coverage.ok_percent = 110.0;
    let config = EngineConfig::default().with_standards(strict).unwrap();
    assert_close(config.standards.evaluation.coverage.ok_percent, 110.0, f64::EPSILON);
}

#[test]
fn test_injected_standards_change_verdict() {
    init_test_logging();
    let mut strict = NutritionStandards::default();
    strict.evaluation.coverage.ok_percent = 110.0;
    strict.evaluation.coverage.warning_percent = 100.0;

    let result = run(&balanced_ration(), &strict).unwrap();
    assert!(!result.summary.adequate);
    assert_eq!(result.summary.vem_status.label(), "warning");
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "debug");
    assert_eq!(config.service_name, "ration-audit");
}

#[test]
fn test_logging_level_override() {
    let config = LoggingConfig::default().with_level("trace");
    assert_eq!(config.level, "trace");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.format.to_string(), "compact");
}
