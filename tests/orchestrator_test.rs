// ABOUTME: Integration tests for the audit orchestrator and its summary block
// ABOUTME: End-to-end calculation, up-front validation, determinism, batch evaluation and JSON export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use common::{
    assert_close, balanced_ration, concentrate, empty_ration, grass_silage, init_test_logging,
    reference_cow, standards,
};
use ration_audit::calculation::{
    run, run_at, run_batch, validate_inputs, AuditableCalculationInputs, AuditableCalculationResult,
};
use ration_audit::errors::CalculationError;
use ration_audit::models::{AnimalProfile, FeedInput, Nutrient};
use ration_intelligence::balance_evaluator::BalanceStatus;
use ration_intelligence::intake_capacity::VocStatus;

#[test]
fn test_balanced_ration_is_adequate() {
    init_test_logging();
    let result = run(&balanced_ration(), &standards()).unwrap();

    assert_eq!(result.contributions.len(), 2);
    assert_eq!(result.balances.len(), 4);

    let summary = &result.summary;
    assert_eq!(summary.vem_coverage_percent, Some(100.3));
    assert_eq!(summary.dve_coverage_percent, Some(101.9));
    assert_eq!(summary.vem_status, BalanceStatus::Ok);
    assert_eq!(summary.dve_status, BalanceStatus::Ok);
    assert_eq!(summary.oeb_status, BalanceStatus::Ok);
    assert_close(summary.voc_utilization_percent, 97.4, 1e-9);
    assert_eq!(summary.voc_status, VocStatus::Ok);
    assert_close(summary.sw_per_kg_ds, 1.62, 1e-9);
    assert_eq!(summary.sw_status, BalanceStatus::Ok);
    assert_close(summary.dry_matter_kg, 20.05, 1e-9);
    assert!(summary.adequate);
}

#[test]
fn test_voc_uses_total_filling_value() {
    init_test_logging();
    let result = run(&balanced_ration(), &standards()).unwrap();
    assert_close(result.voc.total_vw_supplied, result.totals.vw.result, f64::EPSILON);
    assert_close(result.voc.total_vw_supplied, 15.1125, 1e-9);
}

#[test]
fn test_empty_ration_is_not_adequate() {
    init_test_logging();
    let result = run(&empty_ration(), &standards()).unwrap();

    assert!(result.contributions.is_empty());
    assert_eq!(result.summary.vem_status, BalanceStatus::Deficient);
    assert_eq!(result.summary.dve_status, BalanceStatus::Deficient);
    assert_eq!(result.summary.oeb_status, BalanceStatus::Ok);
    assert_eq!(result.summary.sw_status, BalanceStatus::Deficient);
    assert_eq!(result.summary.voc_status, VocStatus::Ok);
    assert!(!result.summary.adequate);
}

#[test]
fn test_overfilled_ration_is_not_adequate() {
    init_test_logging();
    let inputs = balanced_ration().with_feed(grass_silage(), FeedInput::new(20.0));
    let result = run(&inputs, &standards()).unwrap();

    assert_eq!(result.summary.voc_status, VocStatus::Exceeded);
    assert!(!result.summary.adequate);
}

#[test]
fn test_unfed_lines_are_excluded() {
    init_test_logging();
    let inputs = balanced_ration().with_feed(concentrate(), FeedInput::new(0.0));
    let result = run(&inputs, &standards()).unwrap();

    assert_eq!(result.inputs.feeds.len(), 3);
    assert_eq!(result.contributions.len(), 2);
    assert_eq!(result.totals.feed_count, 2);
}

#[test]
fn test_validation_failure_yields_no_result() {
    init_test_logging();
    let mut feed = grass_silage();
    feed.vem = None;
    let inputs = balanced_ration().with_feed(feed, FeedInput::new(3.0));

    let err = run(&inputs, &standards()).unwrap_err();
    assert!(matches!(err, CalculationError::MissingFeedData { field: "vem", .. }));
    assert_eq!(validate_inputs(&inputs, &standards()).unwrap_err(), err);
}

#[test]
fn test_non_finite_filling_value_blocks_calculation() {
    init_test_logging();
    let mut feed = grass_silage();
    feed.sw = Some(f64::NAN);
    feed.vw = Some(f64::INFINITY);
    let inputs = balanced_ration().with_feed(feed, FeedInput::new(3.0));

    let err = run(&inputs, &standards()).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidFeedInput { .. }));
}

#[test]
fn test_invalid_profile_rejected() {
    init_test_logging();
    let inputs = AuditableCalculationInputs::new(AnimalProfile::lactating("Cow", 0.0, 3, 100, 0));
    let err = run(&inputs, &standards()).unwrap_err();
    assert!(matches!(
        err,
        CalculationError::InvalidProfile {
            field: "body_weight_kg",
            ..
        }
    ));
}

#[test]
fn test_missing_production_rejected_up_front() {
    let inputs = AuditableCalculationInputs::new(reference_cow());
    let err = validate_inputs(&inputs, &standards()).unwrap_err();
    assert!(matches!(
        err,
        CalculationError::InvalidProfile {
            field: "production",
            ..
        }
    ));
}

#[test]
fn test_invalid_standards_rejected() {
    let mut s = standards();
    s.intake.tolerance_percent = 90.0;
    let err = validate_inputs(&balanced_ration(), &s).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidStandards(_)));
}

#[test]
fn test_identical_runs_are_equal() {
    init_test_logging();
    let timestamp = Utc.with_ymd_and_hms(2025, 3, 14, 6, 30, 0).unwrap();
    let s = standards();

    let first = run_at(&balanced_ration(), timestamp, &s).unwrap();
    let second = run_at(&balanced_ration(), timestamp, &s).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.timestamp, timestamp);
}

#[test]
fn test_balance_lookup() {
    init_test_logging();
    let result = run(&balanced_ration(), &standards()).unwrap();
    let sw = result.balance(Nutrient::Sw).unwrap();
    assert_eq!(sw.parameter, Nutrient::Sw);
    assert!(sw.balance_percent.is_none());
}

#[test]
fn test_batch_preserves_order_and_isolates_failures() {
    init_test_logging();
    let batch = vec![
        balanced_ration(),
        AuditableCalculationInputs::new(reference_cow()),
        empty_ration(),
    ];

    let results = run_batch(&batch, &standards());

    assert_eq!(results.len(), 3);
    assert!(results[0].as_ref().unwrap().summary.adequate);
    assert!(results[1].is_err());
    assert!(!results[2].as_ref().unwrap().summary.adequate);
    assert_eq!(
        results[0].as_ref().unwrap().timestamp,
        results[2].as_ref().unwrap().timestamp
    );
}

#[test]
fn test_json_export_round_trips() {
    init_test_logging();
    let result = run(&balanced_ration(), &standards()).unwrap();
    let json = result.to_json().unwrap();

    let parsed: AuditableCalculationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.summary, result.summary);
    assert_eq!(parsed.contributions.len(), 2);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["vem_status"], "ok");
    assert_eq!(value["balances"][2]["parameter"], "OEB");
    assert!(value["balances"][2]["balance_percent"].is_null());
}

#[test]
fn test_inputs_deserialize_with_defaults() {
    let json = r#"{
        "profile": {
            "name": "Cow 7",
            "body_weight_kg": 650.0,
            "parity": 2,
            "days_in_milk": 80,
            "days_pregnant": 0,
            "is_lactating": true
        },
        "milk_record": { "milk_kg": 28.0, "fat_percent": 4.2, "protein_percent": 3.4 }
    }"#;

    let inputs: AuditableCalculationInputs = serde_json::from_str(json).unwrap();
    assert!(inputs.feeds.is_empty());
    assert!(!inputs.is_grazing);
    assert!(!inputs.profile.uses_dynamic_requirements);
    assert!(run(&inputs, &standards()).is_ok());
}

#[test]
fn test_demo_input_document() {
    init_test_logging();
    let inputs: AuditableCalculationInputs =
        serde_json::from_str(include_str!("../demos/cow-1042.json")).unwrap();
    let result = run(&inputs, &standards()).unwrap();

    assert_eq!(inputs, balanced_ration());
    assert!(result.summary.adequate);
}
