// ABOUTME: Integration tests for per-feed dry matter and nutrient contributions
// ABOUTME: Both accounting bases, unfed lines, missing values, fallbacks and dry-matter overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, concentrate, grass_silage, standards};
use ration_audit::errors::CalculationError;
use ration_audit::models::{FeedBasis, FeedDefinition, FeedInput};
use ration_intelligence::feed_contribution::{contribution_for, validate_line};

#[test]
fn test_grass_silage_per_kg_dry_matter() {
    let input = FeedInput::with_ds(5.3, 41.0);
    let contribution = contribution_for(&grass_silage(), &input, &standards())
        .unwrap()
        .unwrap();

    assert_close(contribution.dry_matter.result, 2.173, 1e-9);
    assert_close(contribution.vem.result, 2066.523, 1e-6);
    assert_close(contribution.dve.result, 165.148, 1e-6);
    assert_close(contribution.oeb.result, 60.844, 1e-6);
    assert_close(contribution.ds_percent, 41.0, f64::EPSILON);
    assert_eq!(contribution.vem.input("dry_matter_kg"), Some(contribution.dry_matter.result));
    assert_eq!(contribution.vem.name, "Grass silage VEM");
}

#[test]
fn test_per_kg_product_uses_amount() {
    let contribution = contribution_for(&concentrate(), &FeedInput::new(10.0), &standards())
        .unwrap()
        .unwrap();

    assert_close(contribution.dry_matter.result, 8.8, 1e-9);
    assert_close(contribution.vem.result, 10_400.0, 1e-9);
    assert_close(contribution.dve.result, 1_250.0, 1e-9);
    assert_eq!(contribution.vem.input("amount_kg"), Some(10.0));
}

#[test]
fn test_bases_give_different_ratios() {
    let s = standards();
    let per_ds = FeedDefinition::new(
        "a",
        FeedBasis::PerKgDryMatter,
        1000.0,
        100.0,
        0.0,
        1.0,
        1.0,
        50.0,
    );
    let per_product = FeedDefinition {
        basis: FeedBasis::PerKgProduct,
        ..per_ds.clone()
    };
    let input = FeedInput::new(10.0);

    let a = contribution_for(&per_ds, &input, &s).unwrap().unwrap();
    let b = contribution_for(&per_product, &input, &s).unwrap().unwrap();

    assert_close(a.dry_matter.result, b.dry_matter.result, f64::EPSILON);
    assert_close(a.vem.result / a.dry_matter.result, 1000.0, 1e-9);
    assert_close(b.vem.result / b.dry_matter.result, 2000.0, 1e-9);
}

#[test]
fn test_unfed_lines_contribute_nothing() {
    let s = standards();
    assert!(contribution_for(&grass_silage(), &FeedInput::new(0.0), &s)
        .unwrap()
        .is_none());
    assert!(contribution_for(&grass_silage(), &FeedInput::new(-3.0), &s)
        .unwrap()
        .is_none());
}

#[test]
fn test_unfed_line_skips_validation() {
    let mut feed = grass_silage();
    feed.vem = None;
    let result = contribution_for(&feed, &FeedInput::with_ds(0.0, 140.0), &standards());
    assert!(matches!(result, Ok(None)));
}

#[test]
fn test_missing_required_value() {
    let mut feed = grass_silage();
    feed.dve = None;

    let err = contribution_for(&feed, &FeedInput::new(5.0), &standards()).unwrap_err();
    assert_eq!(
        err,
        CalculationError::MissingFeedData {
            feed: "grass_silage".into(),
            field: "dve",
        }
    );
}

#[test]
fn test_missing_structure_and_filling_use_fallbacks() {
    let mut feed = grass_silage();
    feed.sw = None;
    feed.vw = None;

    let contribution = contribution_for(&feed, &FeedInput::new(10.0), &standards())
        .unwrap()
        .unwrap();

    assert!(contribution.sw_defaulted);
    assert!(contribution.vw_defaulted);
    assert_close(contribution.sw.result, 0.0, f64::EPSILON);
    assert_close(contribution.vw.result, 4.5, 1e-9);
    assert!(contribution.vw.calculation.contains("(default value)"));
    assert!(!contribution.vem.calculation.contains("(default value)"));
}

#[test]
fn test_non_finite_structure_and_filling_rejected() {
    let s = standards();
    for (sw, vw) in [
        (Some(f64::NAN), Some(1.05)),
        (Some(2.75), Some(f64::INFINITY)),
    ] {
        let mut feed = grass_silage();
        feed.sw = sw;
        feed.vw = vw;

        let err = validate_line(&feed, &FeedInput::new(10.0), &s).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidFeedInput { .. }));

        let err = contribution_for(&feed, &FeedInput::new(10.0), &s).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidFeedInput { .. }));
    }
}

#[test]
fn test_dry_matter_override_out_of_range() {
    let s = standards();
    for ds in [-1.0, 100.5] {
        let err = validate_line(&grass_silage(), &FeedInput::with_ds(5.0, ds), &s).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidFeedInput { .. }));
    }
    assert!(validate_line(&grass_silage(), &FeedInput::with_ds(5.0, 100.0), &s).is_ok());
}

#[test]
fn test_non_finite_amount_rejected() {
    let input = FeedInput::new(f64::INFINITY);
    let err = validate_line(&grass_silage(), &input, &standards()).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidFeedInput { .. }));
}
