// ABOUTME: Shared fixtures and setup functions for ration audit integration tests
// ABOUTME: Reference lactating cow, milk record, grass silage, concentrate and quiet logging init
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `ration_audit`
//!
//! The reference cow (675 kg, parity 3, 120 DIM, 90 days pregnant, 30 kg milk
//! at 4.4% fat and 3.5% protein) has a standard VEM requirement of
//! 21039.78 and a DVE requirement of 2064.83 g. The balanced ration below
//! covers both and stays within intake capacity.

use ration_audit::calculation::AuditableCalculationInputs;
use ration_audit::models::{
    AnimalProfile, FeedBasis, FeedDefinition, FeedInput, MilkProductionRecord,
};
use ration_audit::standards::NutritionStandards;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Default nutrition standards
pub fn standards() -> NutritionStandards {
    NutritionStandards::default()
}

/// Lactating multiparous cow used throughout the tests
pub fn reference_cow() -> AnimalProfile {
    AnimalProfile::lactating("Cow 1042", 675.0, 3, 120, 90)
}

/// 30 kg milk, 4.4% fat, 3.5% protein (FPCM 31.722, protein yield 1050 g)
pub fn reference_milk() -> MilkProductionRecord {
    MilkProductionRecord {
        milk_kg: 30.0,
        fat_percent: 4.4,
        protein_percent: 3.5,
    }
}

/// Grass silage, values per kg DS, 45% DS
pub fn grass_silage() -> FeedDefinition {
    FeedDefinition::new(
        "grass_silage",
        FeedBasis::PerKgDryMatter,
        951.0,
        76.0,
        28.0,
        2.75,
        1.05,
        45.0,
    )
    .with_display_name("Grass silage")
}

/// Dairy concentrate, values per kg product, 88% DS
pub fn concentrate() -> FeedDefinition {
    FeedDefinition::new(
        "concentrate",
        FeedBasis::PerKgProduct,
        1040.0,
        125.0,
        10.0,
        0.15,
        0.33,
        88.0,
    )
    .with_display_name("Dairy concentrate")
}

/// Reference cow with milk record and no feeds
pub fn empty_ration() -> AuditableCalculationInputs {
    AuditableCalculationInputs::new(reference_cow()).with_milk_record(reference_milk())
}

/// Reference cow fed 25 kg grass silage and 10 kg concentrate
///
/// Supply: 20.05 kg DS, 21098.75 VEM, 2105 g DVE, 415 g OEB, 15.1125 VW.
pub fn balanced_ration() -> AuditableCalculationInputs {
    empty_ration()
        .with_feed(grass_silage(), FeedInput::new(25.0))
        .with_feed(concentrate(), FeedInput::new(10.0))
}

/// Assert two floats agree within a tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
