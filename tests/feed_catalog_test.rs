// ABOUTME: Integration tests for the feed catalog bridge
// ABOUTME: Catalog lookup, lab analysis conversion, ration resolution and end-to-end use of catalog feeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    concentrate, grass_silage, init_test_logging, reference_cow, reference_milk, standards,
};
use ration_audit::calculation::{run, AuditableCalculationInputs};
use ration_audit::errors::CalculationError;
use ration_audit::feed_catalog::{
    resolve_ration, CatalogLine, FeedCatalog, InMemoryFeedCatalog, LabAnalysis,
};
use ration_audit::models::{FeedBasis, FeedInput};

fn catalog() -> InMemoryFeedCatalog {
    InMemoryFeedCatalog::from_definitions([grass_silage(), concentrate()])
}

fn maize_analysis() -> LabAnalysis {
    LabAnalysis {
        name: "maize_silage_2025".into(),
        display_name: Some("Maize silage 2025".into()),
        basis: FeedBasis::PerKgDryMatter,
        vem: Some(980.0),
        dve: Some(52.0),
        oeb: Some(-32.0),
        sw: None,
        vw: None,
        ds_percent: 35.0,
    }
}

#[test]
fn test_catalog_lookup() {
    let catalog = catalog();

    assert_eq!(catalog.len(), 2);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.names(), ["concentrate", "grass_silage"]);
    assert_eq!(
        catalog.definition("grass_silage").unwrap().display_name,
        "Grass silage"
    );
    assert!(catalog.definition("hay").is_none());
}

#[test]
fn test_insert_replaces_existing() {
    let mut catalog = catalog();
    let mut updated = grass_silage();
    updated.vem = Some(900.0);

    let previous = catalog.insert(updated).unwrap();
    assert_eq!(previous.vem, Some(951.0));
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.definition("grass_silage").unwrap().vem, Some(900.0));
}

#[test]
fn test_lab_analysis_keeps_missing_values_missing() {
    let definition = maize_analysis().into_definition().unwrap();

    assert_eq!(definition.name, "maize_silage_2025");
    assert_eq!(definition.display_name, "Maize silage 2025");
    assert_eq!(definition.vem, Some(980.0));
    assert!(definition.sw.is_none());
    assert!(definition.vw.is_none());
    assert!((definition.default_ds_percent - 35.0).abs() < f64::EPSILON);
}

#[test]
fn test_lab_analysis_display_name_defaults_to_name() {
    let mut analysis = maize_analysis();
    analysis.display_name = None;
    assert_eq!(analysis.into_definition().unwrap().display_name, "maize_silage_2025");
}

#[test]
fn test_lab_analysis_rejects_bad_dry_matter() {
    let mut analysis = maize_analysis();
    analysis.ds_percent = 135.0;
    assert!(matches!(
        analysis.into_definition(),
        Err(CalculationError::InvalidFeedInput { .. })
    ));
}

#[test]
fn test_resolve_ration_keeps_order() {
    let lines = [
        CatalogLine::new("concentrate", FeedInput::new(8.0)),
        CatalogLine::new("grass_silage", FeedInput::with_ds(30.0, 42.0)),
    ];
    let ration = resolve_ration(&catalog(), &lines).unwrap();

    assert_eq!(ration.len(), 2);
    assert_eq!(ration[0].feed.name, "concentrate");
    assert_eq!(ration[1].feed.name, "grass_silage");
    assert_eq!(ration[1].input.ds_percent, Some(42.0));
}

#[test]
fn test_resolve_ration_unknown_feed() {
    let lines = [CatalogLine::new("beet_pulp", FeedInput::new(2.0))];
    let err = resolve_ration(&catalog(), &lines).unwrap_err();
    assert_eq!(
        err,
        CalculationError::MissingFeedData {
            feed: "beet_pulp".into(),
            field: "definition",
        }
    );
}

#[test]
fn test_catalog_line_deserializes_flat() {
    let line: CatalogLine =
        serde_json::from_str(r#"{ "feed": "grass_silage", "amount_kg": 25.0 }"#).unwrap();
    assert_eq!(line.feed, "grass_silage");
    assert!((line.input.amount_kg - 25.0).abs() < f64::EPSILON);
    assert!(line.input.ds_percent.is_none());
}

#[test]
fn test_lab_feed_runs_with_fallbacks() {
    init_test_logging();
    let mut catalog = catalog();
    catalog.insert(maize_analysis().into_definition().unwrap());

    let lines = [
        CatalogLine::new("grass_silage", FeedInput::new(20.0)),
        CatalogLine::new("maize_silage_2025", FeedInput::new(10.0)),
        CatalogLine::new("concentrate", FeedInput::new(7.0)),
    ];
    let mut inputs =
        AuditableCalculationInputs::new(reference_cow()).with_milk_record(reference_milk());
    inputs.feeds = resolve_ration(&catalog, &lines).unwrap();

    let result = run(&inputs, &standards()).unwrap();
    let maize = &result.contributions[1];
    assert!(maize.sw_defaulted);
    assert!(maize.vw_defaulted);
    // 10 kg at 35% DS with the 1.0 VW fallback
    assert!((maize.vw.result - 3.5).abs() < 1e-9);
}
