// ABOUTME: Integration tests for ration supply aggregation and nutrient balance evaluation
// ABOUTME: Totals, dry-matter weighting, grazing surcharge, empty ration and status bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, concentrate, grass_silage, reference_cow, reference_milk, standards};
use ration_audit::models::{FeedInput, Nutrient};
use ration_intelligence::balance_evaluator::{evaluate, BalanceStatus};
use ration_intelligence::feed_contribution::{contribution_for, FeedContribution};
use ration_intelligence::requirement_calculator::compute_requirement;
use ration_intelligence::supply_aggregator::aggregate;

fn balanced_contributions() -> Vec<FeedContribution> {
    let s = standards();
    vec![
        contribution_for(&grass_silage(), &FeedInput::new(25.0), &s)
            .unwrap()
            .unwrap(),
        contribution_for(&concentrate(), &FeedInput::new(10.0), &s)
            .unwrap()
            .unwrap(),
    ]
}

#[test]
fn test_totals_sum_contributions() {
    let totals = aggregate(&balanced_contributions(), false, &standards());

    assert_eq!(totals.feed_count, 2);
    assert_close(totals.dry_matter.result, 20.05, 1e-9);
    assert_close(totals.vem.result, 21_098.75, 1e-6);
    assert_close(totals.dve.result, 2_105.0, 1e-9);
    assert_close(totals.oeb.result, 415.0, 1e-9);
    assert_close(totals.sw.result, 32.4375, 1e-9);
    assert_close(totals.vw.result, 15.1125, 1e-9);
    assert_close(totals.sw_per_kg_ds.result, 32.4375 / 20.05, 1e-12);
    assert_close(totals.vw_per_kg_ds.result, 15.1125 / 20.05, 1e-12);
    assert_eq!(totals.dve.input("grass_silage"), Some(855.0));
}

#[test]
fn test_grazing_surcharge_only_changes_vem() {
    let s = standards();
    let contributions = balanced_contributions();
    let indoor = aggregate(&contributions, false, &s);
    let grazing = aggregate(&contributions, true, &s);

    assert_close(grazing.vem.result - indoor.vem.result, 1_000.0, 1e-9);
    assert_close(grazing.grazing_surcharge.result, 1_000.0, f64::EPSILON);
    assert_close(indoor.grazing_surcharge.result, 0.0, f64::EPSILON);
    for (a, b) in [
        (&indoor.dve, &grazing.dve),
        (&indoor.oeb, &grazing.oeb),
        (&indoor.sw, &grazing.sw),
        (&indoor.vw, &grazing.vw),
        (&indoor.dry_matter, &grazing.dry_matter),
    ] {
        assert_close(a.result, b.result, f64::EPSILON);
    }
}

#[test]
fn test_empty_ration_totals_are_zero() {
    let totals = aggregate(&[], false, &standards());

    assert_eq!(totals.feed_count, 0);
    for step in totals.steps() {
        assert_close(step.result, 0.0, f64::EPSILON);
        assert!(step.result.is_sign_positive(), "{} should be +0", step.name);
    }
}

#[test]
fn test_empty_ration_balances() {
    let s = standards();
    let requirements =
        compute_requirement(&reference_cow(), Some(&reference_milk()), false, &s).unwrap();
    let totals = aggregate(&[], false, &s);
    let balances = evaluate(&requirements, &totals, &s);

    let order: Vec<Nutrient> = balances.iter().map(|b| b.parameter).collect();
    assert_eq!(order, [Nutrient::Vem, Nutrient::Dve, Nutrient::Oeb, Nutrient::Sw]);

    for balance in &balances {
        let expected = if balance.parameter == Nutrient::Oeb {
            BalanceStatus::Ok
        } else {
            BalanceStatus::Deficient
        };
        assert_eq!(balance.status, expected, "{}", balance.parameter);
    }
}

#[test]
fn test_balanced_ration_statuses() {
    let s = standards();
    let requirements =
        compute_requirement(&reference_cow(), Some(&reference_milk()), false, &s).unwrap();
    let totals = aggregate(&balanced_contributions(), false, &s);
    let balances = evaluate(&requirements, &totals, &s);

    let vem = &balances[0];
    assert_close(vem.requirement, 21_039.7758, 1e-3);
    assert_close(vem.balance, vem.supply - vem.requirement, 1e-9);
    assert_close(vem.balance_percent.unwrap(), 100.2803, 1e-3);
    assert_eq!(vem.status, BalanceStatus::Ok);
    assert_eq!(vem.unit, "VEM");

    let dve = &balances[1];
    assert_close(dve.balance_percent.unwrap(), 101.9456, 1e-3);
    assert_eq!(dve.status, BalanceStatus::Ok);

    assert!(balances.iter().all(|b| b.status == BalanceStatus::Ok));
}

#[test]
fn test_threshold_nutrients_have_no_percentage() {
    let s = standards();
    let requirements =
        compute_requirement(&reference_cow(), Some(&reference_milk()), false, &s).unwrap();
    let totals = aggregate(&balanced_contributions(), false, &s);
    let balances = evaluate(&requirements, &totals, &s);

    let oeb = &balances[2];
    assert!(oeb.balance_percent.is_none());
    assert_close(oeb.requirement, 0.0, f64::EPSILON);

    let sw = &balances[3];
    assert!(sw.balance_percent.is_none());
    assert_close(sw.requirement, 1.0, f64::EPSILON);
    assert_close(sw.balance, sw.supply - 1.0, 1e-12);
}

#[test]
fn test_negative_oeb_is_deficient() {
    let s = standards();
    let mut feed = grass_silage();
    feed.oeb = Some(-40.0);
    let contribution = contribution_for(&feed, &FeedInput::new(20.0), &s).unwrap().unwrap();

    let requirements =
        compute_requirement(&reference_cow(), Some(&reference_milk()), false, &s).unwrap();
    let totals = aggregate(&[contribution], false, &s);
    let balances = evaluate(&requirements, &totals, &s);

    assert_eq!(balances[2].status, BalanceStatus::Deficient);
    assert!(balances[2].balance_step.calculation.contains('<'));
}

#[test]
fn test_static_target_coverage_uses_target() {
    let s = standards();
    let profile = reference_cow().with_targets(20_000.0, 2_000.0);
    let requirements = compute_requirement(&profile, None, false, &s).unwrap();
    let totals = aggregate(&balanced_contributions(), false, &s);
    let balances = evaluate(&requirements, &totals, &s);

    assert_close(balances[0].balance_percent.unwrap(), 21_098.75 / 20_000.0 * 100.0, 1e-9);
    assert_close(balances[1].balance_percent.unwrap(), 105.25, 1e-9);
}
