// ABOUTME: Plain-text audit report for a completed ration calculation
// ABOUTME: Deterministic rendering of every step: formula, inputs, substitution, result and source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report rendering
//!
//! The report only reads the result tree. Identical results render to
//! byte-identical reports.

use super::orchestrator::AuditableCalculationResult;
use ration_intelligence::audit::{format_value, CalculationStep};
use ration_intelligence::balance_evaluator::NutrientBalance;
use ration_intelligence::requirement_calculator::NutrientRequirement;
use std::fmt;

const RULE: &str = "================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------";

/// Render a calculation result as a plain-text audit report
#[must_use]
pub fn to_report(result: &AuditableCalculationResult) -> String {
    Report(result).to_string()
}

struct Report<'a>(&'a AuditableCalculationResult);

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{THIN_RULE}")
}

fn optional(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{} {unit}", format_value(v)))
}

fn write_step(f: &mut fmt::Formatter<'_>, step: &CalculationStep) -> fmt::Result {
    writeln!(f, "  {}", step.name)?;
    if !step.formula.is_empty() {
        writeln!(f, "    formula:     {}", step.formula)?;
    }
    if !step.inputs.is_empty() {
        let inputs = step
            .inputs
            .iter()
            .map(|input| format!("{}={}", input.name, format_value(input.value)))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "    inputs:      {inputs}")?;
    }
    if !step.calculation.is_empty() {
        writeln!(f, "    calculation: {}", step.calculation)?;
    }
    writeln!(f, "    result:      {} {}", step.display_result(), step.unit)?;
    if !step.source.is_empty() {
        writeln!(f, "    source:      {}", step.source)?;
    }
    Ok(())
}

fn write_requirement(f: &mut fmt::Formatter<'_>, requirement: &NutrientRequirement) -> fmt::Result {
    for step in requirement.steps() {
        write_step(f, step)?;
    }
    Ok(())
}

fn write_balance(f: &mut fmt::Formatter<'_>, balance: &NutrientBalance) -> fmt::Result {
    writeln!(
        f,
        "  {:<4} requirement {:>12}  supply {:>12}  balance {:>12}  coverage {:>8}  [{}]",
        balance.parameter.label(),
        format_value(balance.requirement),
        format_value(balance.supply),
        format_value(balance.balance),
        balance
            .balance_percent
            .map_or_else(|| "-".to_owned(), |p| format!("{}%", format_value(p))),
        balance.status
    )
}

impl Report<'_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let profile = &result.inputs.profile;

        writeln!(f, "{RULE}")?;
        writeln!(f, "RATION AUDIT REPORT")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Calculated: {}", result.timestamp.to_rfc3339())?;
        writeln!(f, "Animal:     {}", profile.name)?;
        writeln!(
            f,
            "Profile:    {} kg, parity {}, {} days in milk, {} days pregnant, {}",
            format_value(profile.body_weight_kg),
            profile.parity,
            profile.days_in_milk,
            profile.days_pregnant,
            if profile.is_lactating { "lactating" } else { "dry" }
        )?;
        if let Some(record) = &result.inputs.milk_record {
            writeln!(
                f,
                "Milk:       {} kg, {}% fat, {}% protein",
                format_value(record.milk_kg),
                format_value(record.fat_percent),
                format_value(record.protein_percent)
            )?;
        }
        writeln!(
            f,
            "Grazing:    {}",
            if result.inputs.is_grazing { "yes" } else { "no" }
        )?;
        writeln!(f, "Strategy:   {}", result.requirements.strategy.description())?;
        writeln!(
            f,
            "Production: {}",
            result.requirements.production_source.label()
        )
    }

    fn write_requirements(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requirements = &self.0.requirements;
        heading(f, "1. REQUIREMENTS")?;
        write_step(f, &requirements.fpcm)?;
        write_step(f, &requirements.protein_yield)?;
        write_requirement(f, &requirements.vem)?;
        write_requirement(f, &requirements.dve)
    }

    fn write_voc(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "2. INTAKE CAPACITY (VOC)")?;
        for step in &self.0.voc.steps {
            write_step(f, step)?;
        }
        Ok(())
    }

    fn write_contributions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "3. FEED CONTRIBUTIONS")?;
        if self.0.contributions.is_empty() {
            return writeln!(f, "  (no feeds fed)");
        }
        for contribution in &self.0.contributions {
            writeln!(
                f,
                "  > {} ({} kg, {}% DS, values {})",
                contribution.display_name,
                format_value(contribution.amount_kg),
                format_value(contribution.ds_percent),
                contribution.basis
            )?;
            write_step(f, &contribution.dry_matter)?;
            for step in contribution.nutrient_steps() {
                write_step(f, step)?;
            }
        }
        Ok(())
    }

    fn write_totals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "4. SUPPLY TOTALS")?;
        for step in self.0.totals.steps() {
            write_step(f, step)?;
        }
        Ok(())
    }

    fn write_balances(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "5. BALANCES")?;
        for balance in &self.0.balances {
            write_balance(f, balance)?;
        }
        writeln!(f)?;
        for balance in &self.0.balances {
            write_step(f, &balance.balance_step)?;
        }
        Ok(())
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.0.summary;
        heading(f, "SUMMARY")?;
        writeln!(
            f,
            "  VEM coverage:     {} [{}]",
            optional(summary.vem_coverage_percent, "%"),
            summary.vem_status
        )?;
        writeln!(
            f,
            "  DVE coverage:     {} [{}]",
            optional(summary.dve_coverage_percent, "%"),
            summary.dve_status
        )?;
        writeln!(f, "  OEB:              [{}]", summary.oeb_status)?;
        writeln!(
            f,
            "  VOC utilization:  {} % [{}]",
            format_value(summary.voc_utilization_percent),
            summary.voc_status
        )?;
        writeln!(
            f,
            "  SW per kg DS:     {} [{}]",
            format_value(summary.sw_per_kg_ds),
            summary.sw_status
        )?;
        writeln!(
            f,
            "  Dry matter:       {} kg DS",
            format_value(summary.dry_matter_kg)
        )?;
        writeln!(
            f,
            "  Ration adequate:  {}",
            if summary.adequate { "yes" } else { "no" }
        )?;
        writeln!(f, "{RULE}")
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_requirements(f)?;
        self.write_voc(f)?;
        self.write_contributions(f)?;
        self.write_totals(f)?;
        self.write_balances(f)?;
        self.write_summary(f)
    }
}
