// ABOUTME: Traceable calculation step model and the accumulator that collects steps
// ABOUTME: Every numeric result carries its formula, inputs, substitution string, unit, and citation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Audit Steps
//!
//! A [`CalculationStep`] is the atomic unit of auditability: one named number
//! together with the symbolic formula it came from, the ordered input values,
//! the substituted calculation and the published source. Steps are immutable
//! once built.
//!
//! Calculators build steps through [`StepBuilder`] and collect sequences of
//! them in an [`AuditTrail`] value that is threaded through the calculation
//! and returned with the result, so there is no shared log to mutate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named input value of a calculation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepInput {
    /// Input name as it appears in the formula
    pub name: String,
    /// Input value
    pub value: f64,
}

/// A single traceable calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// Step name
    pub name: String,
    /// Symbolic formula
    pub formula: String,
    /// Ordered input values
    pub inputs: Vec<StepInput>,
    /// Formula with the input values substituted
    pub calculation: String,
    /// Numeric result
    pub result: f64,
    /// Unit of the result
    pub unit: String,
    /// Standard the formula derives from
    pub source: String,
}

impl CalculationStep {
    /// Start building a step
    #[must_use]
    pub fn builder(name: impl Into<String>) -> StepBuilder {
        StepBuilder {
            name: name.into(),
            formula: String::new(),
            inputs: Vec::new(),
            calculation: String::new(),
            unit: String::new(),
            source: String::new(),
        }
    }

    /// Look up an input value by name
    #[must_use]
    pub fn input(&self, name: &str) -> Option<f64> {
        self.inputs
            .iter()
            .find(|input| input.name == name)
            .map(|input| input.value)
    }

    /// Result formatted for display
    #[must_use]
    pub fn display_result(&self) -> String {
        format_value(self.result)
    }
}

impl fmt::Display for CalculationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} = {} {}",
            self.name,
            self.calculation,
            format_value(self.result),
            self.unit
        )
    }
}

/// Builder for [`CalculationStep`]
#[derive(Debug, Clone)]
#[must_use]
pub struct StepBuilder {
    name: String,
    formula: String,
    inputs: Vec<StepInput>,
    calculation: String,
    unit: String,
    source: String,
}

impl StepBuilder {
    /// Set the symbolic formula
    pub fn formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = formula.into();
        self
    }

    /// Append an input value; order is preserved
    pub fn input(mut self, name: impl Into<String>, value: f64) -> Self {
        self.inputs.push(StepInput {
            name: name.into(),
            value,
        });
        self
    }

    /// Set the substituted calculation string
    pub fn calculation(mut self, calculation: impl Into<String>) -> Self {
        self.calculation = calculation.into();
        self
    }

    /// Set the unit of the result
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the source citation
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Finish the step with its result
    #[must_use]
    pub fn build(self, result: f64) -> CalculationStep {
        CalculationStep {
            name: self.name,
            formula: self.formula,
            inputs: self.inputs,
            calculation: self.calculation,
            result,
            unit: self.unit,
            source: self.source,
        }
    }
}

/// Ordered accumulator of steps threaded through a calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditTrail {
    steps: Vec<CalculationStep>,
}

impl AuditTrail {
    /// Create an empty trail
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step and hand back its result for further arithmetic
    pub fn record(&mut self, step: CalculationStep) -> f64 {
        let result = step.result;
        self.steps.push(step);
        result
    }

    /// Steps recorded so far
    #[must_use]
    pub fn steps(&self) -> &[CalculationStep] {
        &self.steps
    }

    /// Consume the trail
    #[must_use]
    pub fn into_steps(self) -> Vec<CalculationStep> {
        self.steps
    }

    /// Number of recorded steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Format a number for calculation strings and reports
///
/// Integral values print without decimals, everything else with up to four
/// decimals and trailing zeros removed. Output depends only on the value.
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{value:.4}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}
