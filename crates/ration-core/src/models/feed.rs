// ABOUTME: Feed master data and ration line models
// ABOUTME: FeedBasis, FeedDefinition, and FeedInput with dry-matter resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::CalculationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit the per-unit nutrient values of a feed refer to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeedBasis {
    /// Values per kilogram dry matter (roughage, silage)
    PerKgDryMatter,
    /// Values per kilogram as-fed product (compound feed, by-products)
    PerKgProduct,
}

impl FeedBasis {
    /// Short label used in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PerKgDryMatter => "per kg DS",
            Self::PerKgProduct => "per kg product",
        }
    }
}

impl fmt::Display for FeedBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Feed master data as delivered by the feed catalog
///
/// VEM, DVE and OEB are optional at this boundary so that a catalog entry
/// lacking them can be rejected with a precise error instead of silently
/// defaulting. SW and VW may fall back to documented conservative defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedDefinition {
    /// Catalog key
    pub name: String,
    /// Human-readable name
    pub display_name: String,
    /// Accounting basis of the per-unit values
    pub basis: FeedBasis,
    /// Energy value per unit
    pub vem: Option<f64>,
    /// Intestine-digestible protein per unit (g)
    pub dve: Option<f64>,
    /// Rumen-degradable protein balance per unit (g)
    pub oeb: Option<f64>,
    /// Structure value per unit
    pub sw: Option<f64>,
    /// Filling value per unit
    pub vw: Option<f64>,
    /// Dry-matter percentage used when the ration line gives no override
    pub default_ds_percent: f64,
}

/// Nutrient values of a feed after required fields were checked and SW/VW defaults applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedNutrients {
    /// Energy value per unit
    pub vem: f64,
    /// DVE per unit (g)
    pub dve: f64,
    /// OEB per unit (g)
    pub oeb: f64,
    /// Structure value per unit
    pub sw: f64,
    /// Filling value per unit
    pub vw: f64,
    /// SW came from the fallback default
    pub sw_defaulted: bool,
    /// VW came from the fallback default
    pub vw_defaulted: bool,
}

impl FeedDefinition {
    /// Create a feed definition with every nutrient value present
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        basis: FeedBasis,
        vem: f64,
        dve: f64,
        oeb: f64,
        sw: f64,
        vw: f64,
        default_ds_percent: f64,
    ) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            basis,
            vem: Some(vem),
            dve: Some(dve),
            oeb: Some(oeb),
            sw: Some(sw),
            vw: Some(vw),
            default_ds_percent,
        }
    }

    /// Override the display name
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Resolve the nutrient values, applying SW/VW fallbacks only
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::MissingFeedData` when VEM, DVE or OEB is absent
    /// and `CalculationError::InvalidFeedInput` when a supplied SW or VW is not finite
    pub fn nutrients(
        &self,
        fallback_sw: f64,
        fallback_vw: f64,
    ) -> Result<FeedNutrients, CalculationError> {
        let required = |value: Option<f64>, field: &'static str| {
            value
                .filter(|v| v.is_finite())
                .ok_or_else(|| CalculationError::missing_feed_data(&self.name, field))
        };

        // fallbacks only replace absent values, never bad ones
        let optional = |value: Option<f64>, fallback: f64, field: &str| match value {
            Some(v) if !v.is_finite() => Err(CalculationError::invalid_feed_input(
                &self.name,
                format!("{field} must be a finite number, got {v}"),
            )),
            Some(v) => Ok(v),
            None => Ok(fallback),
        };

        Ok(FeedNutrients {
            vem: required(self.vem, "vem")?,
            dve: required(self.dve, "dve")?,
            oeb: required(self.oeb, "oeb")?,
            sw: optional(self.sw, fallback_sw, "sw")?,
            vw: optional(self.vw, fallback_vw, "vw")?,
            sw_defaulted: self.sw.is_none(),
            vw_defaulted: self.vw.is_none(),
        })
    }
}

/// One line of the proposed ration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedInput {
    /// Amount fed (kg, in the unit implied by the feed's basis)
    pub amount_kg: f64,
    /// Dry-matter percentage override (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ds_percent: Option<f64>,
}

impl FeedInput {
    /// Create a ration line without dry-matter override
    #[must_use]
    pub const fn new(amount_kg: f64) -> Self {
        Self {
            amount_kg,
            ds_percent: None,
        }
    }

    /// Create a ration line with a measured dry-matter percentage
    #[must_use]
    pub const fn with_ds(amount_kg: f64, ds_percent: f64) -> Self {
        Self {
            amount_kg,
            ds_percent: Some(ds_percent),
        }
    }

    /// Whether this line is actually fed (amount > 0)
    #[must_use]
    pub fn is_fed(&self) -> bool {
        self.amount_kg > 0.0
    }

    /// Effective dry-matter percentage for this line
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidFeedInput` when the percentage lies outside 0-100
    pub fn effective_ds_percent(&self, feed: &FeedDefinition) -> Result<f64, CalculationError> {
        let ds = self.ds_percent.unwrap_or(feed.default_ds_percent);
        if !(0.0..=100.0).contains(&ds) {
            return Err(CalculationError::invalid_feed_input(
                &feed.name,
                format!("dry-matter percentage must be between 0 and 100, got {ds}"),
            ));
        }
        Ok(ds)
    }
}
