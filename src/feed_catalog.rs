// ABOUTME: Bridge between a feed master-data catalog and the ration calculation
// ABOUTME: FeedCatalog trait, in-memory catalog, laboratory analysis conversion and ration resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Feed Catalog
//!
//! The engine itself never looks feeds up; callers resolve names against a
//! catalog first and hand complete [`FeedDefinition`]s to the calculation.
//! Laboratory analyses convert into definitions without inventing energy or
//! protein values: missing VEM, DVE or OEB stay missing and are rejected
//! later with `MISSING_FEED_DATA`. Missing SW and VW stay missing too and
//! are filled from the standards' fallbacks, flagged in the audit step.

use crate::calculation::RationLine;
use ration_core::errors::CalculationError;
use ration_core::models::{FeedBasis, FeedDefinition, FeedInput};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Source of feed master data
pub trait FeedCatalog {
    /// Look up a feed by catalog name
    fn definition(&self, name: &str) -> Option<&FeedDefinition>;
}

/// Catalog held in memory, keyed by feed name
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedCatalog {
    feeds: HashMap<String, FeedDefinition>,
}

impl InMemoryFeedCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions; later entries replace earlier ones with the same name
    #[must_use]
    pub fn from_definitions(definitions: impl IntoIterator<Item = FeedDefinition>) -> Self {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.insert(definition);
        }
        catalog
    }

    /// Add or replace a definition, returning the replaced one
    pub fn insert(&mut self, definition: FeedDefinition) -> Option<FeedDefinition> {
        self.feeds.insert(definition.name.clone(), definition)
    }

    /// Number of feeds
    #[must_use]
    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    /// Feed names in sorted order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.feeds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FeedCatalog for InMemoryFeedCatalog {
    fn definition(&self, name: &str) -> Option<&FeedDefinition> {
        self.feeds.get(name)
    }
}

/// Laboratory analysis of a forage or by-product
///
/// Any value the laboratory did not report is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabAnalysis {
    /// Catalog name to register the feed under
    pub name: String,
    /// Human-readable name, defaults to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Basis of the reported values
    pub basis: FeedBasis,
    /// Energy value per unit
    #[serde(default)]
    pub vem: Option<f64>,
    /// DVE per unit (g)
    #[serde(default)]
    pub dve: Option<f64>,
    /// OEB per unit (g)
    #[serde(default)]
    pub oeb: Option<f64>,
    /// Structure value per unit
    #[serde(default)]
    pub sw: Option<f64>,
    /// Filling value per unit
    #[serde(default)]
    pub vw: Option<f64>,
    /// Measured dry-matter percentage
    pub ds_percent: f64,
}

impl LabAnalysis {
    /// Convert into a feed definition
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidFeedInput` when the dry-matter
    /// percentage lies outside 0-100
    pub fn into_definition(self) -> Result<FeedDefinition, CalculationError> {
        if !(0.0..=100.0).contains(&self.ds_percent) {
            return Err(CalculationError::invalid_feed_input(
                &self.name,
                format!(
                    "dry-matter percentage must be between 0 and 100, got {}",
                    self.ds_percent
                ),
            ));
        }
        if self.sw.is_none() || self.vw.is_none() {
            debug!(
                feed = %self.name,
                sw_missing = self.sw.is_none(),
                vw_missing = self.vw.is_none(),
                "Lab analysis without structure or filling value, fallbacks apply"
            );
        }

        Ok(FeedDefinition {
            display_name: self.display_name.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            basis: self.basis,
            vem: self.vem,
            dve: self.dve,
            oeb: self.oeb,
            sw: self.sw,
            vw: self.vw,
            default_ds_percent: self.ds_percent,
        })
    }
}

/// A ration line that references a feed by catalog name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogLine {
    /// Catalog name
    pub feed: String,
    /// Amount and dry-matter override
    #[serde(flatten)]
    pub input: FeedInput,
}

impl CatalogLine {
    /// Create a catalog line
    #[must_use]
    pub fn new(feed: impl Into<String>, input: FeedInput) -> Self {
        Self {
            feed: feed.into(),
            input,
        }
    }
}

/// Resolve catalog lines into ration lines, keeping their order
///
/// # Errors
///
/// Returns `CalculationError::MissingFeedData` with field `definition` for a
/// name the catalog does not know
pub fn resolve_ration<C: FeedCatalog + ?Sized>(
    catalog: &C,
    lines: &[CatalogLine],
) -> Result<Vec<RationLine>, CalculationError> {
    lines
        .iter()
        .map(|line| {
            catalog
                .definition(&line.feed)
                .map(|definition| RationLine::new(definition.clone(), line.input))
                .ok_or_else(|| CalculationError::missing_feed_data(&line.feed, "definition"))
        })
        .collect()
}
