// ABOUTME: Balance evaluation thresholds and feed value fallbacks
// ABOUTME: Coverage bands for VEM/DVE, structure value norm, conservative SW/VW defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Coverage bands for ratio-target nutrients (VEM, DVE)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageBands {
    /// Coverage at or above this percentage is ok: 95
    pub ok_percent: f64,
    /// Coverage at or above this percentage is a warning: 85
    pub warning_percent: f64,
}

impl Default for CoverageBands {
    fn default() -> Self {
        Self {
            ok_percent: 95.0,
            warning_percent: 85.0,
        }
    }
}

/// Structure value norm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureNorm {
    /// Minimum structure value per kg dry matter: 1.00
    pub minimum_per_kg_ds: f64,
    /// Shortfall within this margin is a warning: 0.10
    pub warning_margin: f64,
}

impl Default for StructureNorm {
    fn default() -> Self {
        Self {
            minimum_per_kg_ds: 1.00,
            warning_margin: 0.10,
        }
    }
}

/// Conservative defaults for feeds whose SW or VW is unknown
///
/// Never applied to VEM, DVE, or OEB: those must come from the feed catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedFallbacks {
    /// Structure value assumed when unknown (no structure credited): 0.00
    pub structure_value: f64,
    /// Filling value assumed when unknown (roughage-like fill): 1.00
    pub filling_value: f64,
}

impl Default for FeedFallbacks {
    fn default() -> Self {
        Self {
            structure_value: 0.0,
            filling_value: 1.0,
        }
    }
}

/// All evaluation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EvaluationStandards {
    /// VEM/DVE coverage bands
    pub coverage: CoverageBands,
    /// Structure value norm
    pub structure: StructureNorm,
    /// SW/VW fallbacks
    pub fallbacks: FeedFallbacks,
}
