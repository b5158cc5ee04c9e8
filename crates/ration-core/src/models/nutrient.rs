// ABOUTME: Nutrient parameters evaluated by the engine
// ABOUTME: VEM, DVE, OEB and SW with their display labels and units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A nutrient parameter with a requirement and a supply figure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Nutrient {
    /// Energy (feed unit milk)
    Vem,
    /// Intestine-digestible protein
    Dve,
    /// Rumen-degradable protein balance
    Oeb,
    /// Structure value
    Sw,
}

impl Nutrient {
    /// Short label used in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vem => "VEM",
            Self::Dve => "DVE",
            Self::Oeb => "OEB",
            Self::Sw => "SW",
        }
    }

    /// Unit of requirement and supply figures
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Vem => units::VEM,
            Self::Dve | Self::Oeb => units::GRAMS_PER_DAY,
            Self::Sw => units::SW_PER_KG_DS,
        }
    }

    /// Whether the nutrient is judged against a threshold instead of a coverage ratio
    #[must_use]
    pub const fn is_threshold(self) -> bool {
        matches!(self, Self::Oeb | Self::Sw)
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
