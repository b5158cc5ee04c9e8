// ABOUTME: Inputs of one ration calculation as supplied by the calling layer
// ABOUTME: Animal profile, optional milk record, ordered feed lines, grazing flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ration_core::models::{AnimalProfile, FeedDefinition, FeedInput, MilkProductionRecord};
use serde::{Deserialize, Serialize};

/// One line of the proposed ration: feed master data and the amount fed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RationLine {
    /// Feed master data from the feed catalog
    pub feed: FeedDefinition,
    /// Amount and dry-matter override
    pub input: FeedInput,
}

impl RationLine {
    /// Create a ration line
    #[must_use]
    pub const fn new(feed: FeedDefinition, input: FeedInput) -> Self {
        Self { feed, input }
    }
}

/// Everything one calculation needs
///
/// This is also the JSON document accepted by the command-line tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditableCalculationInputs {
    /// Animal (or representative animal of a group)
    pub profile: AnimalProfile,
    /// Measured milk production, if available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milk_record: Option<MilkProductionRecord>,
    /// Ration lines in the order they are reported
    #[serde(default)]
    pub feeds: Vec<RationLine>,
    /// Whether the animal is grazing
    #[serde(default)]
    pub is_grazing: bool,
}

impl AuditableCalculationInputs {
    /// Start inputs for a profile with an empty ration
    #[must_use]
    pub const fn new(profile: AnimalProfile) -> Self {
        Self {
            profile,
            milk_record: None,
            feeds: Vec::new(),
            is_grazing: false,
        }
    }

    /// Attach a milk production record
    #[must_use]
    pub const fn with_milk_record(mut self, record: MilkProductionRecord) -> Self {
        self.milk_record = Some(record);
        self
    }

    /// Append a ration line
    #[must_use]
    pub fn with_feed(mut self, feed: FeedDefinition, input: FeedInput) -> Self {
        self.feeds.push(RationLine::new(feed, input));
        self
    }

    /// Set the grazing flag
    #[must_use]
    pub const fn grazing(mut self, is_grazing: bool) -> Self {
        self.is_grazing = is_grazing;
        self
    }
}
