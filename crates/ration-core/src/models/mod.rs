// ABOUTME: Core data models for ration calculations
// ABOUTME: Re-exports animal, milk production, and feed models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Animal profile and milk production models
pub mod animal;

/// Feed master data and ration line models
pub mod feed;

/// Nutrient parameters
pub mod nutrient;

pub use animal::{
    AnimalProfile, MilkProductionRecord, ProductionDefaults, MAX_DAYS_IN_MILK, MAX_DAYS_PREGNANT,
};
pub use feed::{FeedBasis, FeedDefinition, FeedInput, FeedNutrients};
pub use nutrient::Nutrient;
