// ABOUTME: Core types and constants for the ration audit engine
// ABOUTME: Foundation crate with error handling, animal and feed models, units and citations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ration Core
//!
//! Foundation crate providing shared types and constants for the auditable
//! ration engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `ErrorCode`, `AppError`, and the `CalculationError` taxonomy
//! - **models**: Animal profile, milk production record, feed definition and ration line
//! - **constants**: Units of measure and standard citations

/// Unified error handling system with stable error codes
pub mod errors;

/// Core data models (animal, milk record, feeds)
pub mod models;

/// Units and citations organized by domain
pub mod constants;
