// ABOUTME: Engine-wide constants organized by domain
// ABOUTME: Units of measure and citations of the nutrition standards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Units of measure attached to calculation steps
pub mod units;

/// Citations of the published standards each formula derives from
pub mod sources;

/// Service name used in structured logs
pub const SERVICE_NAME: &str = "ration-audit";
