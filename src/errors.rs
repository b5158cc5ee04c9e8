// ABOUTME: Error handling for the ration audit application layer
// ABOUTME: Re-exports the stable error codes and error types from ration-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The engine reports [`CalculationError`]; everything outside it (the
//! command-line tool, JSON export, configuration loading) works with
//! [`AppError`] and its stable [`ErrorCode`].

pub use ration_core::errors::{AppError, AppResult, CalculationError, ErrorCode, ErrorResponse};
