// ABOUTME: Command-line tool that runs an auditable ration calculation from a JSON input file
// ABOUTME: Prints the plain-text report, the JSON result tree, or the effective nutrition standards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the audit report for one animal
//! ration-audit report cow-1042.json
//!
//! # Export the full result tree as JSON
//! ration-audit json cow-1042.json > cow-1042.result.json
//!
//! # Show the constant table after RATION_* overrides
//! ration-audit standards
//! ```
//!
//! Exits with status 2 when the inputs are rejected and 1 on any other error.
//! With `json`, errors are written to stderr as a JSON error response.

use clap::{Parser, Subcommand};
use ration_audit::calculation::{self, AuditableCalculationInputs};
use ration_audit::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
use ration_audit::logging::LoggingConfig;
use ration_audit::EngineConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "ration-audit",
    about = "Auditable dairy ration calculation",
    long_about = "Calculates VEM, DVE, OEB, SW and intake capacity (VOC) balances for a ration and prints every intermediate step."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the plain-text audit report
    Report {
        /// JSON file with the calculation inputs
        input: PathBuf,
    },
    /// Print the full result tree as JSON
    Json {
        /// JSON file with the calculation inputs
        input: PathBuf,
    },
    /// Print the effective nutrition standards as JSON
    Standards,
}

fn read_inputs(path: &Path) -> AppResult<AuditableCalculationInputs> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::IoError,
            format!("Failed to read {}: {e}", path.display()),
        )
        .with_source(e)
    })?;
    let inputs: AuditableCalculationInputs = serde_json::from_str(&content)?;
    debug!(path = %path.display(), feeds = inputs.feeds.len(), "Calculation inputs loaded");
    Ok(inputs)
}

fn execute(command: &Command, config: &EngineConfig) -> AppResult<String> {
    match command {
        Command::Report { input } => {
            let inputs = read_inputs(input)?;
            let result = calculation::run(&inputs, &config.standards)?;
            Ok(result.to_report())
        }
        Command::Json { input } => {
            let inputs = read_inputs(input)?;
            let result = calculation::run(&inputs, &config.standards)?;
            result.to_json()
        }
        Command::Standards => Ok(serde_json::to_string_pretty(&config.standards)?),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let outcome = EngineConfig::from_env().and_then(|config| execute(&cli.command, &config));
    match outcome {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if matches!(cli.command, Command::Json { .. }) {
                let response = ErrorResponse::from(&error);
                eprintln!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                eprintln!("error [{}]: {}", error.code, error.message);
                if !error.details.is_null() {
                    eprintln!("details: {}", error.details);
                }
            }
            // 2: the input must be corrected, 1: anything else
            Ok(ExitCode::from(if error.code.is_blocking_input_error() {
                2
            } else {
                1
            }))
        }
    }
}
