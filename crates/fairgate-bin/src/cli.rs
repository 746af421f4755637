// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! CLI argument parsing and command definitions.
//!
//! Supported subcommands:
//!
//! - `run`: Start the authentication service (default)
//! - `validate`: Validate the configuration file
//! - `version`: Show version information

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// =============================================================================
// Main CLI Structure
// =============================================================================

/// FAIRGATE - stateless authentication service for the fair reservation
/// platform.
#[derive(Parser, Debug)]
#[command(
    name = "fairgate",
    author = "Sylvex <contact@sylvex.io>",
    version = fairgate_core::VERSION,
    about = "Stateless JWT authentication service",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        default_value = "fairgate.toml",
        env = "FAIRGATE_CONFIG",
        global = true
    )]
    pub config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        default_value = "info",
        env = "FAIRGATE_LOG_LEVEL",
        global = true
    )]
    pub log_level: String,

    /// Log format (text, json, compact)
    #[arg(long, default_value = "text", env = "FAIRGATE_LOG_FORMAT", global = true)]
    pub log_format: LogFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Returns the effective command, defaulting to `run`.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run(RunArgs {
            host: None,
            port: None,
        }))
    }
}

// =============================================================================
// Subcommands
// =============================================================================

/// Available subcommands for the FAIRGATE CLI.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the authentication service
    ///
    /// This is the default command when no subcommand is specified.
    Run(RunArgs),

    /// Validate the configuration file
    ///
    /// Parses and validates the configuration (including the signing
    /// secret) without starting the server.
    Validate,

    /// Show version information
    Version,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Override the configured host address
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,
}

// =============================================================================
// LogFormat
// =============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for log aggregation.
    Json,
    /// Minimal compact output.
    Compact,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_run() {
        let cli = Cli::parse_from(["fairgate"]);
        assert!(matches!(cli.command(), Commands::Run(_)));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_run_with_overrides() {
        let cli = Cli::parse_from(["fairgate", "run", "--port", "9090"]);
        match cli.command() {
            Commands::Run(args) => assert_eq!(args.port, Some(9090)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_validate_command() {
        let cli = Cli::parse_from(["fairgate", "--config", "custom.toml", "validate"]);
        assert!(matches!(cli.command(), Commands::Validate));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }
}
