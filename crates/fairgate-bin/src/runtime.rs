// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Runtime wiring for the authentication service.
//!
//! Loads the configuration, assembles the application state, and runs the
//! API server under the shutdown coordinator.

use std::sync::Arc;

use tracing::{info, warn};

use fairgate_api::{ApiConfig, ApiServerBuilder, TokenCodec};
use fairgate_core::MemoryUserStore;

use crate::cli::{Cli, RunArgs};
use crate::error::BinError;
use crate::shutdown::ShutdownCoordinator;

/// Loads the configuration file named by the CLI.
///
/// A missing file is not an error for `run`: the defaults are used and a
/// warning is logged (the signing secret must then come from the file, so
/// startup will fail with a clear message when it is absent).
pub fn load_config(cli: &Cli) -> Result<ApiConfig, BinError> {
    if cli.config.exists() {
        info!(path = %cli.config.display(), "Loading configuration");
        ApiConfig::load(&cli.config).map_err(|e| BinError::Config(e.to_string()))
    } else {
        warn!(path = %cli.config.display(), "Configuration file not found, using defaults");
        Ok(ApiConfig::default())
    }
}

/// Runs the authentication service until a shutdown signal arrives.
pub async fn run(cli: &Cli, args: &RunArgs) -> Result<(), BinError> {
    let mut config = load_config(cli)?;

    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    let store = Arc::new(MemoryUserStore::new());
    let server = ApiServerBuilder::new()
        .config(config)
        .store(store)
        .build()?;

    let coordinator = ShutdownCoordinator::new();
    coordinator.listen_for_signals();

    server.run_with_shutdown(coordinator.shutdown_signal()).await?;

    Ok(())
}

/// Validates the configuration file without starting the server.
///
/// Checks that the file parses and that the signing secret decodes.
pub fn validate(cli: &Cli) -> Result<(), BinError> {
    let config = ApiConfig::load(&cli.config).map_err(|e| BinError::Config(e.to_string()))?;

    TokenCodec::new(config.jwt.clone()).map_err(|e| BinError::Config(e.to_string()))?;

    println!("Configuration OK: {}", cli.config.display());
    Ok(())
}
