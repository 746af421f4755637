// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! FAIRGATE - stateless authentication service.
//!
//! Main binary entry point.

use clap::Parser;

use fairgate_bin::cli::{Cli, Commands};
use fairgate_bin::logging::init_logging;
use fairgate_bin::runtime;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.log_format);

    let result = match cli.command() {
        Commands::Run(args) => runtime::run(&cli, &args).await,
        Commands::Validate => runtime::validate(&cli),
        Commands::Version => {
            println!("fairgate v{}", fairgate_core::VERSION);
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "fairgate exited with an error");
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
