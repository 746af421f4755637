// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Logging and tracing initialization.
//!
//! Structured logging via the `tracing` ecosystem. The filter honors
//! `RUST_LOG` when set and falls back to the CLI log level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::LogFormat;

// =============================================================================
// Logging Initialization
// =============================================================================

/// Initializes the logging subsystem.
///
/// # Arguments
///
/// * `level` - Log level string (trace, debug, info, warn, error)
/// * `format` - Log output format (text, json, compact)
pub fn init_logging(level: &str, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level))
        .add_directive("hyper=warn".parse().unwrap())
        .add_directive("tower=warn".parse().unwrap())
        .add_directive("axum=info".parse().unwrap())
        .add_directive("tokio=info".parse().unwrap());

    match format {
        LogFormat::Text => init_text_logging(env_filter),
        LogFormat::Json => init_json_logging(env_filter),
        LogFormat::Compact => init_compact_logging(env_filter),
    }
}

/// Initializes text-based logging (default).
fn init_text_logging(filter: EnvFilter) {
    let is_terminal = std::io::IsTerminal::is_terminal(&std::io::stdout());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(is_terminal),
        )
        .init();
}

/// Initializes JSON logging (for production/log aggregation).
fn init_json_logging(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_current_span(true)
                .with_span_list(true),
        )
        .init();
}

/// Initializes compact logging (minimal output).
fn init_compact_logging(filter: EnvFilter) {
    let is_terminal = std::io::IsTerminal::is_terminal(&std::io::stdout());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_ansi(is_terminal),
        )
        .init();
}
