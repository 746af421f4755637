// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Binary error type.

use thiserror::Error;

/// Errors surfaced by the CLI and runtime wiring.
#[derive(Debug, Error)]
pub enum BinError {
    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API server failed.
    #[error("Server error: {0}")]
    Server(#[from] fairgate_api::ApiError),

    /// IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BinError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BinError::Config(_) => 2,
            BinError::Server(_) => 1,
            BinError::Io(_) => 1,
        }
    }
}
