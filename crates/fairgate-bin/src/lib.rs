// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # fairgate-bin
//!
//! Binary entry point for the FAIRGATE authentication service.
//!
//! Provides the CLI, logging initialization, graceful shutdown
//! coordination, and the runtime wiring that assembles the API server.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod shutdown;
