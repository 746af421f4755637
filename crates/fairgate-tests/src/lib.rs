// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # FAIRGATE Integration Tests
//!
//! Integration tests for the FAIRGATE authentication service, covering:
//!
//! - JWT issuance, verification and tamper resistance
//! - Credential verification and the employee role gate
//! - Route policy classification and the authentication middleware
//! - The full HTTP surface against a spawned server
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test -p fairgate-tests
//!
//! # Run a specific suite
//! cargo test -p fairgate-tests --test integration_auth
//! cargo test -p fairgate-tests --test integration_api
//! ```
//!
//! ## Test Categories
//!
//! ### Auth Tests (`integration_auth.rs`)
//! - Token codec round trips, expiry and signature tampering
//! - Role parsing defaults
//! - Credential verifier behavior, including concurrent logins
//!
//! ### API Tests (`integration_api.rs`)
//! - Public bypass and protected rejection over HTTP
//! - Login, registration and employee portal endpoints
//! - Store failure surfacing as 503

pub mod common;
