// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Middleware implementations for the API server.
//!
//! - [`AuthMiddleware`]: per-request JWT authentication
//! - [`UnauthorizedResponder`]: terminal handler for rejected protected
//!   requests

mod auth;
mod unauthorized;

pub use auth::{AuthLayer, AuthMiddleware};
pub use unauthorized::{UnauthorizedResponder, UNAUTHORIZED_MESSAGE};
