// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # fairgate-api
//!
//! REST API server for the FAIRGATE authentication service.
//!
//! This crate provides the HTTP surface of the stateless authentication
//! core: JWT issuance and verification, the per-request authentication
//! middleware, the ordered route policy, and the credential verifier
//! backing the login and registration endpoints.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;
pub mod state;

pub use auth::{
    AuthContext, AuthService, Claims, JwtConfig, RouteAccess, RoutePolicy, TokenCodec, TokenError,
    VerifiedToken,
};
pub use config::{ApiConfig, CorsConfig};
pub use error::{ApiError, ApiResult};
pub use middleware::{AuthLayer, UnauthorizedResponder, UNAUTHORIZED_MESSAGE};
pub use response::AuthResponse;
pub use server::{ApiServer, ApiServerBuilder};
pub use state::AppState;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
