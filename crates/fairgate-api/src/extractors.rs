// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Custom extractors for API handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::AuthContext;
use crate::error::ApiError;

// =============================================================================
// Auth Extractor
// =============================================================================

/// Extractor for authenticated requests.
///
/// Extracts the [`AuthContext`] from the request extensions. Returns 401 if
/// the request carries no authenticated principal.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Auth(ctx): Auth) -> impl IntoResponse {
///     format!("Hello, {}", ctx.username)
/// }
/// ```
pub struct Auth(pub AuthContext);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .filter(|ctx| !ctx.is_anonymous())
            .map(Auth)
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

// =============================================================================
// Optional Auth Extractor
// =============================================================================

/// Extractor for optionally authenticated requests.
///
/// Yields the [`AuthContext`] if a principal is attached, `None` otherwise.
pub struct OptionalAuth(pub Option<AuthContext>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .filter(|ctx| !ctx.is_anonymous());
        Ok(OptionalAuth(ctx))
    }
}

// =============================================================================
// Client IP Extractor
// =============================================================================

/// Extractor for the client IP address.
pub struct ClientIp(pub Option<std::net::IpAddr>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Try to get from X-Forwarded-For header
        let forwarded = parts
            .headers
            .get("X-Forwarded-For")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse().ok());

        if let Some(ip) = forwarded {
            return Ok(ClientIp(Some(ip)));
        }

        // Try to get from X-Real-IP header
        let real_ip = parts
            .headers
            .get("X-Real-IP")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());

        if let Some(ip) = real_ip {
            return Ok(ClientIp(Some(ip)));
        }

        // Fall back to the authentication context
        let from_ctx = parts
            .extensions
            .get::<AuthContext>()
            .and_then(|ctx| ctx.client_ip);

        Ok(ClientIp(from_ctx))
    }
}

// =============================================================================
// Tests
// =============================================================================
