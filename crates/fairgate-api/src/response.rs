// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API response types.

use serde::{Deserialize, Serialize};

use fairgate_core::UserRecord;

// =============================================================================
// AuthResponse
// =============================================================================

/// Authentication response returned by login and registration endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Signed bearer token.
    pub access_token: String,
    /// Token type (always "Bearer").
    pub token_type: String,
    /// Role name of the authenticated account.
    pub role: String,
    /// Business name, present for vendor accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
}

impl AuthResponse {
    /// Creates a response for a freshly authenticated account.
    pub fn new(access_token: String, user: &UserRecord) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            role: user.role.as_str().to_string(),
            business_name: user.business_name.clone(),
        }
    }
}

// =============================================================================
// CurrentUserResponse
// =============================================================================

/// Response for the current-user endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    /// Username of the authenticated principal.
    pub username: String,
    /// Role name.
    pub role: String,
    /// Authority labels granted to the principal.
    pub authorities: Vec<String>,
}

// =============================================================================
// Health Responses
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Version string.
    pub version: String,
}

impl HealthResponse {
    /// Creates a healthy response.
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

/// Readiness check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Whether the service is ready to accept traffic.
    pub ready: bool,
}

// =============================================================================
// Tests
// =============================================================================
