// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Health check handlers.

use axum::{extract::State, response::IntoResponse, Json};

use crate::response::{HealthResponse, ReadinessResponse};
use crate::state::AppState;

/// GET /health
///
/// Simple liveness check. Returns 200 OK if the service is running.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

/// GET /ready
///
/// Readiness check that probes the user store boundary.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    // A failed probe flips `ready` but never errors the endpoint itself.
    match state.store().exists_by_username("__readiness_probe__").await {
        Ok(_) => Json(ReadinessResponse { ready: true }),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness probe failed against user store");
            Json(ReadinessResponse { ready: false })
        }
    }
}
