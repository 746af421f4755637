// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use crate::auth::password::validate_password_strength;
use crate::auth::{NewEmployee, NewVendor};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{Auth, ClientIp};
use crate::response::{AuthResponse, CurrentUserResponse};
use crate::state::AppState;

// =============================================================================
// Login
// =============================================================================

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username (email).
    pub username: String,
    /// Password.
    pub password: String,
}

/// POST /api/auth/login
///
/// Authenticates a vendor or employee account and returns a bearer token.
pub async fn login(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    Json(request): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let auth = state.auth().login(&request.username, &request.password).await?;

    tracing::info!(
        username = %auth.user.username,
        client_ip = ?client_ip,
        "Login succeeded"
    );

    Ok(Json(AuthResponse::new(auth.token, &auth.user)))
}

/// POST /api/auth/employee/login
///
/// Authenticates an account for the employee portal. Vendor credentials are
/// rejected with 403 even when the password matches.
pub async fn employee_login(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    Json(request): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let auth = state
        .auth()
        .login_employee(&request.username, &request.password)
        .await?;

    tracing::info!(
        username = %auth.user.username,
        client_ip = ?client_ip,
        "Employee login succeeded"
    );

    Ok(Json(AuthResponse::new(auth.token, &auth.user)))
}

// =============================================================================
// Registration
// =============================================================================

/// Vendor self-registration request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Username (email).
    pub username: String,
    /// Password.
    pub password: String,
    /// Business name.
    pub business_name: String,
    /// Contact phone number.
    #[serde(default)]
    pub contact_number: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
}

/// POST /api/auth/register
///
/// Registers a vendor account and signs it in, returning a bearer token.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_registration(&request.username, &request.password)?;
    if request.business_name.trim().is_empty() {
        return Err(ApiError::validation("Business name is required"));
    }

    let auth = state
        .auth()
        .register(NewVendor {
            username: request.username,
            password: request.password,
            business_name: request.business_name,
            contact_number: request.contact_number,
            address: request.address,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(auth.token, &auth.user)),
    ))
}

/// Employee registration request body.
///
/// The profile fields (display name, employee ID, department) are accepted
/// for the out-of-scope profile store; this core persists the account
/// record only.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRegisterRequest {
    /// Username (email).
    pub username: String,
    /// Password.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Employee ID.
    pub employee_id: String,
    /// Contact phone number.
    #[serde(default)]
    pub contact_number: Option<String>,
    /// Department.
    #[serde(default)]
    pub department: Option<String>,
    /// Requested role; EMPLOYEE unless ADMIN is explicitly requested.
    #[serde(default)]
    pub role: Option<String>,
}

/// POST /api/auth/employee/register
///
/// Registers an employee account and signs it in.
pub async fn employee_register(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_registration(&request.username, &request.password)?;
    if request.name.trim().is_empty() || request.employee_id.trim().is_empty() {
        return Err(ApiError::validation("Employee name and ID are required"));
    }

    let auth = state
        .auth()
        .register_employee(NewEmployee {
            username: request.username,
            password: request.password,
            email: request.email,
            contact_number: request.contact_number,
            role: request.role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(auth.token, &auth.user)),
    ))
}

// =============================================================================
// Current User
// =============================================================================

/// GET /api/auth/me
///
/// Returns the currently authenticated principal, as resolved per-request
/// by the authentication middleware.
pub async fn current_user(Auth(ctx): Auth) -> ApiResult<impl IntoResponse> {
    let role = ctx
        .role
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    Ok(Json(CurrentUserResponse {
        username: ctx.username,
        role: role.as_str().to_string(),
        authorities: ctx.authorities,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Shared validation for the registration endpoints.
fn validate_registration(username: &str, password: &str) -> ApiResult<()> {
    if username.trim().is_empty() {
        return Err(ApiError::validation("Username is required"));
    }
    if !username.contains('@') {
        return Err(ApiError::validation("Username must be a valid email"));
    }
    validate_password_strength(password).map_err(ApiError::validation)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
