// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API error types and handling.
//!
//! This module provides an error type that maps to HTTP status codes and
//! JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fairgate_core::{AuthError, StoreError};

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// ApiError
// =============================================================================

/// API error type with HTTP status code mapping.
///
/// Designed to be returned from handlers and automatically converted to
/// appropriate HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404).
    #[error("Resource not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// Bad request (400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unauthorized (401).
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Error message.
        message: String,
    },

    /// Forbidden (403).
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Error message.
        message: String,
    },

    /// Validation error (422).
    #[error("Validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },

    /// Service unavailable (503).
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (500).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message (for logging, not user-facing).
        message: String,
    },
}

impl ApiError {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a not found error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a service unavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for categorization.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Forbidden { .. } => "FORBIDDEN",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Returns a user-facing error message.
    ///
    /// Safe to show to end users; does not expose internal details.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound { resource } => format!("{} not found", resource),
            ApiError::BadRequest { message } => message.clone(),
            ApiError::Unauthorized { message } => message.clone(),
            ApiError::Forbidden { message } => message.clone(),
            ApiError::Validation { message } => message.clone(),
            ApiError::ServiceUnavailable { .. } => "Service temporarily unavailable".to_string(),
            ApiError::Internal { .. } => "An internal error occurred".to_string(),
        }
    }

    /// Returns `true` if this error should be logged at error level.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            ApiError::Internal { .. } | ApiError::ServiceUnavailable { .. }
        )
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.user_message();

        if self.is_server_error() {
            tracing::error!(
                error = %self,
                error_code = error_code,
                status = %status,
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                error_code = error_code,
                status = %status,
                "Client error occurred"
            );
        }

        let body = ErrorResponseBody {
            error: ErrorDetails {
                code: error_code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Error Response Body
// =============================================================================

/// Error response body structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseBody {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::unauthorized("Invalid credentials."),
            AuthError::AccessDenied => {
                ApiError::forbidden("Access denied. Employee credentials required.")
            }
            AuthError::UsernameTaken => ApiError::bad_request("Username is already taken."),
            AuthError::Store(e) => e.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable { message } => {
                tracing::error!(detail = %message, "User store unavailable");
                ApiError::service_unavailable("User store unavailable")
            }
            StoreError::DuplicateUsername { .. } => {
                ApiError::bad_request("Username is already taken.")
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Invalid JSON: {}", err))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::internal(format!("IO error: {}", err))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::not_found("user").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::bad_request("invalid").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("no token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::forbidden("no access").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::validation("invalid field").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::internal("crash").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_mapping() {
        let err = ApiError::from(AuthError::InvalidCredentials);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err = ApiError::from(AuthError::AccessDenied);
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let err = ApiError::from(AuthError::UsernameTaken);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(AuthError::Store(StoreError::unavailable("down")));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_store_failure_never_reads_as_credential_failure() {
        let err = ApiError::from(StoreError::unavailable("timeout"));
        assert_ne!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert!(err.is_server_error());
    }

    #[test]
    fn test_internal_message_is_not_leaked() {
        let err = ApiError::internal("password column corrupt");
        assert!(!err.user_message().contains("password"));
    }
}
