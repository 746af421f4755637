// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Credential and store error hierarchy.
//!
//! Two rules govern this hierarchy:
//!
//! - A failed lookup and a wrong password are indistinguishable to callers:
//!   both surface as [`AuthError::InvalidCredentials`]. The distinction
//!   exists only in debug logs.
//! - Store transport failures are service failures, never credential
//!   failures. They carry their own variant and map to 503, not 401.

use thiserror::Error;

// =============================================================================
// StoreError
// =============================================================================

/// Errors raised at the user store boundary.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store could not be reached or the operation timed out.
    #[error("User store unavailable: {message}")]
    Unavailable {
        /// Transport-level detail for logging.
        message: String,
    },

    /// An insert collided with an existing username.
    #[error("Username already exists: {username}")]
    DuplicateUsername {
        /// The conflicting username.
        username: String,
    },
}

impl StoreError {
    /// Creates an unavailability error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a duplicate-username error.
    pub fn duplicate(username: impl Into<String>) -> Self {
        Self::DuplicateUsername {
            username: username.into(),
        }
    }

    /// Returns `true` if the failure is transient and the store may recover.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Unavailable { .. })
    }
}

// =============================================================================
// AuthError
// =============================================================================

/// Errors produced by the credential verifier.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The username does not exist or the password does not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The password matched but the account lacks the required role.
    #[error("Access denied: employee credentials required")]
    AccessDenied,

    /// Registration attempted with a username that is already taken.
    #[error("Username is already taken")]
    UsernameTaken,

    /// The user store failed; distinct from any credential outcome.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Returns the HTTP status code this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 401,
            AuthError::AccessDenied => 403,
            AuthError::UsernameTaken => 400,
            AuthError::Store(e) => {
                if e.is_transient() {
                    503
                } else {
                    500
                }
            }
        }
    }

    /// Returns `true` if this error reflects a service failure rather than
    /// a caller mistake.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AuthError::Store(_))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::AccessDenied.status_code(), 403);
        assert_eq!(AuthError::UsernameTaken.status_code(), 400);
        assert_eq!(
            AuthError::Store(StoreError::unavailable("timeout")).status_code(),
            503
        );
    }

    #[test]
    fn test_store_error_is_not_a_credential_error() {
        let err = AuthError::from(StoreError::unavailable("connection refused"));
        assert!(err.is_server_error());
        assert!(!AuthError::InvalidCredentials.is_server_error());
    }

    #[test]
    fn test_transient_detection() {
        assert!(StoreError::unavailable("x").is_transient());
        assert!(!StoreError::duplicate("user").is_transient());
    }
}
