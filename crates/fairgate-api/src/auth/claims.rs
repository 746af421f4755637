// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims for authentication tokens.
///
/// Tokens are deliberately small: the subject, a single role authority
/// string, and the issuance/expiry pair. The role claim is a snapshot taken
/// at issuance; authorization always re-reads the live role from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the username the token was issued to.
    pub sub: String,

    /// Role authority at issuance time (e.g. `ROLE_VENDOR`). A single
    /// string, not a list: only the primary authority is embedded.
    pub role: String,

    /// Issued at time (Unix timestamp, seconds).
    pub iat: i64,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a subject with the given authority and
    /// time-to-live in milliseconds.
    pub fn new(subject: impl Into<String>, authority: impl Into<String>, ttl_ms: i64) -> Self {
        let now_ms = Utc::now().timestamp_millis();
        Self {
            sub: subject.into(),
            role: authority.into(),
            iat: now_ms / 1000,
            exp: (now_ms + ttl_ms) / 1000,
        }
    }

    /// Returns `true` if the claims have expired.
    ///
    /// Expiry is strict and inclusive: a token whose expiration equals the
    /// current second is already expired. There is no leeway.
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }

    /// Returns the expiration time as a DateTime.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Returns the issued at time as a DateTime.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }
}

// =============================================================================
// Tests
// =============================================================================
