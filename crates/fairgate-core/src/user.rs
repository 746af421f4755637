// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Stored accounts and authenticated principals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

// =============================================================================
// UserRecord
// =============================================================================

/// A stored user account.
///
/// This is the shape the user store hands back across its boundary. The role
/// is parsed into the typed [`Role`] at that boundary; nothing downstream
/// compares role strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Login name (an email address for self-registered vendors).
    pub username: String,
    /// Argon2 password hash in PHC string format. Never the plaintext.
    pub password_hash: String,
    /// Business name for vendor accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Account role.
    pub role: Role,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates a new record with the given credentials and role.
    ///
    /// The contact email defaults to the username, matching the
    /// self-registration flow where the username is the email address.
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        let username = username.into();
        Self {
            email: username.clone(),
            username,
            password_hash: password_hash.into(),
            business_name: None,
            contact_number: None,
            address: None,
            role,
            created_at: Utc::now(),
        }
    }

    /// Sets the business name.
    pub fn with_business_name(mut self, business_name: impl Into<String>) -> Self {
        self.business_name = Some(business_name.into());
        self
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the contact phone number.
    pub fn with_contact_number(mut self, contact_number: impl Into<String>) -> Self {
        self.contact_number = Some(contact_number.into());
        self
    }

    /// Sets the postal address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Returns `true` if the account holds an employee-grade role.
    pub fn is_employee(&self) -> bool {
        self.role.is_employee()
    }

    /// Returns `true` if the account is a vendor.
    pub fn is_vendor(&self) -> bool {
        self.role == Role::Vendor
    }

    /// Builds the principal this account authenticates as.
    pub fn principal(&self) -> Principal {
        Principal {
            username: self.username.clone(),
            role: self.role,
        }
    }
}

// =============================================================================
// Principal
// =============================================================================

/// An authenticated identity.
///
/// Produced by the credential verifier after a password check succeeds.
/// Ephemeral: principals live for the duration of a request or a token
/// issuance and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Login name.
    pub username: String,
    /// Verified role at authentication time.
    pub role: Role,
}

impl Principal {
    /// Creates a new principal.
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// Returns the authority label for this principal's role.
    pub fn authority(&self) -> String {
        self.role.authority()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_defaults_email_to_username() {
        let user = UserRecord::new("vendor@fair.example", "hash", Role::Vendor);
        assert_eq!(user.email, "vendor@fair.example");
        assert!(user.business_name.is_none());
    }

    #[test]
    fn test_user_record_builders() {
        let user = UserRecord::new("staff@fair.example", "hash", Role::Employee)
            .with_business_name("Fair Ops")
            .with_email("ops@fair.example")
            .with_contact_number("+20-100-000-0000");

        assert_eq!(user.email, "ops@fair.example");
        assert_eq!(user.business_name.as_deref(), Some("Fair Ops"));
        assert!(user.is_employee());
        assert!(!user.is_vendor());
    }

    #[test]
    fn test_principal_from_record() {
        let user = UserRecord::new("admin@fair.example", "hash", Role::Admin);
        let principal = user.principal();

        assert_eq!(principal.username, "admin@fair.example");
        assert_eq!(principal.role, Role::Admin);
        assert_eq!(principal.authority(), "ROLE_ADMIN");
    }
}
