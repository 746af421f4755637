// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Account roles and derived authorities.

use serde::{Deserialize, Serialize};

/// Prefix applied to role names when deriving authority labels.
const AUTHORITY_PREFIX: &str = "ROLE_";

// =============================================================================
// Role
// =============================================================================

/// Account roles in the FAIRGATE reservation platform.
///
/// The set is closed: every stored role string resolves to exactly one of
/// these variants, with [`Role::Vendor`] as the fallback for anything
/// unrecognized. Roles are parsed once at the store boundary and carried as
/// this typed value everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Publisher or vendor who can reserve exhibition stalls.
    Vendor,
    /// Fair organizer who can view and manage reservations.
    Employee,
    /// Administrative account with full system access.
    Admin,
}

impl Role {
    /// Returns the canonical role name used for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Vendor => "VENDOR",
            Role::Employee => "EMPLOYEE",
            Role::Admin => "ADMIN",
        }
    }

    /// Parses a role from a stored string, falling back to [`Role::Vendor`].
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Empty or unrecognized input resolves to `Vendor` rather than an
    /// error, so reads from storage can never fail on a role column.
    pub fn from_str_lossy(text: &str) -> Self {
        match text.trim().to_ascii_uppercase().as_str() {
            "EMPLOYEE" => Role::Employee,
            "ADMIN" => Role::Admin,
            _ => Role::Vendor,
        }
    }

    /// Returns the authority label derived from this role.
    ///
    /// The mapping is one-to-one: `ROLE_` followed by the canonical name.
    pub fn authority(&self) -> String {
        format!("{}{}", AUTHORITY_PREFIX, self.as_str())
    }

    /// Returns `true` for roles admitted to employee-only authentication
    /// paths (Employee and Admin).
    pub fn is_employee(&self) -> bool {
        matches!(self, Role::Employee | Role::Admin)
    }

    /// Returns a human-readable description of the role.
    pub fn description(&self) -> &'static str {
        match self {
            Role::Vendor => "Publisher or vendor who can reserve exhibition stalls",
            Role::Employee => "Fair organizer who can view and manage reservations",
            Role::Admin => "Administrative account with full system access",
        }
    }

    /// Returns all roles in the closed set.
    pub fn all() -> &'static [Role] {
        &[Role::Vendor, Role::Employee, Role::Admin]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Vendor
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_lossy_exact() {
        assert_eq!(Role::from_str_lossy("VENDOR"), Role::Vendor);
        assert_eq!(Role::from_str_lossy("EMPLOYEE"), Role::Employee);
        assert_eq!(Role::from_str_lossy("ADMIN"), Role::Admin);
    }

    #[test]
    fn test_from_str_lossy_case_and_whitespace() {
        assert_eq!(Role::from_str_lossy("admin"), Role::Admin);
        assert_eq!(Role::from_str_lossy("  Employee  "), Role::Employee);
        assert_eq!(Role::from_str_lossy("vEnDoR"), Role::Vendor);
    }

    #[test]
    fn test_from_str_lossy_defaults_to_vendor() {
        assert_eq!(Role::from_str_lossy(""), Role::Vendor);
        assert_eq!(Role::from_str_lossy("   "), Role::Vendor);
        assert_eq!(Role::from_str_lossy("bogus"), Role::Vendor);
        assert_eq!(Role::from_str_lossy("superadmin"), Role::Vendor);
    }

    #[test]
    fn test_authority_mapping() {
        assert_eq!(Role::Vendor.authority(), "ROLE_VENDOR");
        assert_eq!(Role::Employee.authority(), "ROLE_EMPLOYEE");
        assert_eq!(Role::Admin.authority(), "ROLE_ADMIN");
    }

    #[test]
    fn test_authority_is_one_to_one() {
        let mut seen = std::collections::HashSet::new();
        for role in Role::all() {
            assert!(seen.insert(role.authority()));
        }
    }

    #[test]
    fn test_is_employee() {
        assert!(!Role::Vendor.is_employee());
        assert!(Role::Employee.is_employee());
        assert!(Role::Admin.is_employee());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Role::Employee).unwrap();
        assert_eq!(json, "\"EMPLOYEE\"");

        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
