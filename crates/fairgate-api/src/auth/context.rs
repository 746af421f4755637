// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Authentication context.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fairgate_core::Role;

/// Authentication context for a request.
///
/// Built fresh by the authentication middleware for every request and
/// carried in the request's extensions, so it is discarded with the request
/// on every exit path. It is never stored in any process-wide holder;
/// concurrent requests each see their own value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// Username of the authenticated principal, or `anonymous`.
    pub username: String,
    /// Live role, resolved from the store at request time. `None` for
    /// unauthenticated requests.
    pub role: Option<Role>,
    /// Authority labels granted to the principal.
    pub authorities: Vec<String>,
    /// Request ID for tracing.
    pub request_id: Uuid,
    /// Client IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<IpAddr>,
}

impl AuthContext {
    /// Creates an anonymous context (for unauthenticated requests).
    pub fn anonymous() -> Self {
        Self {
            username: "anonymous".to_string(),
            role: None,
            authorities: Vec::new(),
            request_id: Uuid::now_v7(),
            client_ip: None,
        }
    }

    /// Creates a context for an authenticated principal with its current
    /// role.
    pub fn authenticated(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role: Some(role),
            authorities: vec![role.authority()],
            request_id: Uuid::now_v7(),
            client_ip: None,
        }
    }

    /// Sets the client IP address.
    pub fn with_client_ip(mut self, ip: IpAddr) -> Self {
        self.client_ip = Some(ip);
        self
    }

    /// Sets the request ID.
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }

    /// Returns `true` if no principal is attached.
    pub fn is_anonymous(&self) -> bool {
        self.role.is_none()
    }

    /// Returns `true` if the context carries the given authority label.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }

    /// Returns `true` if the principal holds an employee-grade role.
    pub fn is_employee(&self) -> bool {
        self.role.is_some_and(|r| r.is_employee())
    }

    /// Returns `true` if the principal is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::anonymous()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_context() {
        let ctx = AuthContext::anonymous();

        assert!(ctx.is_anonymous());
        assert!(!ctx.is_employee());
        assert!(!ctx.is_admin());
        assert!(ctx.authorities.is_empty());
    }

    #[test]
    fn test_authenticated_context() {
        let ctx = AuthContext::authenticated("staff@fair.example", Role::Employee);

        assert!(!ctx.is_anonymous());
        assert!(ctx.is_employee());
        assert!(!ctx.is_admin());
        assert!(ctx.has_authority("ROLE_EMPLOYEE"));
        assert!(!ctx.has_authority("ROLE_ADMIN"));
    }

    #[test]
    fn test_admin_context() {
        let ctx = AuthContext::authenticated("admin@fair.example", Role::Admin);

        assert!(ctx.is_admin());
        assert!(ctx.is_employee());
    }
}
