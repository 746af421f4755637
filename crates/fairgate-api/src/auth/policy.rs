// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Route access policy.
//!
//! Every request path classifies to exactly one of [`RouteAccess::Public`]
//! or [`RouteAccess::Protected`] through a single ordered rule list,
//! evaluated top to bottom with the first match winning. The public rules
//! for login, registration and health come before the catch-all so that
//! public traffic can short-circuit; anything unmatched is protected.
//!
//! The policy is immutable configuration built at startup; classification
//! never depends on request state.

use serde::{Deserialize, Serialize};

// =============================================================================
// RouteAccess
// =============================================================================

/// Access classification for a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteAccess {
    /// Bypasses authentication entirely; never rejected by the
    /// authenticator.
    Public,
    /// Requires a populated authentication context.
    Protected,
}

// =============================================================================
// RouteRule
// =============================================================================

/// A single path matcher with its access class.
///
/// Patterns match exactly, or by prefix when they end with `*`
/// (e.g. `/api/auth/*`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRule {
    /// Path pattern.
    pub pattern: String,
    /// Access class granted on match.
    pub access: RouteAccess,
}

impl RouteRule {
    /// Creates a new rule.
    pub fn new(pattern: impl Into<String>, access: RouteAccess) -> Self {
        Self {
            pattern: pattern.into(),
            access,
        }
    }

    /// Returns `true` if the rule matches the given path.
    pub fn matches(&self, path: &str) -> bool {
        if let Some(prefix) = self.pattern.strip_suffix('*') {
            path.starts_with(prefix)
        } else {
            self.pattern == path
        }
    }
}

// =============================================================================
// RoutePolicy
// =============================================================================

/// Ordered list of route rules with a protected default.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    rules: Vec<RouteRule>,
}

impl RoutePolicy {
    /// Creates an empty policy: every path is protected.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates the standard policy: login, registration and health
    /// endpoints are public, everything else is protected.
    pub fn with_default_public_paths() -> Self {
        Self::new()
            .public("/health")
            .public("/ready")
            .public("/api/auth/login")
            .public("/api/auth/register")
            .public("/api/auth/employee/login")
            .public("/api/auth/employee/register")
    }

    /// Appends a public rule.
    pub fn public(mut self, pattern: impl Into<String>) -> Self {
        self.rules.push(RouteRule::new(pattern, RouteAccess::Public));
        self
    }

    /// Appends a protected rule.
    ///
    /// Useful for carving a protected island out of a broader public
    /// prefix; order decides, so place it before the public rule.
    pub fn protected(mut self, pattern: impl Into<String>) -> Self {
        self.rules
            .push(RouteRule::new(pattern, RouteAccess::Protected));
        self
    }

    /// Classifies a request path.
    ///
    /// Rules are evaluated in insertion order; the first match wins, and
    /// unmatched paths are protected.
    pub fn classify(&self, path: &str) -> RouteAccess {
        self.rules
            .iter()
            .find(|rule| rule.matches(path))
            .map(|rule| rule.access)
            .unwrap_or(RouteAccess::Protected)
    }

    /// Returns the configured rules in evaluation order.
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::with_default_public_paths()
    }
}

// =============================================================================
// Tests
// =============================================================================
