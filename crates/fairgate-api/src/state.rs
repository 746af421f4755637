// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Application state shared across handlers.

use std::sync::Arc;

use fairgate_core::{MemoryUserStore, UserStore};

use crate::auth::{AuthService, RoutePolicy, TokenCodec};
use crate::config::ApiConfig;

// =============================================================================
// AppState
// =============================================================================

/// Application state shared across all handlers.
///
/// The central state container passed to handlers via axum's state
/// extraction. Everything in here is immutable after startup; concurrent
/// requests share it through `Arc` without synchronization.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Token codec for issuing and verifying JWTs.
    pub codec: Arc<TokenCodec>,
    /// User store boundary.
    pub store: Arc<dyn UserStore>,
    /// Credential verifier.
    pub auth_service: Arc<AuthService>,
    /// Route access policy.
    pub route_policy: Arc<RoutePolicy>,
}

impl AppState {
    /// Creates a new app state builder.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }

    /// Returns the token codec.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Returns the credential verifier.
    pub fn auth(&self) -> &AuthService {
        &self.auth_service
    }

    /// Returns the user store.
    pub fn store(&self) -> &Arc<dyn UserStore> {
        &self.store
    }

    /// Returns the route policy.
    pub fn policy(&self) -> &RoutePolicy {
        &self.route_policy
    }
}

// =============================================================================
// AppStateBuilder
// =============================================================================

/// Builder for constructing [`AppState`].
pub struct AppStateBuilder {
    config: Option<ApiConfig>,
    store: Option<Arc<dyn UserStore>>,
    route_policy: Option<RoutePolicy>,
}

impl AppStateBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            store: None,
            route_policy: None,
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the user store.
    pub fn store(mut self, store: Arc<dyn UserStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets the route policy.
    pub fn route_policy(mut self, policy: RoutePolicy) -> Self {
        self.route_policy = Some(policy);
        self
    }

    /// Builds the [`AppState`].
    ///
    /// The token codec is derived from the configuration; building fails
    /// if the signing secret is missing or not valid base64.
    pub fn build(self) -> crate::error::ApiResult<AppState> {
        let config = self.config.unwrap_or_default();

        let codec = Arc::new(TokenCodec::new(config.jwt.clone())?);
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryUserStore::new()));
        let route_policy = Arc::new(self.route_policy.unwrap_or_default());
        let auth_service = Arc::new(AuthService::new(store.clone(), codec.clone()));

        Ok(AppState {
            config: Arc::new(config),
            codec,
            store,
            auth_service,
            route_policy,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// FromRef implementations for extracting parts of state
// =============================================================================

impl axum::extract::FromRef<AppState> for Arc<TokenCodec> {
    fn from_ref(state: &AppState) -> Self {
        state.codec.clone()
    }
}

impl axum::extract::FromRef<AppState> for Arc<ApiConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    fn test_config() -> ApiConfig {
        let secret = STANDARD.encode("fairgate-test-secret-0123456789abcdef");
        ApiConfig::default().with_jwt(JwtConfig::new(secret))
    }

    #[test]
    fn test_builder_with_defaults() {
        let state = AppState::builder().config(test_config()).build().unwrap();

        assert_eq!(state.config.port, 8080);
        // Default policy marks login as public
        assert_eq!(
            state.policy().classify("/api/auth/login"),
            crate::auth::RouteAccess::Public
        );
    }

    #[test]
    fn test_builder_fails_without_secret() {
        assert!(AppState::builder().build().is_err());
    }

    #[test]
    fn test_builder_custom_policy() {
        let state = AppState::builder()
            .config(test_config())
            .route_policy(RoutePolicy::new().public("/status"))
            .build()
            .unwrap();

        assert_eq!(
            state.policy().classify("/status"),
            crate::auth::RouteAccess::Public
        );
        assert_eq!(
            state.policy().classify("/api/auth/login"),
            crate::auth::RouteAccess::Protected
        );
    }
}
