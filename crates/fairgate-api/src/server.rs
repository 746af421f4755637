// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use fairgate_core::UserStore;

use crate::auth::RoutePolicy;
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::handlers;
use crate::middleware::AuthLayer;
use crate::state::{AppState, AppStateBuilder};

// =============================================================================
// ApiServer
// =============================================================================

/// The API server.
///
/// Main entry point for creating and running the HTTP service.
pub struct ApiServer {
    state: AppState,
    config: Arc<ApiConfig>,
}

impl ApiServer {
    /// Creates a new API server with the given state.
    pub fn new(state: AppState) -> Self {
        let config = state.config.clone();
        Self { state, config }
    }

    /// Creates the router with all routes and middleware.
    ///
    /// Every request passes through the authentication middleware; the
    /// route policy decides which paths may continue unauthenticated.
    /// CORS is attached to the protected branch only — public login and
    /// registration traffic is not cross-origin-negotiated, mirroring the
    /// split routing configuration this service replaces.
    pub fn router(&self) -> Router {
        let auth = AuthLayer::new(
            self.state.codec.clone(),
            self.state.store.clone(),
            self.state.route_policy.clone(),
        );

        let middleware_stack = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(self.config.request_timeout))
            .layer(auth);

        // Public surface: health probes plus login/registration.
        let public_routes = Router::new()
            .route("/health", get(handlers::health))
            .route("/ready", get(handlers::ready))
            .route("/api/auth/login", post(handlers::login))
            .route("/api/auth/register", post(handlers::register))
            .route("/api/auth/employee/login", post(handlers::employee_login))
            .route(
                "/api/auth/employee/register",
                post(handlers::employee_register),
            );

        // Protected surface: stateless, every request re-authenticates.
        let protected_routes = Router::new()
            .route("/api/auth/me", get(handlers::current_user))
            .layer(create_cors_layer(&self.config));

        Router::new()
            .merge(public_routes)
            .merge(protected_routes)
            .layer(middleware_stack)
            .with_state(self.state.clone())
    }

    /// Runs the server.
    pub async fn run(self) -> ApiResult<()> {
        let addr = self.config.socket_addr();
        let router = self.router();

        info!("Starting API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| crate::error::ApiError::internal(format!("Failed to bind: {}", e)))?;

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(|e| crate::error::ApiError::internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Runs the server with graceful shutdown.
    pub async fn run_with_shutdown(
        self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> ApiResult<()> {
        let addr = self.config.socket_addr();
        let router = self.router();

        info!("Starting API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| crate::error::ApiError::internal(format!("Failed to bind: {}", e)))?;

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| crate::error::ApiError::internal(format!("Server error: {}", e)))?;

        info!("API server shutdown complete");

        Ok(())
    }

    /// Returns the server address.
    pub fn addr(&self) -> SocketAddr {
        self.config.socket_addr()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates the CORS layer from configuration.
fn create_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = &config.cors;

    let mut layer = CorsLayer::new().max_age(Duration::from_secs(cors.max_age));

    // Origins
    if cors.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    // Methods
    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    // Headers
    if cors.allowed_headers.contains(&"*".to_string()) {
        layer = layer.allow_headers(Any);
    } else {
        layer = layer.allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);
    }

    // Credentials (never combined with a wildcard origin)
    if cors.allow_credentials && !cors.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_credentials(true);
    }

    layer
}

// =============================================================================
// Server Builder
// =============================================================================

/// Builder for creating the API server.
pub struct ApiServerBuilder {
    state_builder: AppStateBuilder,
}

impl ApiServerBuilder {
    /// Creates a new server builder.
    pub fn new() -> Self {
        Self {
            state_builder: AppState::builder(),
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.state_builder = self.state_builder.config(config);
        self
    }

    /// Sets the user store.
    pub fn store(mut self, store: Arc<dyn UserStore>) -> Self {
        self.state_builder = self.state_builder.store(store);
        self
    }

    /// Sets the route policy.
    pub fn route_policy(mut self, policy: RoutePolicy) -> Self {
        self.state_builder = self.state_builder.route_policy(policy);
        self
    }

    /// Builds the server.
    pub fn build(self) -> ApiResult<ApiServer> {
        let state = self.state_builder.build()?;
        Ok(ApiServer::new(state))
    }
}

impl Default for ApiServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
