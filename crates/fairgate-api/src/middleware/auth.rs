// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! JWT authentication middleware.
//!
//! Runs once per request, before any handler. The path is classified by
//! the route policy first; authentication is then attempted defensively on
//! every request, but only protected paths can be rejected.
//!
//! Invalid or expired tokens are swallowed: the failure is logged, the
//! context stays anonymous, and the request continues until the protected
//! route check rejects it with the fixed 401. Public paths therefore work
//! with no header, a stale header, or garbage in the header.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Request},
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};
use uuid::Uuid;

use fairgate_core::UserStore;

use crate::auth::{AuthContext, RouteAccess, RoutePolicy, TokenCodec};
use crate::error::ApiError;
use crate::middleware::UnauthorizedResponder;

/// The `Authorization` scheme marker. Case-sensitive, single space
/// separator; the token is the remainder of the header value.
const BEARER_PREFIX: &str = "Bearer ";

// =============================================================================
// AuthLayer
// =============================================================================

/// Layer for JWT authentication.
///
/// Wraps services with [`AuthMiddleware`], sharing the token codec, the
/// user store and the route policy across requests.
#[derive(Clone)]
pub struct AuthLayer {
    codec: Arc<TokenCodec>,
    store: Arc<dyn UserStore>,
    policy: Arc<RoutePolicy>,
}

impl AuthLayer {
    /// Creates a new auth layer.
    pub fn new(
        codec: Arc<TokenCodec>,
        store: Arc<dyn UserStore>,
        policy: Arc<RoutePolicy>,
    ) -> Self {
        Self {
            codec,
            store,
            policy,
        }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            codec: self.codec.clone(),
            store: self.store.clone(),
            policy: self.policy.clone(),
        }
    }
}

// =============================================================================
// AuthMiddleware
// =============================================================================

/// Middleware for JWT authentication.
#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    codec: Arc<TokenCodec>,
    store: Arc<dyn UserStore>,
    policy: Arc<RoutePolicy>,
}

impl<S> Service<Request<Body>> for AuthMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let codec = self.codec.clone();
        let store = self.store.clone();
        // Classification happens before any token work and never depends
        // on request state beyond the path.
        let access = self.policy.classify(req.uri().path());
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let request_id = Uuid::now_v7();

            let client_ip = req
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ci| ci.0.ip());

            let mut auth_ctx = AuthContext::anonymous().with_request_id(request_id);
            if let Some(ip) = client_ip {
                auth_ctx = auth_ctx.with_client_ip(ip);
            }

            if let Some(token) = extract_bearer_token(&req) {
                match codec.verify(&token) {
                    Ok(verified) => {
                        // The embedded role claim is a snapshot; the live
                        // role in the store is authoritative.
                        match store.find_by_username(&verified.subject).await {
                            Ok(Some(user)) => {
                                auth_ctx = AuthContext::authenticated(&user.username, user.role)
                                    .with_request_id(request_id);
                                if let Some(ip) = client_ip {
                                    auth_ctx = auth_ctx.with_client_ip(ip);
                                }
                            }
                            Ok(None) => {
                                tracing::debug!(
                                    subject = %verified.subject,
                                    "Token subject no longer exists"
                                );
                            }
                            Err(e) => {
                                if access == RouteAccess::Protected {
                                    tracing::error!(
                                        error = %e,
                                        "User store unavailable during authentication"
                                    );
                                    return Ok(ApiError::from(e).into_response());
                                }
                                tracing::warn!(
                                    error = %e,
                                    "User store unavailable; continuing unauthenticated on public path"
                                );
                            }
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Token validation failed");
                    }
                }
            }

            if access == RouteAccess::Protected && auth_ctx.is_anonymous() {
                return Ok(UnauthorizedResponder::respond());
            }

            // Request-scoped: the context lives in the request's extensions
            // and is dropped with the request on every exit path.
            req.extensions_mut().insert(auth_ctx);

            inner.call(req).await
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token<B>(req: &Request<B>) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX).map(|s| s.to_string()))
}

// =============================================================================
// Tests
// =============================================================================
