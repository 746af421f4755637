// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Spawned-server harness for HTTP tests.

use std::net::SocketAddr;

use fairgate_api::{ApiServer, AppState};

/// Spawns the API server on an ephemeral port and returns its address.
///
/// The server task is detached; it dies with the test runtime.
pub async fn spawn_server(state: AppState) -> SocketAddr {
    let router = ApiServer::new(state).router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("test server");
    });

    addr
}

/// Builds a base URL for the spawned server.
pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}
