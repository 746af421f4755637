// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Graceful shutdown coordination.
//!
//! Handles OS signals (SIGTERM, SIGINT) and exposes a future the server
//! can await to begin a graceful shutdown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

// =============================================================================
// ShutdownCoordinator
// =============================================================================

/// Coordinates graceful shutdown.
///
/// The coordinator provides a broadcast channel for notifying components
/// of shutdown and a future that resolves when shutdown is initiated.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    sender: broadcast::Sender<()>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    /// Creates a new shutdown coordinator.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(1);
        Self {
            sender,
            shutdown_initiated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribes to shutdown notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.sender.subscribe()
    }

    /// Returns `true` if shutdown has been initiated.
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_initiated.load(Ordering::SeqCst)
    }

    /// Initiates shutdown, notifying all subscribers.
    pub fn trigger(&self) {
        if !self.shutdown_initiated.swap(true, Ordering::SeqCst) {
            info!("Shutdown initiated");
            let _ = self.sender.send(());
        }
    }

    /// Returns a future that resolves when shutdown is signaled.
    ///
    /// Suitable for passing to servers that accept a shutdown future.
    pub fn shutdown_signal(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let mut receiver = self.subscribe();
        let initiated = self.shutdown_initiated.clone();
        async move {
            if initiated.load(Ordering::SeqCst) {
                return;
            }
            let _ = receiver.recv().await;
        }
    }

    /// Spawns the OS signal listener.
    ///
    /// Triggers shutdown on SIGINT (Ctrl+C) and, on Unix, SIGTERM.
    pub fn listen_for_signals(&self) {
        let coordinator = self.clone();

        tokio::spawn(async move {
            wait_for_signal().await;
            coordinator.trigger();
        });
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install SIGTERM handler");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("Received SIGINT"),
        _ = sigterm.recv() => info!("Received SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Received Ctrl+C");
}

// =============================================================================
// Tests
// =============================================================================
