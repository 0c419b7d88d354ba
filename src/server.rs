// ABOUTME: HTTP server assembly and lifecycle for the Smart Recipes API
// ABOUTME: Merges the domain routers, applies CORS, tracing and body limits, serves until a signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use crate::middleware::{request_span, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{CatalogRoutes, HealthRoutes, RecipeRoutes, RecognizeRoutes, SessionRoutes};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::future::pending;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Build the complete application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(CatalogRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(RecognizeRoutes::routes(Arc::clone(&resources)))
        .merge(SessionRoutes::routes(resources))
        .layer(DefaultBodyLimit::max(defaults::MAX_IMAGE_BYTES))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors)
}

/// Smart Recipes HTTP server
pub struct RecipeServer {
    resources: Arc<ServerResources>,
}

impl RecipeServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> AppResult<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|e| AppError::config(format!("Failed to bind {address}: {e}")))?;
        self.serve(listener).await
    }

    /// Serve on an already-bound listener until a shutdown signal
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails
    pub async fn serve(self, listener: TcpListener) -> AppResult<()> {
        if let Ok(local) = listener.local_addr() {
            info!("HTTP server listening on http://{local}");
        }

        let database = self.resources.database.clone();
        let sweeper = spawn_session_sweeper(Arc::clone(&self.resources));
        let app = build_router(self.resources);
        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("HTTP server error: {e}")));
        if let Some(sweeper) = sweeper {
            sweeper.abort();
        }
        served?;

        info!("Server shutting down, closing database");
        database.close().await;
        Ok(())
    }
}

/// Periodically drop idle sessions; nothing runs when eviction is off
fn spawn_session_sweeper(resources: Arc<ServerResources>) -> Option<JoinHandle<()>> {
    if resources.config.sessions.idle_ttl().is_none() {
        return None;
    }

    Some(tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(defaults::SESSION_SWEEP_INTERVAL_SECS));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let evicted = resources.sessions.evict_idle();
            if evicted > 0 {
                debug!(
                    sessions.evicted = evicted,
                    sessions.open = resources.sessions.len(),
                    "Evicted idle sessions"
                );
            }
        }
    }))
}

async fn shutdown_signal() {
    let interrupt = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {e}");
                pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        () = interrupt => {},
        () = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, ServerConfig};

    async fn resources(idle_ttl_secs: u64) -> Arc<ServerResources> {
        let mut config = ServerConfig {
            database: DatabaseConfig::in_memory(),
            ..ServerConfig::default()
        };
        config.sessions.idle_ttl_secs = idle_ttl_secs;
        Arc::new(ServerResources::from_config(config).await.unwrap())
    }

    #[tokio::test]
    async fn test_sweeper_runs_only_with_idle_ttl() {
        assert!(spawn_session_sweeper(resources(0).await).is_none());

        let sweeper = spawn_session_sweeper(resources(60).await).unwrap();
        sweeper.abort();
        assert!(sweeper.await.unwrap_err().is_cancelled());
    }
}
