// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness always answers; readiness also checks the saved recipe database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Health check routes for service monitoring

use crate::resources::ServerResources;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.database.ping().await {
            Ok(()) => (
                StatusCode::OK,
                Json(json!({
                    "status": "ready",
                    "recipes": resources.data.catalog().len(),
                    "sessions": resources.sessions.len(),
                    "timestamp": Utc::now().to_rfc3339()
                })),
            )
                .into_response(),
            Err(e) => {
                warn!("Readiness check failed: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "not ready",
                        "timestamp": Utc::now().to_rfc3339()
                    })),
                )
                    .into_response()
            }
        }
    }
}
