// ABOUTME: Read-only recipe catalog routes
// ABOUTME: Serves the full catalog and the substitution table the server was started with
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use crate::resources::ServerResources;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use recipes_core::{Recipe, SubstitutionTable};
use std::sync::Arc;

/// Catalog routes
pub struct CatalogRoutes;

impl CatalogRoutes {
    /// Create all catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/catalog", get(Self::handle_catalog))
            .route("/api/substitutions", get(Self::handle_substitutions))
            .with_state(resources)
    }

    async fn handle_catalog(State(resources): State<Arc<ServerResources>>) -> Json<Vec<Recipe>> {
        Json(resources.data.catalog().recipes().to_vec())
    }

    async fn handle_substitutions(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<SubstitutionTable> {
        Json(resources.data.substitutions().clone())
    }
}
