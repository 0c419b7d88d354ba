// ABOUTME: Saved recipe store routes
// ABOUTME: POST saves one recipe object, GET lists every saved recipe in insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use super::{method_not_allowed, parse_json, read_body, BodyResult};
use crate::constants::messages;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Saved recipe routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all saved recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recipes",
                get(Self::handle_list)
                    .post(Self::handle_save)
                    .fallback(method_not_allowed),
            )
            .with_state(resources)
    }

    /// Every saved recipe, oldest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let recipes = resources.database.saved_recipes().list().await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Save the JSON object in the body as given
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        body: BodyResult,
    ) -> Result<Response, AppError> {
        let recipe: Value = parse_json(&read_body(body)?)?;
        let id = resources.database.saved_recipes().save(&recipe).await?;
        let name = recipe
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("<unnamed>");
        info!(recipe.id = id, recipe.name = name, "Recipe saved");

        Ok((
            StatusCode::CREATED,
            Json(json!({ "message": messages::RECIPE_SAVED })),
        )
            .into_response())
    }
}
