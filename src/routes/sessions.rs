// ABOUTME: Session routes: open sessions, edit their ingredient lists, search and recognize
// ABOUTME: Thin handlers over the session store, recipe finder and ingredient recognizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Session routes
//!
//! A client opens a session, adds ingredients by typing or by uploading a
//! photo, and asks for recipes with the current filters. All state is held
//! server-side under the session id.

use super::{parse_json, parse_session_id, read_body, read_query, BodyResult};
use crate::constants::messages;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::SearchOutcome;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use recipes_core::ingredients::normalize_ingredient;
use recipes_core::{FilterSelection, RawFilterSelection, Recipe, Substitution, UserIngredients};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A session and its ingredients
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Session identifier
    pub session_id: Uuid,
    /// Current ingredients
    pub ingredients: UserIngredients,
}

/// Body of an add-ingredient request
#[derive(Debug, Serialize, Deserialize)]
pub struct AddIngredientRequest {
    /// Raw ingredient as typed
    pub ingredient: String,
}

/// Result of an add-ingredient request
#[derive(Debug, Serialize, Deserialize)]
pub struct AddIngredientResponse {
    /// Session identifier
    pub session_id: Uuid,
    /// Ingredients after the add
    pub ingredients: UserIngredients,
    /// `false` when the ingredient was already present
    pub added: bool,
}

/// Result of a recipe search
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching recipes in catalog order
    pub recipes: Vec<Recipe>,
    /// Substitutes for the user's ingredients, only when nothing matched
    pub suggestions: Vec<Substitution>,
    /// Notice for the user, only when nothing matched
    pub message: Option<String>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        let message = outcome.message().map(ToOwned::to_owned);
        match outcome {
            SearchOutcome::Matches(recipes) => Self {
                recipes,
                suggestions: Vec::new(),
                message,
            },
            SearchOutcome::NoMatches { suggestions } => Self {
                recipes: Vec::new(),
                suggestions,
                message,
            },
        }
    }
}

/// Session routes
pub struct SessionRoutes;

impl SessionRoutes {
    /// Create all session routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/sessions", post(Self::handle_create))
            .route(
                "/api/sessions/:id",
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .route(
                "/api/sessions/:id/ingredients",
                post(Self::handle_add_ingredient).delete(Self::handle_clear_ingredients),
            )
            .route(
                "/api/sessions/:id/ingredients/:index",
                delete(Self::handle_remove_ingredient),
            )
            .route("/api/sessions/:id/recipes", get(Self::handle_search))
            .route("/api/sessions/:id/recognize", post(Self::handle_recognize))
            .with_state(resources)
    }

    async fn handle_create(State(resources): State<Arc<ServerResources>>) -> Response {
        let session = resources.sessions.create();
        let response = SessionResponse {
            session_id: session.id,
            ingredients: session.ingredients,
        };
        (StatusCode::CREATED, Json(response)).into_response()
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let session = resources.sessions.get(parse_session_id(&id)?)?;
        let response = SessionResponse {
            session_id: session.id,
            ingredients: session.ingredients,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        resources.sessions.remove(parse_session_id(&id)?)?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Add one typed ingredient; a blank entry is declined
    async fn handle_add_ingredient(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: BodyResult,
    ) -> Result<Response, AppError> {
        let session_id = parse_session_id(&id)?;
        let request: AddIngredientRequest = parse_json(&read_body(body)?)?;
        if normalize_ingredient(&request.ingredient).is_none() {
            return Err(AppError::invalid_input(messages::EMPTY_INGREDIENT));
        }

        let response = resources.sessions.with_session_mut(session_id, |session| {
            let added = session.ingredients.add(&request.ingredient);
            Ok(AddIngredientResponse {
                session_id,
                ingredients: session.ingredients.clone(),
                added,
            })
        })?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Remove the ingredient at `index`; an out-of-range index changes nothing
    async fn handle_remove_ingredient(
        State(resources): State<Arc<ServerResources>>,
        Path((id, index)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let session_id = parse_session_id(&id)?;
        let index: usize = index
            .parse()
            .map_err(|_| AppError::invalid_input(format!("Invalid ingredient index: {index}")))?;

        let ingredients = resources.sessions.with_session_mut(session_id, |session| {
            session.ingredients.remove(index);
            Ok(session.ingredients.clone())
        })?;
        let response = SessionResponse {
            session_id,
            ingredients,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_clear_ingredients(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let session_id = parse_session_id(&id)?;
        let ingredients = resources.sessions.with_session_mut(session_id, |session| {
            session.ingredients.clear();
            Ok(session.ingredients.clone())
        })?;
        let response = SessionResponse {
            session_id,
            ingredients,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Search with `?diet=&time=&difficulty=`, after the configured delay
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        query: Result<Query<RawFilterSelection>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let session_id = parse_session_id(&id)?;
        let selection = FilterSelection::from_raw(&read_query(query)?);
        let session = resources.sessions.get(session_id)?;

        let outcome = resources
            .finder()
            .search(&id, &session.ingredients, &selection)
            .await;
        Ok((StatusCode::OK, Json(SearchResponse::from(outcome))).into_response())
    }

    /// Caption the uploaded photo and merge detected ingredients
    async fn handle_recognize(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: BodyResult,
    ) -> Result<Response, AppError> {
        let session_id = parse_session_id(&id)?;
        let detection = resources
            .recognizer()
            .recognize(&resources.sessions, session_id, read_body(body)?)
            .await?;
        Ok((StatusCode::OK, Json(detection)).into_response())
    }
}
