// ABOUTME: Image captioning proxy route
// ABOUTME: Forwards raw image bytes to the captioning provider and returns its captions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use super::{method_not_allowed, read_body, BodyResult};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::caption_image;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;

/// Captioning proxy routes
pub struct RecognizeRoutes;

impl RecognizeRoutes {
    /// Create the captioning proxy route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recognize",
                post(Self::handle_recognize).fallback(method_not_allowed),
            )
            .with_state(resources)
    }

    /// Caption the `application/octet-stream` body
    async fn handle_recognize(
        State(resources): State<Arc<ServerResources>>,
        body: BodyResult,
    ) -> Result<Response, AppError> {
        let captions = caption_image(resources.captioner.as_ref(), read_body(body)?).await?;
        Ok((StatusCode::OK, Json(captions)).into_response())
    }
}
