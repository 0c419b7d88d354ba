// ABOUTME: Route module organization for the Smart Recipes HTTP API
// ABOUTME: One router per domain plus small helpers shared by the handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Route module for the Smart Recipes server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer. Every error leaves as
//! `{"error": "..."}` through [`AppError`]'s response conversion, so request
//! bodies, queries and path parameters are parsed here. Handlers take axum's
//! extractors as `Result`s and hand the rejection to these helpers.

/// Recipe catalog routes
pub mod catalog;
/// Health check and readiness routes
pub mod health;
/// Image captioning proxy routes
pub mod recognize;
/// Saved recipe store routes
pub mod recipes;
/// Session ingredient and search routes
pub mod sessions;

/// Catalog route handlers
pub use catalog::CatalogRoutes;
/// Health route handlers
pub use health::HealthRoutes;
/// Captioning proxy route handlers
pub use recognize::RecognizeRoutes;
/// Saved recipe route handlers
pub use recipes::RecipeRoutes;
/// Session route handlers
pub use sessions::SessionRoutes;

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::Query;
use axum::http::StatusCode;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Request body buffered by axum, or why it could not be
type BodyResult = Result<Bytes, BytesRejection>;

/// Fallback for methods a path does not support
async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

/// The buffered body; an oversized upload is a 413
fn read_body(body: BodyResult) -> AppResult<Bytes> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::payload_too_large(defaults::MAX_IMAGE_BYTES)
        } else {
            AppError::invalid_input(rejection.body_text())
        }
    })
}

/// The deserialized query string
fn read_query<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Decode a JSON request body
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::invalid_input(format!("Invalid JSON body: {e}")))
}

/// Parse a session id path segment
fn parse_session_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(format!("Session {raw}")))
}
