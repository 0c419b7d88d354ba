// ABOUTME: HTTP client for a running Smart Recipes server's saved recipe store
// ABOUTME: Saves recipes and lists saved recipes through the /api/recipes endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use crate::constants::service_names;
use crate::errors::{AppError, AppResult, ErrorResponse};
use recipes_core::Recipe;
use reqwest::{Client, Error as ReqwestError, Response};
use serde::Deserialize;
use serde_json::Value;

/// Body returned by a successful save
#[derive(Debug, Clone, Deserialize)]
pub struct SaveResponse {
    /// Confirmation text
    pub message: String,
}

/// Client for `/api/recipes` on a Smart Recipes server
pub struct RecipeStoreClient {
    base_url: String,
    http_client: Client,
}

impl RecipeStoreClient {
    /// Create a client for the server at `base_url`, e.g. `http://localhost:8081`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http_client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/recipes", self.base_url)
    }

    /// Save a catalog recipe
    ///
    /// # Errors
    ///
    /// Returns an external-service error if the server cannot be reached or
    /// answers with a non-success status
    pub async fn save(&self, recipe: &Recipe) -> AppResult<SaveResponse> {
        let response = self
            .http_client
            .post(self.endpoint())
            .json(recipe)
            .send()
            .await
            .map_err(connection_error)?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| store_error(format!("JSON parse error: {e}")))
    }

    /// List every saved recipe object, oldest first
    ///
    /// # Errors
    ///
    /// Returns an external-service error if the server cannot be reached,
    /// answers with a non-success status, or returns something other than an
    /// array
    pub async fn list(&self) -> AppResult<Vec<Value>> {
        let response = self
            .http_client
            .get(self.endpoint())
            .send()
            .await
            .map_err(connection_error)?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| store_error(format!("JSON parse error: {e}")))
    }
}

fn connection_error(error: ReqwestError) -> AppError {
    AppError::external_unavailable(service_names::RECIPE_STORE, error.to_string())
}

fn store_error(message: String) -> AppError {
    AppError::external_service(service_names::RECIPE_STORE, message)
}

async fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorResponse>(&text).map_or(text, |body| body.error);
    Err(store_error(format!("HTTP {status}: {detail}")))
}
