// ABOUTME: Image captioning client that turns raw image bytes into text captions
// ABOUTME: Hugging Face inference API implementation plus a mock for tests and keyless runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Image captioning
//!
//! The hosted model receives the image as `application/octet-stream` with a
//! bearer token and answers with a JSON array of `{"generated_text": ...}`
//! objects, or with an `{"error": ...}` object (for example while the model
//! is loading). Anything else is treated as a failed call rather than trusted.
//!
//! Calls are made once: no retry and no cancellation. A request timeout
//! applies only when one is configured.

use crate::constants::{messages, service_names};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// One caption returned by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionResult {
    /// Caption text, e.g. `"a bowl of rice with broccoli"`
    pub generated_text: String,
}

/// Something that can caption an image
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Caption raw image bytes
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the call fails or the response
    /// is not a non-empty array of captions
    async fn caption(&self, image: Bytes) -> AppResult<Vec<CaptionResult>>;
}

/// Text of the first caption
///
/// # Errors
///
/// Returns an external-service error when `results` is empty
pub fn first_caption(results: &[CaptionResult]) -> AppResult<&str> {
    results
        .first()
        .map(|r| r.generated_text.as_str())
        .ok_or_else(|| captioning_error("model returned no captions"))
}

fn captioning_error(message: impl Into<String>) -> AppError {
    AppError::external_service(service_names::CAPTIONING, message)
        .with_public_message(messages::FAILED_TO_PROCESS_IMAGE)
}

/// Validate a decoded model response
///
/// # Errors
///
/// Returns an external-service error for an `{error}` object, an empty array,
/// or any other shape than an array of objects with a string `generated_text`
pub fn parse_caption_response(body: &Value) -> AppResult<Vec<CaptionResult>> {
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return Err(captioning_error(format!("model error: {error}")));
    }

    let Some(items) = body.as_array() else {
        return Err(captioning_error(format!(
            "malformed response, expected an array: {body}"
        )));
    };
    if items.is_empty() {
        return Err(captioning_error("model returned no captions"));
    }

    items
        .iter()
        .map(|item| {
            item.get("generated_text")
                .and_then(Value::as_str)
                .map(|text| CaptionResult {
                    generated_text: text.to_owned(),
                })
                .ok_or_else(|| {
                    captioning_error(format!(
                        "malformed response item, missing generated_text: {item}"
                    ))
                })
        })
        .collect()
}

/// Hugging Face inference API settings
#[derive(Debug, Clone)]
pub struct HuggingFaceCaptionerConfig {
    /// Model endpoint
    pub api_url: String,
    /// Bearer token
    pub api_key: String,
    /// Optional request timeout
    pub timeout: Option<Duration>,
}

/// Captioner backed by the Hugging Face inference API
pub struct HuggingFaceCaptioner {
    config: HuggingFaceCaptionerConfig,
    http_client: Client,
}

impl HuggingFaceCaptioner {
    /// Create a new captioning client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: HuggingFaceCaptionerConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::config(format!("Failed to build captioning client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl CaptionProvider for HuggingFaceCaptioner {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    async fn caption(&self, image: Bytes) -> AppResult<Vec<CaptionResult>> {
        debug!(bytes = image.len(), url = %self.config.api_url, "Sending image for captioning");

        let response = self
            .http_client
            .post(&self.config.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await
            .map_err(|e| {
                AppError::external_unavailable(service_names::CAPTIONING, e.to_string())
                    .with_public_message(messages::FAILED_TO_PROCESS_IMAGE)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            captioning_error(format!("failed to read response body: {e}"))
        })?;

        if !status.is_success() {
            let detail = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(ToOwned::to_owned))
                .unwrap_or(text);
            return Err(captioning_error(format!("HTTP {status}: {detail}")));
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|e| captioning_error(format!("JSON parse error: {e}")))?;
        parse_caption_response(&body)
    }
}

/// Mock captioner for testing and for running without an API key (no network calls)
pub struct MockCaptioner {
    outcome: Result<String, String>,
}

impl MockCaptioner {
    /// Always answer with `caption`
    #[must_use]
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            outcome: Ok(caption.into()),
        }
    }

    /// Always fail with `message`
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl Default for MockCaptioner {
    fn default() -> Self {
        Self::new(messages::MOCK_CAPTION)
    }
}

#[async_trait]
impl CaptionProvider for MockCaptioner {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn caption(&self, image: Bytes) -> AppResult<Vec<CaptionResult>> {
        debug!(bytes = image.len(), "Mock captioning");
        match &self.outcome {
            Ok(caption) => Ok(vec![CaptionResult {
                generated_text: caption.clone(),
            }]),
            Err(message) => Err(captioning_error(message.clone())),
        }
    }
}
