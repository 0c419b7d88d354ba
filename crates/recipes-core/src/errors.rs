// ABOUTME: Unified error type shared by the recipe core, the server and the CLI
// ABOUTME: Maps error codes to HTTP statuses and renders `{error}` payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! # Unified Error Handling
//!
//! Every failure in the system is an [`AppError`] carrying an [`ErrorCode`].
//! The code decides the HTTP status; the payload sent to clients is always the
//! flat `{"error": "..."}` object the browser client expects.
//!
//! Client errors (4xx) expose their message verbatim since it tells the user
//! what to fix. Server errors (5xx) expose only a generic public message; the
//! detailed message and source chain are logged where the response is built.

#[cfg(feature = "http-response")]
use axum::{
    response::{IntoResponse, Response},
    Json,
};
#[cfg(feature = "http-response")]
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    /// The provided input is invalid
    InvalidInput,
    /// A required field or body is missing
    MissingRequiredField,
    /// The payload format is invalid
    InvalidFormat,
    /// The request body exceeds the accepted size
    PayloadTooLarge,

    // Resources
    /// The requested resource does not exist
    ResourceNotFound,
    /// The HTTP method is not supported on this endpoint
    MethodNotAllowed,

    // External services
    /// An external collaborator returned an error or a malformed response
    ExternalServiceError,
    /// An external collaborator could not be reached
    ExternalServiceUnavailable,

    // Configuration
    /// Generic configuration error
    ConfigError,
    /// Configuration value or data document is invalid
    ConfigInvalid,

    // Internal
    /// Unexpected internal failure
    InternalError,
    /// Database operation failed
    DatabaseError,
    /// Serialization or deserialization failed
    SerializationError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::InvalidFormat => 400,
            Self::ResourceNotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::PayloadTooLarge => 413,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable => 502,
            Self::ConfigError
            | Self::ConfigInvalid
            | Self::InternalError
            | Self::DatabaseError
            | Self::SerializationError => 500,
        }
    }

    /// Get a user-facing description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::PayloadTooLarge => "The request body is too large",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Whether this code describes a failure on the server side (5xx)
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.http_status() >= 500
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Detailed, human-readable message
    pub message: String,
    /// Message shown to clients instead of the code description on server errors
    pub public_message: Option<&'static str>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            public_message: None,
            source: None,
        }
    }

    /// Override the generic message shown to clients for server errors
    #[must_use]
    pub fn with_public_message(mut self, message: &'static str) -> Self {
        self.public_message = Some(message);
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Text placed in the `error` field of the response body
    #[must_use]
    pub fn client_message(&self) -> String {
        if self.code.is_server_error() {
            self.public_message
                .unwrap_or_else(|| self.code.description())
                .to_owned()
        } else {
            self.message.clone()
        }
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required field or body
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Request body over the size limit
    #[must_use]
    pub fn payload_too_large(limit_bytes: usize) -> Self {
        Self::new(
            ErrorCode::PayloadTooLarge,
            format!("Request body exceeds {limit_bytes} bytes"),
        )
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Unsupported HTTP method
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(ErrorCode::MethodNotAllowed, "Method not allowed")
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service unreachable
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Invalid configuration value or data document
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing error text
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.client_message(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-response")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.code.is_server_error() {
            tracing::error!(
                error.code = ?self.code,
                error.source = ?self.source.as_ref().map(ToString::to_string),
                "{}",
                self.message
            );
        } else {
            tracing::debug!(error.code = ?self.code, "{}", self.message);
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
