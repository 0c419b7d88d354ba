// ABOUTME: Error types for the Smart Recipes server
// ABOUTME: Re-exports the shared error system from recipes-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Unified error handling
//!
//! The error types live in `recipes-core` so the CLI and the server agree on
//! codes and response bodies; with the `http-response` feature `AppError`
//! renders itself as an axum response.

pub use recipes_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
