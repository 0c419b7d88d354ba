// ABOUTME: External service client modules
// ABOUTME: Image captioning providers and the saved recipe store HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! External API Clients

/// Image captioning providers
pub mod captioning;
/// Saved recipe store client
pub mod recipe_store;

// Re-export commonly used types
pub use captioning::{
    first_caption, CaptionProvider, CaptionResult, HuggingFaceCaptioner,
    HuggingFaceCaptionerConfig, MockCaptioner,
};
pub use recipe_store::{RecipeStoreClient, SaveResponse};
