// ABOUTME: System-wide constants for the Smart Recipes server
// ABOUTME: Environment variable names, configuration defaults, and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! # Constants Module
//!
//! Defaults and names used by configuration, plus the user-facing notices the
//! HTTP API returns verbatim.

/// Service identity
pub mod service_names {
    /// Default service name for structured logging
    pub const SMART_RECIPES_SERVER: &str = "smart-recipes-server";
    /// Service name used in captioning errors and logs
    pub const CAPTIONING: &str = "Captioning";
    /// Service name used in recipe store client errors
    pub const RECIPE_STORE: &str = "Recipe store";
}

/// Environment variable names
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP listen address
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Database connection URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Connection pool size
    pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
    /// Captioning model endpoint
    pub const HF_API_URL: &str = "HF_API_URL";
    /// Captioning bearer token
    pub const HF_API_KEY: &str = "HF_API_KEY";
    /// Optional captioning request timeout
    pub const CAPTION_TIMEOUT_SECS: &str = "CAPTION_TIMEOUT_SECS";
    /// Cosmetic delay before filtering
    pub const RECIPE_GENERATION_DELAY_MS: &str = "RECIPE_GENERATION_DELAY_MS";
    /// Optional recipe data YAML document
    pub const RECIPE_DATA_PATH: &str = "RECIPE_DATA_PATH";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Seconds a session may sit idle before eviction; 0 disables eviction
    pub const SESSION_IDLE_TTL_SECS: &str = "SESSION_IDLE_TTL_SECS";
    /// Base URL used by the CLI to reach the server
    pub const SMART_RECIPES_URL: &str = "SMART_RECIPES_URL";
}

/// Configuration defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default listen address
    pub const HOST: &str = "0.0.0.0";
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/smart_recipes.db";
    /// Default pool size for file-backed databases
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    /// Default image captioning model endpoint
    pub const HF_API_URL: &str =
        "https://api-inference.huggingface.co/models/nlpconnect/vit-gpt2-image-captioning";
    /// Default delay before filtering, in milliseconds
    pub const RECIPE_GENERATION_DELAY_MS: u64 = 1000;
    /// Default CORS origin policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Default server URL for the CLI
    pub const SERVER_URL: &str = "http://localhost:8081";
    /// Default idle lifetime of a session
    pub const SESSION_IDLE_TTL_SECS: u64 = 3600;
    /// How often idle sessions are swept
    pub const SESSION_SWEEP_INTERVAL_SECS: u64 = 60;
    /// Largest accepted image upload
    pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
}

/// User-facing messages returned by the API
pub mod messages {
    /// Save succeeded
    pub const RECIPE_SAVED: &str = "Recipe saved successfully";
    /// Nothing matched the ingredients and filters
    pub const NO_RECIPES_FOUND: &str = "No recipes found. Try different ingredients or filters.";
    /// Recognition requested without an image
    pub const SELECT_IMAGE_FIRST: &str = "Please select an image first.";
    /// Caption contained no known ingredient
    pub const NO_INGREDIENTS_DETECTED: &str = "Could not detect clear ingredients. Try another image.";
    /// Prefix for the detected-ingredients notice
    pub const DETECTED_INGREDIENTS_PREFIX: &str = "Detected ingredients: ";
    /// Public message for captioning failures
    pub const FAILED_TO_PROCESS_IMAGE: &str = "Failed to process image";
    /// Blank manual ingredient entry
    pub const EMPTY_INGREDIENT: &str = "Please enter an ingredient.";
    /// Mock caption used when no captioning key is configured
    pub const MOCK_CAPTION: &str = "a plate of rice with chicken and broccoli";
}
