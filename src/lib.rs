// ABOUTME: Main library entry point for the Smart Recipes server and command-line client
// ABOUTME: Wires configuration, storage, external clients, sessions, services and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

#![deny(unsafe_code)]

//! # Smart Recipes
//!
//! A recipe finder. Users collect ingredients (typed, or detected from a
//! photo through an image-captioning service), pick diet, time and
//! difficulty filters, and get the matching recipes from a small catalog.
//! Chosen recipes can be saved and listed again later.
//!
//! The matching and extraction logic lives in the `recipes-core` crate; this
//! crate puts it behind an HTTP API.
//!
//! ## Architecture
//!
//! - **Config**: environment-driven server configuration
//! - **Database**: SQLite store for saved recipes
//! - **External**: captioning providers and the recipe store client
//! - **Session**: per-user ingredient lists held in memory
//! - **Services**: recipe search and photo recognition
//! - **Routes**: one axum router per domain
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smart_recipes::config::ServerConfig;
//! use smart_recipes::resources::ServerResources;
//! use smart_recipes::server::RecipeServer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::from_config(config).await?;
//!     RecipeServer::new(Arc::new(resources)).run().await?;
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and environment variable names
pub mod constants;

/// Saved recipe storage
pub mod database;

/// Unified error handling
pub mod errors;

/// External API clients
pub mod external;

/// Logging configuration and structured log helpers
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;

/// Domain services
pub mod services;

/// In-memory session store
pub mod session;

pub use recipes_core;
