// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Groups environment-driven server settings and database location parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Configuration module for the Smart Recipes server
//!
//! - **Environment**: server configuration from environment variables
//! - **Database**: saved recipe store location and pool size

/// Database location and pool configuration
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{
    CaptioningConfig, CorsConfig, Environment, RecipeConfig, ServerConfig, SessionConfig,
};
