// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds server resources over an in-memory database with a mock captioner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `smart_recipes`

use smart_recipes::{
    config::{DatabaseConfig, ServerConfig},
    database::Database,
    external::{CaptionProvider, MockCaptioner},
    recipes_core::RecipeData,
    resources::ServerResources,
    server::build_router,
};
use axum::Router;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration for tests: in-memory database, no search delay
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig {
        host: "127.0.0.1".to_owned(),
        database: DatabaseConfig::in_memory(),
        ..ServerConfig::default()
    };
    config.recipes.generation_delay_ms = 0;
    config
}

/// Resources with the bundled recipe data and the given captioner
pub async fn create_test_resources_with(
    captioner: Arc<dyn CaptionProvider>,
) -> Arc<ServerResources> {
    init_test_logging();
    let config = test_config();
    let database = Database::connect(&config.database)
        .await
        .expect("in-memory database");
    let data = RecipeData::builtin().expect("bundled recipe data");
    Arc::new(ServerResources::new(
        Arc::new(config),
        data,
        database,
        captioner,
    ))
}

/// Resources with the default mock captioner
pub async fn create_test_resources() -> Arc<ServerResources> {
    create_test_resources_with(Arc::new(MockCaptioner::default())).await
}

/// Full application router over fresh test resources
pub async fn create_test_app() -> Router {
    build_router(create_test_resources().await)
}
