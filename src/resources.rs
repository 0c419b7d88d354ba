// ABOUTME: Centralized resource container shared by every HTTP handler
// ABOUTME: Holds configuration, recipe data, the saved recipe store, captioner and sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! # Server Resources
//!
//! Built once at startup and handed to every router as
//! `Arc<ServerResources>`. Everything here is immutable except the session
//! store, which locks per entry.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::external::{
    CaptionProvider, HuggingFaceCaptioner, HuggingFaceCaptionerConfig, MockCaptioner,
};
use crate::services::{IngredientRecognizer, RecipeFinder};
use crate::session::SessionStore;
use recipes_core::RecipeData;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::fs;
use tracing::{info, warn};

/// Shared server state
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Catalog, substitution table and vocabulary
    pub data: RecipeData,
    /// Saved recipe store
    pub database: Database,
    /// Image captioning provider
    pub captioner: Arc<dyn CaptionProvider>,
    /// Open recipe-finding sessions
    pub sessions: SessionStore,
}

impl ServerResources {
    /// Assemble resources from already-built parts
    #[must_use]
    pub fn new(
        config: Arc<ServerConfig>,
        data: RecipeData,
        database: Database,
        captioner: Arc<dyn CaptionProvider>,
    ) -> Self {
        let sessions = SessionStore::with_idle_ttl(config.sessions.idle_ttl());
        Self {
            config,
            data,
            database,
            captioner,
            sessions,
        }
    }

    /// Build every resource described by `config`
    ///
    /// Loads the recipe data document, connects and migrates the database,
    /// and picks the Hugging Face captioner when an API key is configured or
    /// the mock captioner otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe data cannot be read or is invalid, the
    /// database cannot be opened, or the HTTP client cannot be built
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let data = match &config.recipes.data_path {
            Some(path) => load_recipe_data(path).await?,
            None => RecipeData::builtin()?,
        };
        info!(
            recipes = data.catalog().len(),
            substitutions = data.substitutions().len(),
            vocabulary = data.vocabulary().len(),
            "Recipe data loaded"
        );

        let database = Database::connect(&config.database).await?;
        let captioner = build_captioner(&config)?;
        info!(provider = captioner.name(), "Captioning provider ready");

        Ok(Self::new(Arc::new(config), data, database, captioner))
    }

    /// Recipe finder using the configured generation delay
    #[must_use]
    pub fn finder(&self) -> RecipeFinder<'_> {
        RecipeFinder::new(&self.data, self.config.recipes.generation_delay())
    }

    /// Photo recognizer using the configured captioner and vocabulary
    #[must_use]
    pub fn recognizer(&self) -> IngredientRecognizer<'_> {
        IngredientRecognizer::new(self.captioner.as_ref(), self.data.vocabulary())
    }
}

/// Read and validate a recipe data document from disk
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read or fails validation
pub async fn load_recipe_data(path: &Path) -> AppResult<RecipeData> {
    let document = fs::read_to_string(path).await.map_err(|e| {
        AppError::config(format!(
            "Failed to read recipe data {}: {e}",
            path.display()
        ))
    })?;
    Ok(RecipeData::from_yaml(&document)?)
}

fn build_captioner(config: &ServerConfig) -> AppResult<Arc<dyn CaptionProvider>> {
    let Some(api_key) = config.captioning.api_key.clone() else {
        warn!("HF_API_KEY not set, image recognition will use the mock captioner");
        return Ok(Arc::new(MockCaptioner::default()));
    };

    let captioner = HuggingFaceCaptioner::new(HuggingFaceCaptionerConfig {
        api_url: config.captioning.api_url.clone(),
        api_key,
        timeout: config.captioning.timeout_secs.map(Duration::from_secs),
    })?;
    Ok(Arc::new(captioner))
}
