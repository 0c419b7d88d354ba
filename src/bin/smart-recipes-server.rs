// ABOUTME: Smart Recipes HTTP server binary
// ABOUTME: Loads configuration, builds shared resources and serves the recipe API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! # Smart Recipes Server Binary
//!
//! Starts the recipe API with the saved recipe store and the captioning proxy.

use anyhow::Result;
use clap::Parser;
use smart_recipes::{
    config::ServerConfig, logging, resources::ServerResources, server::RecipeServer,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "smart-recipes-server")]
#[command(about = "Smart Recipes - find recipes from the ingredients you have")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Recipe data document (YAML) replacing the bundled catalog
    #[arg(long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using configuration from the environment only");
            Args {
                http_port: None,
                data: None,
            }
        }
        Err(e) => e.exit(),
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data) = args.data {
        config.recipes.data_path = Some(data);
    }

    logging::init_from_env()?;

    info!("Starting Smart Recipes server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config).await?);
    display_available_endpoints(&resources.config);

    if let Err(e) = RecipeServer::new(resources).run().await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

/// Log every API endpoint
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Liveness:          GET    {base}/health");
    info!("   Readiness:         GET    {base}/ready");
    info!("Catalog:");
    info!("   Recipes:           GET    {base}/api/catalog");
    info!("   Substitutions:     GET    {base}/api/substitutions");
    info!("Saved Recipes:");
    info!("   List:              GET    {base}/api/recipes");
    info!("   Save:              POST   {base}/api/recipes");
    info!("Image Captioning:");
    info!("   Caption:           POST   {base}/api/recognize");
    info!("Sessions:");
    info!("   Open:              POST   {base}/api/sessions");
    info!("   Get / Close:       GET    DELETE {base}/api/sessions/{{id}}");
    info!("   Add / Clear:       POST   DELETE {base}/api/sessions/{{id}}/ingredients");
    info!("   Remove:            DELETE {base}/api/sessions/{{id}}/ingredients/{{index}}");
    info!("   Search:            GET    {base}/api/sessions/{{id}}/recipes");
    info!("   Recognize:         POST   {base}/api/sessions/{{id}}/recognize");
    info!("=== End of Endpoint List ===");
}
