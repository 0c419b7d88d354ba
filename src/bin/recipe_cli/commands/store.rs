// ABOUTME: Saved recipe store commands for recipe-cli
// ABOUTME: Saves catalog recipes to a server and lists what has been saved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use crate::helpers::display;
use smart_recipes::errors::{AppError, AppResult};
use smart_recipes::external::RecipeStoreClient;
use smart_recipes::recipes_core::RecipeData;
use tracing::info;

/// Save the catalog recipe called `name`
pub async fn save(data: &RecipeData, server_url: &str, name: &str) -> AppResult<()> {
    let recipe = data
        .catalog()
        .find(name)
        .ok_or_else(|| AppError::not_found(format!("Recipe '{name}'")))?;

    info!("Saving {} to {server_url}", recipe.name);
    let response = RecipeStoreClient::new(server_url).save(recipe).await?;
    println!("{}", response.message);
    Ok(())
}

/// Print every saved recipe
pub async fn list(server_url: &str) -> AppResult<()> {
    let saved = RecipeStoreClient::new(server_url).list().await?;
    if saved.is_empty() {
        println!("No saved recipes yet.");
        return Ok(());
    }

    println!("{} saved recipe(s):", saved.len());
    for recipe in &saved {
        display::saved_recipe(recipe);
    }
    Ok(())
}
