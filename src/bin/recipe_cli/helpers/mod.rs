// ABOUTME: Helper modules for recipe-cli
// ABOUTME: Recipe data loading and terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

pub mod display;

use smart_recipes::errors::AppResult;
use smart_recipes::recipes_core::RecipeData;
use smart_recipes::resources::load_recipe_data;
use std::path::Path;

/// Recipe data from `path`, or the bundled data
pub async fn load_data(path: Option<&Path>) -> AppResult<RecipeData> {
    match path {
        Some(path) => load_recipe_data(path).await,
        None => Ok(RecipeData::builtin()?),
    }
}
