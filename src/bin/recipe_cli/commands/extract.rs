// ABOUTME: Caption ingredient extraction for recipe-cli
// ABOUTME: Shows which vocabulary words a caption contains, as the recognizer would merge them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use smart_recipes::recipes_core::{extract_ingredients, RecipeData};
use smart_recipes::services::detection_message;

/// Print the ingredients found in `caption`
pub fn run(data: &RecipeData, caption: &str) {
    let detected = extract_ingredients(caption, data.vocabulary());
    println!("{}", detection_message(&detected));
}
