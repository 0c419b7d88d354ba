// ABOUTME: Offline recipe search and catalog listing for recipe-cli
// ABOUTME: Runs the same filter and substitution logic as the server, without the delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use crate::helpers::display;
use smart_recipes::recipes_core::{FilterSelection, RecipeData, UserIngredients};
use smart_recipes::services::{RecipeFinder, SearchOutcome};
use std::time::Duration;

/// Search the catalog and print matches or substitution suggestions
pub fn run(
    data: &RecipeData,
    ingredients: &[String],
    diet: &str,
    time: &str,
    difficulty: &str,
    detailed: bool,
) {
    let selection = FilterSelection::parse(diet, time, difficulty);
    let ingredients: UserIngredients = ingredients.iter().collect();

    println!("Ingredients: {}", display::ingredient_list(&ingredients));
    println!("Filters: {selection}");
    if selection.excludes_everything() {
        println!("A filter value was not recognized, so no recipe can match.");
    }
    println!();

    match RecipeFinder::new(data, Duration::ZERO).search_now(&ingredients, &selection) {
        SearchOutcome::Matches(recipes) => {
            println!("Found {} recipe(s):", recipes.len());
            for recipe in &recipes {
                display::recipe(recipe, detailed);
            }
        }
        outcome @ SearchOutcome::NoMatches { .. } => {
            if let Some(message) = outcome.message() {
                println!("{message}");
            }
            display::suggestions(outcome.suggestions());
        }
    }
}

/// Print every catalog recipe
pub fn catalog(data: &RecipeData) {
    println!("{} recipe(s) in the catalog:", data.catalog().len());
    for recipe in data.catalog().recipes() {
        display::recipe(recipe, false);
    }
}
