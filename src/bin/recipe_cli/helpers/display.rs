// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Consistent terminal rendering of recipes, suggestions and saved entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use serde_json::Value;
use smart_recipes::recipes_core::{Recipe, Substitution, UserIngredients};

/// Comma-separated ingredients, or `(none)`
pub fn ingredient_list(ingredients: &UserIngredients) -> String {
    if ingredients.is_empty() {
        "(none)".to_owned()
    } else {
        ingredients.as_slice().join(", ")
    }
}

/// One catalog recipe, with its steps when `detailed`
pub fn recipe(recipe: &Recipe, detailed: bool) {
    println!("{}", "-".repeat(60));
    println!("{}", recipe.name);
    println!(
        "   Diet: {} | Time: {} min | Difficulty: {}",
        recipe.diet, recipe.time, recipe.difficulty
    );
    println!("   Ingredients: {}", recipe.ingredients.join(", "));
    println!(
        "   Nutrition: {} kcal, {} protein",
        recipe.nutrition.calories, recipe.nutrition.protein
    );

    if detailed {
        println!("   Steps:");
        for (n, step) in recipe.steps.iter().enumerate() {
            println!("     {}. {step}", n + 1);
        }
    }
}

/// Substitution suggestions after an empty search
pub fn suggestions(suggestions: &[Substitution]) {
    if suggestions.is_empty() {
        return;
    }
    println!("\nTry substituting:");
    for s in suggestions {
        println!("   {} -> {}", s.ingredient, s.suggestion);
    }
}

/// One saved recipe object as returned by the server
pub fn saved_recipe(recipe: &Value) {
    let name = recipe
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("(unnamed)");
    let time = recipe
        .get("time")
        .and_then(Value::as_u64)
        .map(|t| format!(" ({t} min)"))
        .unwrap_or_default();
    println!("   {name}{time}");
}
