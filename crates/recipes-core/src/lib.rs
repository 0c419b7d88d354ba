// ABOUTME: Core types and matching logic for the Smart Recipes finder
// ABOUTME: Foundation crate with the recipe model, filter engine, caption extractor, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

#![deny(unsafe_code)]

//! # Recipes Core
//!
//! Pure, synchronous building blocks shared by the Smart Recipes server and
//! CLI. Nothing here performs I/O; the server owns storage, HTTP and timing.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the `{error}` response body
//! - **models**: `Recipe`, `Nutrition`, `Diet`, `Difficulty`
//! - **ingredients**: the per-user ingredient list with dedup-on-insert
//! - **filter**: diet, time and difficulty selections and the filter engine
//! - **substitutions**: fallback suggestions when nothing matches
//! - **extract**: caption-to-ingredient extraction over a fixed vocabulary
//! - **catalog**: YAML recipe data loading and validation

/// Unified error handling with HTTP status mapping
pub mod errors;

/// Recipe data model
pub mod models;

/// User ingredient list
pub mod ingredients;

/// Filter engine
pub mod filter;

/// Ingredient substitution table
pub mod substitutions;

/// Caption ingredient extraction
pub mod extract;

/// Recipe catalog and bundled recipe data
pub mod catalog;

pub use catalog::{Catalog, RecipeData, RecipeDataError};
pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use extract::{extract_ingredients, Vocabulary};
pub use filter::{filter_recipes, FilterSelection, RawFilterSelection, Selection};
pub use ingredients::UserIngredients;
pub use models::{Diet, Difficulty, Nutrition, Recipe};
pub use substitutions::{Substitution, SubstitutionTable};
