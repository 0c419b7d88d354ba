// ABOUTME: Recipe search over the catalog for a user's ingredients and filters
// ABOUTME: Applies the configured delay, then returns matches or substitution suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use crate::constants::messages;
use crate::logging::AppLogger;
use recipes_core::{FilterSelection, Recipe, RecipeData, Substitution, UserIngredients};
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Result of one recipe search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one recipe matched, in catalog order
    Matches(Vec<Recipe>),
    /// Nothing matched; substitutes for the user's ingredients that have one
    NoMatches {
        /// Suggestions in the user's ingredient order
        suggestions: Vec<Substitution>,
    },
}

impl SearchOutcome {
    /// Matching recipes, empty on the no-match branch
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            Self::Matches(recipes) => recipes,
            Self::NoMatches { .. } => &[],
        }
    }

    /// Substitution suggestions, empty when recipes matched
    #[must_use]
    pub fn suggestions(&self) -> &[Substitution] {
        match self {
            Self::Matches(_) => &[],
            Self::NoMatches { suggestions } => suggestions,
        }
    }

    /// Notice shown to the user, only on the no-match branch
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Matches(_) => None,
            Self::NoMatches { .. } => Some(messages::NO_RECIPES_FOUND),
        }
    }
}

/// Searches a recipe catalog
pub struct RecipeFinder<'a> {
    data: &'a RecipeData,
    delay: Duration,
}

impl<'a> RecipeFinder<'a> {
    /// Create a finder over `data` that waits `delay` before each search
    #[must_use]
    pub const fn new(data: &'a RecipeData, delay: Duration) -> Self {
        Self { data, delay }
    }

    /// Filter immediately, without the delay
    #[must_use]
    pub fn search_now(
        &self,
        ingredients: &UserIngredients,
        selection: &FilterSelection,
    ) -> SearchOutcome {
        let matches: Vec<Recipe> = self
            .data
            .catalog()
            .filter(ingredients, selection)
            .into_iter()
            .cloned()
            .collect();

        if matches.is_empty() {
            SearchOutcome::NoMatches {
                suggestions: self.data.substitutions().suggest(ingredients),
            }
        } else {
            SearchOutcome::Matches(matches)
        }
    }

    /// Wait for the configured delay, then filter
    pub async fn search(
        &self,
        session_id: &str,
        ingredients: &UserIngredients,
        selection: &FilterSelection,
    ) -> SearchOutcome {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let started = Instant::now();
        let outcome = self.search_now(ingredients, selection);
        AppLogger::log_recipe_search(
            session_id,
            ingredients.len(),
            &selection.to_string(),
            outcome.recipes().len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        outcome
    }
}
