// ABOUTME: Recipe catalog plus the substitution table and vocabulary loaded with it
// ABOUTME: Parses and validates the YAML recipe data document, with a built-in default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! # Recipe Data
//!
//! The catalog, the substitution table and the caption vocabulary are data,
//! not code. They ship as one YAML document (`data/recipes.yaml`) compiled
//! into the crate, and a deployment may supply its own document instead.
//!
//! Loading normalizes every ingredient, substitution key and vocabulary word
//! to trimmed lowercase so that matching never has to.

use crate::errors::AppError;
use crate::extract::Vocabulary;
use crate::filter::{filter_recipes, FilterSelection};
use crate::ingredients::{normalize_ingredient, UserIngredients};
use crate::models::Recipe;
use crate::substitutions::SubstitutionTable;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Recipe data compiled into the crate
pub const DEFAULT_RECIPE_DATA: &str = include_str!("../data/recipes.yaml");

/// Errors raised while loading a recipe data document
#[derive(Debug, Error)]
pub enum RecipeDataError {
    /// The document is not valid YAML for the expected shape
    #[error("recipe data is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Two recipes share a name
    #[error("duplicate recipe name: {0}")]
    DuplicateName(String),
    /// A recipe lists no usable ingredient
    #[error("recipe {0:?} has no ingredients")]
    NoIngredients(String),
    /// The vocabulary has no words
    #[error("caption vocabulary is empty")]
    EmptyVocabulary,
    /// A vocabulary entry contains whitespace and can never match a token
    #[error("vocabulary entry {0:?} is not a single word")]
    MultiWordVocabulary(String),
}

impl From<RecipeDataError> for AppError {
    fn from(error: RecipeDataError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}

#[derive(Debug, Deserialize)]
struct RecipeDataDocument {
    recipes: Vec<Recipe>,
    #[serde(default)]
    substitutions: BTreeMap<String, String>,
    vocabulary: Vec<String>,
}

/// Ordered, read-only list of recipes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, normalizing ingredients and checking names are unique
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate names or recipes without ingredients.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, RecipeDataError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(recipes.len());

        for mut recipe in recipes {
            if !seen.insert(recipe.name.clone()) {
                return Err(RecipeDataError::DuplicateName(recipe.name));
            }

            let mut ingredients: Vec<String> = Vec::with_capacity(recipe.ingredients.len());
            for ingredient in recipe.ingredients.iter().filter_map(|i| normalize_ingredient(i)) {
                if !ingredients.contains(&ingredient) {
                    ingredients.push(ingredient);
                }
            }
            if ingredients.is_empty() {
                return Err(RecipeDataError::NoIngredients(recipe.name));
            }
            recipe.ingredients = ingredients;
            normalized.push(recipe);
        }

        Ok(Self {
            recipes: normalized,
        })
    }

    /// Recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by its exact display name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Recipes matching `ingredients` and `selection`, in catalog order
    #[must_use]
    pub fn filter(&self, ingredients: &UserIngredients, selection: &FilterSelection) -> Vec<&Recipe> {
        filter_recipes(&self.recipes, ingredients, selection)
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Catalog, substitution table and caption vocabulary loaded together
#[derive(Debug, Clone)]
pub struct RecipeData {
    catalog: Catalog,
    substitutions: SubstitutionTable,
    vocabulary: Vocabulary,
}

impl RecipeData {
    /// Assemble recipe data from already-built parts
    #[must_use]
    pub const fn new(
        catalog: Catalog,
        substitutions: SubstitutionTable,
        vocabulary: Vocabulary,
    ) -> Self {
        Self {
            catalog,
            substitutions,
            vocabulary,
        }
    }

    /// Parse and validate a YAML recipe data document
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or fails validation.
    pub fn from_yaml(document: &str) -> Result<Self, RecipeDataError> {
        let parsed: RecipeDataDocument = serde_yaml::from_str(document)?;

        let catalog = Catalog::new(parsed.recipes)?;

        if let Some(word) = parsed
            .vocabulary
            .iter()
            .find(|w| w.split_whitespace().nth(1).is_some())
        {
            return Err(RecipeDataError::MultiWordVocabulary(word.clone()));
        }
        let vocabulary = Vocabulary::new(&parsed.vocabulary);
        if vocabulary.is_empty() {
            return Err(RecipeDataError::EmptyVocabulary);
        }

        let substitutions = SubstitutionTable::new(parsed.substitutions);

        tracing::debug!(
            recipes = catalog.len(),
            substitutions = substitutions.len(),
            vocabulary = vocabulary.len(),
            "Recipe data loaded"
        );

        Ok(Self::new(catalog, substitutions, vocabulary))
    }

    /// The recipe data compiled into the crate
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled document is invalid.
    pub fn builtin() -> Result<Self, RecipeDataError> {
        Self::from_yaml(DEFAULT_RECIPE_DATA)
    }

    /// The recipe catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The substitution table
    #[must_use]
    pub const fn substitutions(&self) -> &SubstitutionTable {
        &self.substitutions
    }

    /// The caption vocabulary
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Diet, Difficulty};

    const SMALL: &str = r#"
recipes:
  - name: Vegan Chili
    ingredients: [" Beans ", tomato, onion, spices, tomato]
    diet: vegan
    time: 50
    difficulty: medium
    nutrition: { calories: 420, protein: "16g" }
    steps: ["Cook onion & spices", "Add beans & tomato", "Simmer until thick"]
substitutions:
  Milk: almond milk / soy milk
vocabulary: [tomato, onion, Beans]
"#;

    #[test]
    fn test_builtin_data_is_valid() {
        let data = RecipeData::builtin().unwrap();
        assert!(data.catalog().len() >= 3);
        assert_eq!(data.vocabulary().len(), 22);
        assert_eq!(
            data.substitutions().get("milk"),
            Some("almond milk / soy milk")
        );
        assert_eq!(data.substitutions().get("beans"), None);
        assert!(data.catalog().find("Vegan Chili").is_some());
    }

    #[test]
    fn test_from_yaml_normalizes() {
        let data = RecipeData::from_yaml(SMALL).unwrap();
        let chili = data.catalog().find("Vegan Chili").unwrap();
        assert_eq!(chili.ingredients, ["beans", "tomato", "onion", "spices"]);
        assert_eq!(chili.diet, Diet::Vegan);
        assert_eq!(chili.difficulty, Difficulty::Medium);
        assert!(data.vocabulary().contains("beans"));
        assert_eq!(data.substitutions().get("milk"), Some("almond milk / soy milk"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let doc = SMALL.replace(
            "substitutions:",
            "  - name: Vegan Chili\n    ingredients: [beans]\n    diet: vegan\n    time: 5\n    difficulty: easy\n    nutrition: { calories: 1, protein: \"1g\" }\n    steps: []\nsubstitutions:",
        );
        assert!(matches!(
            RecipeData::from_yaml(&doc),
            Err(RecipeDataError::DuplicateName(name)) if name == "Vegan Chili"
        ));
    }

    #[test]
    fn test_multi_word_vocabulary_rejected() {
        let doc = SMALL.replace("vocabulary: [tomato, onion, Beans]", "vocabulary: [soy sauce]");
        assert!(matches!(
            RecipeData::from_yaml(&doc),
            Err(RecipeDataError::MultiWordVocabulary(_))
        ));
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let doc = SMALL.replace("vocabulary: [tomato, onion, Beans]", "vocabulary: []");
        assert!(matches!(
            RecipeData::from_yaml(&doc),
            Err(RecipeDataError::EmptyVocabulary)
        ));
    }

    #[test]
    fn test_unknown_diet_is_a_parse_error() {
        let doc = SMALL.replace("diet: vegan", "diet: carnivore");
        assert!(matches!(
            RecipeData::from_yaml(&doc),
            Err(RecipeDataError::Parse(_))
        ));
    }

    #[test]
    fn test_recipe_without_ingredients_rejected() {
        let doc = SMALL.replace(
            r#"[" Beans ", tomato, onion, spices, tomato]"#,
            r#"["  "]"#,
        );
        assert!(matches!(
            RecipeData::from_yaml(&doc),
            Err(RecipeDataError::NoIngredients(_))
        ));
    }
}
