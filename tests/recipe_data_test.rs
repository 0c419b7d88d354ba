// ABOUTME: Integration tests for loading replacement recipe data documents from disk
// ABOUTME: Valid custom catalogs, validation failures and server startup with a custom file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smart_recipes::config::{DatabaseConfig, ServerConfig};
use smart_recipes::recipes_core::{FilterSelection, UserIngredients};
use smart_recipes::resources::{load_recipe_data, ServerResources};
use std::io::Write;
use tempfile::NamedTempFile;

const CUSTOM_DATA: &str = r"
recipes:
  - name: Vegan Chili
    ingredients: [Beans, tomato, onion, spices]
    diet: vegan
    time: 50
    difficulty: medium
    nutrition: { calories: 380, protein: 15g }
    steps: [Saute onions, Add beans & tomato, Simmer 40 min]
substitutions:
  Milk: almond milk / soy milk
vocabulary: [beans, tomato, Onion]
";

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_load_custom_document() {
    let file = write_temp(CUSTOM_DATA);

    let data = load_recipe_data(file.path()).await.unwrap();

    assert_eq!(data.catalog().len(), 1);
    assert!(data.vocabulary().contains("onion"));
    assert_eq!(data.substitutions().get("milk"), Some("almond milk / soy milk"));

    let ingredients: UserIngredients = ["beans"].into_iter().collect();
    let selection = FilterSelection::parse("vegan", "30", "any");
    assert!(data.catalog().filter(&ingredients, &selection).is_empty());
    assert_eq!(
        data.catalog()
            .filter(&ingredients, &FilterSelection::any())
            .len(),
        1
    );
}

#[tokio::test]
async fn test_invalid_documents_are_config_errors() {
    let duplicate = CUSTOM_DATA.replace(
        "substitutions:",
        "  - name: Vegan Chili\n    ingredients: [beans]\n    diet: vegan\n    time: 5\n    difficulty: easy\n    nutrition: { calories: 1, protein: 1g }\n    steps: []\nsubstitutions:",
    );

    for contents in [
        "recipes: [",
        "recipes: []\nvocabulary: []\n",
        "recipes: []\nvocabulary: [soy sauce]\n",
        duplicate.as_str(),
    ] {
        let file = write_temp(contents);
        let err = load_recipe_data(file.path()).await.unwrap_err();
        assert_eq!(err.http_status(), 500, "{contents}");
    }
}

#[tokio::test]
async fn test_resources_use_configured_data_path() {
    let file = write_temp(CUSTOM_DATA);
    let mut config = ServerConfig {
        database: DatabaseConfig::in_memory(),
        ..ServerConfig::default()
    };
    config.recipes.data_path = Some(file.path().to_path_buf());

    let resources = ServerResources::from_config(config).await.unwrap();

    assert_eq!(resources.data.catalog().len(), 1);
    assert!(resources.data.catalog().find("Vegan Chili").is_some());
}
