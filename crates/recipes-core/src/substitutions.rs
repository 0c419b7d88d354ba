// ABOUTME: Fixed ingredient substitution table consulted when no recipe matches
// ABOUTME: Produces (ingredient, suggestion) pairs in the user's ingredient order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A substitute suggested for one of the user's ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// The user's ingredient
    pub ingredient: String,
    /// Suggested alternative, e.g. `"almond milk / soy milk"`
    pub suggestion: String,
}

/// Mapping from ingredient to suggested substitute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct SubstitutionTable {
    entries: BTreeMap<String, String>,
}

impl SubstitutionTable {
    /// Build a table, lowercasing and trimming keys
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.into()))
                .collect(),
        }
    }

    /// Suggestion for one ingredient
    #[must_use]
    pub fn get(&self, ingredient: &str) -> Option<&str> {
        self.entries.get(ingredient).map(String::as_str)
    }

    /// Suggestions for every listed ingredient that has one
    ///
    /// Ingredients without an entry are skipped; output order follows input.
    pub fn suggest<'a, I>(&self, ingredients: I) -> Vec<Substitution>
    where
        I: IntoIterator<Item = &'a String>,
    {
        ingredients
            .into_iter()
            .filter_map(|ingredient| {
                self.get(ingredient).map(|suggestion| Substitution {
                    ingredient: ingredient.clone(),
                    suggestion: suggestion.to_owned(),
                })
            })
            .collect()
    }

    /// Ingredients with a known substitute
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, String>> for SubstitutionTable {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self::new(entries)
    }
}

impl From<SubstitutionTable> for BTreeMap<String, String> {
    fn from(table: SubstitutionTable) -> Self {
        table.entries
    }
}
