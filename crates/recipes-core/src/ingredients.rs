// ABOUTME: Ordered, deduplicated list of ingredients collected by one user session
// ABOUTME: Normalizes entries to trimmed lowercase and preserves insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use serde::{Deserialize, Serialize};
use std::slice::Iter;

/// Normalize a raw ingredient entry for matching
///
/// Returns `None` when nothing is left after trimming.
#[must_use]
pub fn normalize_ingredient(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Ingredients a user has typed or had detected from a photo
///
/// Entries are lowercase, unique, and kept in the order they were added.
/// Deserialized lists go through the same normalization as [`Self::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct UserIngredients {
    items: Vec<String>,
}

impl UserIngredients {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a raw entry
    ///
    /// The entry is trimmed and lowercased. Blank or already-present entries
    /// are ignored. Returns `true` when the entry was appended.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(ingredient) = normalize_ingredient(raw) else {
            return false;
        };
        if self.contains(&ingredient) {
            return false;
        }
        self.items.push(ingredient);
        true
    }

    /// Remove the entry at `index`, ignoring out-of-range indices
    ///
    /// Returns the removed entry when there was one.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Add every entry with [`add`](Self::add) semantics
    ///
    /// Returns the entries that were newly appended, in order.
    pub fn merge<I, S>(&mut self, entries: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = Vec::new();
        for entry in entries {
            if self.add(entry.as_ref()) {
                if let Some(last) = self.items.last() {
                    added.push(last.clone());
                }
            }
        }
        added
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether `ingredient` (already normalized) is present
    #[must_use]
    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.iter().any(|i| i == ingredient)
    }

    /// Entries in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> Iter<'_, String> {
        self.items.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no ingredient has been collected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a UserIngredients {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for UserIngredients {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut ingredients = Self::new();
        ingredients.merge(iter);
        ingredients
    }
}

impl From<Vec<String>> for UserIngredients {
    fn from(entries: Vec<String>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<UserIngredients> for Vec<String> {
    fn from(ingredients: UserIngredients) -> Self {
        ingredients.items
    }
}
