// ABOUTME: Extracts known ingredient words from an image caption
// ABOUTME: Single-token exact matching against a closed ingredient vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Caption-to-ingredient extraction
//!
//! A caption such as `"a plate of rice with chicken and broccoli"` is
//! lowercased and split on whitespace; every token that is exactly a
//! vocabulary word is kept, first occurrence wins. Multi-word ingredients,
//! punctuation and plurals are deliberately not handled: `"tomatoes"` and
//! `"tomato,"` do not match `"tomato"`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Closed set of single-word ingredients the extractor recognizes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    words: BTreeSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary, lowercasing and trimming each word
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Whether `token` is a recognized word
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Recognized words in sorted order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of recognized words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.words.into_iter().collect()
    }
}

/// Extract vocabulary ingredients from `caption` in order of first appearance
#[must_use]
pub fn extract_ingredients(caption: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let lowered = caption.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for token in lowered.split_whitespace() {
        if vocabulary.contains(token) && !found.iter().any(|f| f == token) {
            found.push(token.to_owned());
        }
    }

    found
}
