// ABOUTME: Data models for catalog recipes and their diet and difficulty tags
// ABOUTME: Defines Recipe, Nutrition, Diet and Difficulty with their wire representations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Diet tag attached to a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// Fish but no other meat
    Pescatarian,
    /// No gluten-containing grains
    GlutenFree,
    /// No dietary restriction
    #[default]
    Any,
}

impl Diet {
    /// Every diet tag, in display order
    pub const ALL: [Self; 5] = [
        Self::Vegan,
        Self::Vegetarian,
        Self::Pescatarian,
        Self::GlutenFree,
        Self::Any,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Pescatarian => "pescatarian",
            Self::GlutenFree => "gluten-free",
            Self::Any => "any",
        }
    }

    /// Parse a case-insensitive tag, `None` when unrecognized
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|d| d.as_str() == normalized)
    }
}

impl Display for Diet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preparation difficulty of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Few steps, basic technique
    #[default]
    Easy,
    /// Some technique or timing required
    Medium,
    /// Demanding technique or long preparation
    Hard,
}

impl Difficulty {
    /// Every difficulty level, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse a case-insensitive level, `None` when unrecognized
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|d| d.as_str() == normalized)
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-serving nutrition summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kcal
    pub calories: u32,
    /// Protein amount as displayed, e.g. `"35g"`
    pub protein: String,
}

/// A catalog recipe
///
/// Recipes are immutable once loaded; the catalog owns them and hands out
/// shared references or clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name, unique within the catalog
    pub name: String,
    /// Lowercase ingredient names
    pub ingredients: Vec<String>,
    /// Diet tag
    pub diet: Diet,
    /// Total preparation time in minutes
    pub time: u32,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Nutrition summary
    pub nutrition: Nutrition,
    /// Ordered preparation steps
    pub steps: Vec<String>,
}

impl Recipe {
    /// Whether `ingredient` (already lowercase) is one of this recipe's ingredients
    #[must_use]
    pub fn uses(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_round_trips_through_wire_names() {
        for diet in Diet::ALL {
            assert_eq!(Diet::parse(diet.as_str()), Some(diet));
        }
        assert_eq!(Diet::parse(" Vegan "), Some(Diet::Vegan));
        assert_eq!(Diet::parse("GLUTEN-FREE"), Some(Diet::GlutenFree));
        assert_eq!(Diet::parse("keto"), None);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("Medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("extreme"), None);
    }

    #[test]
    fn test_recipe_json_shape() {
        let recipe = Recipe {
            name: "Vegetable Stir Fry".into(),
            ingredients: vec!["broccoli".into(), "carrot".into(), "soy sauce".into()],
            diet: Diet::Vegan,
            time: 20,
            difficulty: Difficulty::Easy,
            nutrition: Nutrition {
                calories: 250,
                protein: "10g".into(),
            },
            steps: vec!["Chop vegetables".into()],
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["diet"], "vegan");
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["time"], 20);
        assert_eq!(json["nutrition"]["protein"], "10g");
        assert!(recipe.uses("carrot"));
        assert!(!recipe.uses("Carrot"));
    }
}
