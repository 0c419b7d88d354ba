// ABOUTME: Filter engine selecting catalog recipes by ingredients, diet, time and difficulty
// ABOUTME: Parses raw filter selections and applies the four boolean predicates in catalog order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! # Filter Engine
//!
//! A recipe matches when all four predicates hold:
//!
//! 1. the user has no ingredients, or at least one of them is a recipe ingredient;
//! 2. the diet filter is `any`, or equals the recipe's diet;
//! 3. the time filter is `any`, or the recipe takes at most that many minutes;
//! 4. the difficulty filter is `any`, or equals the recipe's difficulty.
//!
//! Matching is a stable filter: results keep catalog order.

use crate::ingredients::UserIngredients;
use crate::models::{Diet, Difficulty, Recipe};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Wire value meaning "do not filter on this field"
pub const ANY: &str = "any";

/// Display form of a field that matches no recipe
const NOTHING: &str = "none";

/// One filter field: unrestricted, restricted to a value, or matching nothing
///
/// `Nothing` comes from a value no recipe can satisfy, such as an unknown
/// diet or a negative time limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    /// No restriction
    #[default]
    Any,
    /// Restricted to this value
    Only(T),
    /// Rejects every recipe
    Nothing,
}

impl<T> Selection<T> {
    /// Whether this selection accepts `value` under `accepts`
    pub fn allows(&self, accepts: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => accepts(wanted),
            Self::Nothing => false,
        }
    }
}

impl<T: Display> Display for Selection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY),
            Self::Only(value) => value.fmt(f),
            Self::Nothing => f.write_str(NOTHING),
        }
    }
}

/// Raw filter values as submitted by a client
///
/// Every field is optional; a missing field means `any`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFilterSelection {
    /// Diet tag or `any`
    #[serde(default)]
    pub diet: Option<String>,
    /// Maximum minutes or `any`
    #[serde(default)]
    pub time: Option<String>,
    /// Difficulty level or `any`
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Parsed diet, time and difficulty filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    /// Diet filter
    pub diet: Selection<Diet>,
    /// Maximum preparation time in minutes
    pub time: Selection<u32>,
    /// Difficulty filter
    pub difficulty: Selection<Difficulty>,
}

impl FilterSelection {
    /// Selection that accepts every recipe
    #[must_use]
    pub const fn any() -> Self {
        Self {
            diet: Selection::Any,
            time: Selection::Any,
            difficulty: Selection::Any,
        }
    }

    /// Parse the three raw filter strings
    ///
    /// Blank values and `any` (in any case) are unrestricted. A time value is
    /// read from its leading digits, so `"30"` and `"30 min"` both mean 30,
    /// and a limit too large for `u32` admits every recipe. Parsing never
    /// fails: an unknown diet or difficulty, a negative time or a time with
    /// no digits becomes [`Selection::Nothing`] and the search finds nothing.
    #[must_use]
    pub fn parse(diet: &str, time: &str, difficulty: &str) -> Self {
        Self {
            diet: parse_field(diet, Diet::parse),
            time: parse_field(time, parse_minutes),
            difficulty: parse_field(difficulty, Difficulty::parse),
        }
    }

    /// Parse optional raw values, treating missing fields as `any`
    #[must_use]
    pub fn from_raw(raw: &RawFilterSelection) -> Self {
        Self::parse(
            raw.diet.as_deref().unwrap_or(ANY),
            raw.time.as_deref().unwrap_or(ANY),
            raw.difficulty.as_deref().unwrap_or(ANY),
        )
    }

    /// Whether some field can never be satisfied
    #[must_use]
    pub const fn excludes_everything(&self) -> bool {
        matches!(self.diet, Selection::Nothing)
            || matches!(self.time, Selection::Nothing)
            || matches!(self.difficulty, Selection::Nothing)
    }

    /// Whether `recipe` passes the diet, time and difficulty filters
    #[must_use]
    pub fn admits(&self, recipe: &Recipe) -> bool {
        self.diet.allows(|d| *d == recipe.diet)
            && self.time.allows(|max| recipe.time <= *max)
            && self.difficulty.allows(|d| *d == recipe.difficulty)
    }
}

impl Display for FilterSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "diet={} time={} difficulty={}",
            self.diet, self.time, self.difficulty
        )
    }
}

fn parse_field<T>(raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> Selection<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY) {
        return Selection::Any;
    }
    parse(trimmed).map_or(Selection::Nothing, Selection::Only)
}

/// Leading-digit minute limit; `None` when no recipe time can satisfy it
///
/// A leading `+` is accepted. `-0` is a zero limit; any other negative
/// limit matches nothing.
fn parse_minutes(raw: &str) -> Option<u32> {
    let (negative, unsigned) = raw.strip_prefix('-').map_or_else(
        || (false, raw.strip_prefix('+').unwrap_or(raw)),
        |rest| (true, rest),
    );
    let mut digits = unsigned.bytes().take_while(u8::is_ascii_digit).peekable();
    digits.peek()?;

    let minutes = digits.fold(0_u32, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(u32::from(digit - b'0'))
    });
    (!negative || minutes == 0).then_some(minutes)
}

/// Whether `recipe` uses at least one of `ingredients`
///
/// An empty ingredient list matches every recipe.
#[must_use]
pub fn matches_ingredients(recipe: &Recipe, ingredients: &UserIngredients) -> bool {
    ingredients.is_empty() || ingredients.iter().any(|i| recipe.uses(i))
}

/// Select the recipes matching `ingredients` and `selection`, in catalog order
#[must_use]
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    ingredients: &UserIngredients,
    selection: &FilterSelection,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|r| matches_ingredients(r, ingredients) && selection.admits(r))
        .collect()
}
