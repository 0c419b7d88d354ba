// ABOUTME: Domain service layer for recipe search and photo ingredient recognition
// ABOUTME: Protocol-agnostic logic shared by the HTTP routes and the command-line client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Domain service layer
//!
//! Route handlers stay thin: they parse requests, call into these services and
//! render the result.

/// Recipe search with the cosmetic delay and substitution fallback
pub mod finder;

/// Image captioning followed by ingredient extraction into a session
pub mod recognition;

pub use finder::{RecipeFinder, SearchOutcome};
pub use recognition::{caption_image, detection_message, Detection, IngredientRecognizer};
