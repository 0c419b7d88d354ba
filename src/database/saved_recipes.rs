// ABOUTME: Database operations for recipes saved by users
// ABOUTME: Stores recipe JSON objects as given and lists them in insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{Row, SqlitePool};
use std::time::Instant;

const TABLE: &str = "saved_recipes";

/// A stored recipe with its row metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipeRecord {
    /// Row id, increasing with insertion order
    pub id: i64,
    /// `name` field of the payload, when it had one
    pub name: Option<String>,
    /// The recipe object exactly as submitted
    pub payload: Value,
    /// When the recipe was saved (RFC 3339)
    pub saved_at: String,
}

/// Saved recipe database operations manager
pub struct SavedRecipesManager {
    pool: SqlitePool,
}

impl SavedRecipesManager {
    /// Create a new saved recipe manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a recipe object as given; duplicates are kept
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `recipe` is not a JSON object, or a
    /// database error if the insert fails
    pub async fn save(&self, recipe: &Value) -> AppResult<i64> {
        let Some(object) = recipe.as_object() else {
            return Err(AppError::invalid_input("Recipe must be a JSON object"));
        };
        let name = object.get("name").and_then(Value::as_str);
        let payload = serde_json::to_string(recipe)
            .map_err(|e| AppError::database(format!("Failed to encode recipe: {e}")))?;

        let started = Instant::now();
        let result = sqlx::query(
            r"
            INSERT INTO saved_recipes (name, payload, saved_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(name)
        .bind(&payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await;
        AppLogger::log_database_operation("insert", TABLE, result.is_ok(), elapsed_ms(started));

        let done = result.map_err(|e| AppError::database(format!("Failed to save recipe: {e}")))?;
        Ok(done.last_insert_rowid())
    }

    /// Every saved recipe with row metadata, oldest first
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails or a stored payload is corrupt
    pub async fn list_records(&self) -> AppResult<Vec<SavedRecipeRecord>> {
        let started = Instant::now();
        let rows = sqlx::query(
            r"
            SELECT id, name, payload, saved_at
            FROM saved_recipes
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await;
        AppLogger::log_database_operation("select", TABLE, rows.is_ok(), elapsed_ms(started));

        let rows = rows.map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        rows.iter()
            .map(|row| {
                let payload: String = row
                    .try_get("payload")
                    .map_err(|e| AppError::database(format!("Failed to read payload: {e}")))?;
                Ok(SavedRecipeRecord {
                    id: row
                        .try_get("id")
                        .map_err(|e| AppError::database(format!("Failed to read id: {e}")))?,
                    name: row
                        .try_get("name")
                        .map_err(|e| AppError::database(format!("Failed to read name: {e}")))?,
                    payload: serde_json::from_str(&payload).map_err(|e| {
                        AppError::database(format!("Stored recipe payload is corrupt: {e}"))
                    })?,
                    saved_at: row
                        .try_get("saved_at")
                        .map_err(|e| AppError::database(format!("Failed to read saved_at: {e}")))?,
                })
            })
            .collect()
    }

    /// Every saved recipe object as submitted, oldest first
    ///
    /// # Errors
    ///
    /// See [`SavedRecipesManager::list_records`]
    pub async fn list(&self) -> AppResult<Vec<Value>> {
        Ok(self
            .list_records()
            .await?
            .into_iter()
            .map(|record| record.payload)
            .collect())
    }

    /// Number of saved recipes
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM saved_recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))?;
        row.try_get("total")
            .map_err(|e| AppError::database(format!("Failed to read count: {e}")))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
