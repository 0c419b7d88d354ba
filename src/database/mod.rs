// ABOUTME: SQLite connection pool setup and schema migration for the recipe store
// ABOUTME: Owns the sqlx pool shared by database managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! # Database Management
//!
//! The pool is created once at startup and handed to managers; each query
//! acquires a connection for its own duration. An in-memory database lives
//! only as long as its connection, so it gets exactly one that never idles out.

/// Saved recipe persistence
pub mod saved_recipes;

pub use saved_recipes::{SavedRecipeRecord, SavedRecipesManager};

use crate::config::database::DatabaseConfig;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, info};

/// Database handle wrapping the connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect, creating the database file and its directory when missing, then migrate
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the connection
    /// fails, or migration fails
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        if let Some(path) = config.url.file_path() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&config.url.to_string())
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let mut pool_options =
            SqlitePoolOptions::new().max_connections(config.effective_max_connections());
        if config.url.is_memory() {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        info!(
            "Database connected: {} (max connections: {})",
            config.url,
            config.effective_max_connections()
        );

        let database = Self { pool };
        database.migrate().await?;
        Ok(database)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS saved_recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                payload TEXT NOT NULL,
                saved_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create saved_recipes table: {e}")))?;

        debug!("Database migrations complete");
        Ok(())
    }

    /// Saved recipe operations
    #[must_use]
    pub fn saved_recipes(&self) -> SavedRecipesManager {
        SavedRecipesManager::new(self.pool.clone())
    }

    /// Underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check that a connection can be acquired and used
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not answer
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
