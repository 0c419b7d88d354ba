// ABOUTME: Location and pool size of the saved recipe store
// ABOUTME: Parses DATABASE_URL into a SQLite file path or an in-memory database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const MEMORY_URL: &str = "sqlite::memory:";

/// Where saved recipes live
///
/// Accepted forms are `sqlite:<path>`, `sqlite://<path>`, `sqlite::memory:`
/// and a bare file path. Other schemes are rejected: the store is SQLite only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// A database file, created on first connect
    File(PathBuf),
    /// A private in-memory database that lives as long as the process
    Memory,
}

impl DatabaseUrl {
    /// Whether this is the in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Path of the database file, if any
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path.as_path()),
            Self::Memory => None,
        }
    }
}

impl FromStr for DatabaseUrl {
    type Err = AppError;

    fn from_str(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::config_invalid("DATABASE_URL is empty"));
        }
        if raw == MEMORY_URL {
            return Ok(Self::Memory);
        }

        match raw.strip_prefix("sqlite:") {
            Some(rest) => {
                let path = rest.strip_prefix("//").unwrap_or(rest);
                Ok(Self::File(PathBuf::from(path)))
            }
            None if raw.contains("://") => Err(AppError::config_invalid(format!(
                "Unsupported database URL (only SQLite is supported): {raw}"
            ))),
            None => Ok(Self::File(PathBuf::from(raw))),
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::File(PathBuf::from("./data/smart_recipes.db"))
    }
}

/// Renders the sqlx connection string
impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "sqlite:{}", path.display()),
            Self::Memory => f.write_str(MEMORY_URL),
        }
    }
}

/// Saved recipe store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store location
    pub url: DatabaseUrl,
    /// Pool size for a file database; the in-memory database always uses one
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: defaults::DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// In-memory store, as used by tests
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            url: DatabaseUrl::Memory,
            max_connections: 1,
        }
    }

    /// Read `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`
    ///
    /// # Errors
    ///
    /// Returns a config error for an unsupported URL or a pool size that is
    /// not a positive integer
    pub fn from_env() -> AppResult<Self> {
        let url = env::var(env_vars::DATABASE_URL)
            .unwrap_or_else(|_| defaults::DATABASE_URL.to_owned())
            .parse::<DatabaseUrl>()?;

        let max_connections = env::var(env_vars::DATABASE_MAX_CONNECTIONS)
            .ok()
            .map_or(Ok(defaults::DATABASE_MAX_CONNECTIONS), |raw| {
                raw.trim().parse::<u32>().map_err(|e| {
                    AppError::config_invalid(format!("Invalid DATABASE_MAX_CONNECTIONS value: {e}"))
                })
            })?;
        if max_connections == 0 {
            return Err(AppError::config_invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1",
            ));
        }

        Ok(Self {
            url,
            max_connections,
        })
    }

    /// Pool size actually used for this location
    #[must_use]
    pub const fn effective_max_connections(&self) -> u32 {
        match self.url {
            DatabaseUrl::Memory => 1,
            DatabaseUrl::File(_) => self.max_connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> AppResult<DatabaseUrl> {
        raw.parse()
    }

    #[test]
    fn test_sqlite_file_forms() {
        let expected = DatabaseUrl::File(PathBuf::from("./data/recipes.db"));
        assert_eq!(parse("sqlite:./data/recipes.db").unwrap(), expected);
        assert_eq!(parse("./data/recipes.db").unwrap(), expected);
        assert_eq!(
            parse("sqlite:///tmp/recipes.db").unwrap(),
            DatabaseUrl::File(PathBuf::from("/tmp/recipes.db"))
        );
    }

    #[test]
    fn test_memory() {
        let url = parse(" sqlite::memory: ").unwrap();
        assert!(url.is_memory());
        assert!(url.file_path().is_none());
        assert_eq!(url.to_string(), MEMORY_URL);
    }

    #[test]
    fn test_display_round_trips_file() {
        let url = parse("recipes.db").unwrap();
        assert_eq!(url.to_string(), "sqlite:recipes.db");
        assert_eq!(parse(&url.to_string()).unwrap(), url);
    }

    #[test]
    fn test_other_schemes_and_blank_rejected() {
        assert!(parse("postgres://localhost/recipes").is_err());
        assert!(parse("  ").is_err());
    }

    #[test]
    fn test_memory_uses_single_connection() {
        let config = DatabaseConfig {
            url: DatabaseUrl::Memory,
            max_connections: 8,
        };
        assert_eq!(config.effective_max_connections(), 1);
        assert_eq!(DatabaseConfig::default().effective_max_connections(), 5);
    }
}
