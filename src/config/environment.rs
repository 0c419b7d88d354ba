// ABOUTME: Environment configuration management for the Smart Recipes server
// ABOUTME: Reads listen address, database, captioning, recipe data and CORS settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Environment-based configuration
//!
//! All settings come from environment variables; there is no config file.
//! Unset variables fall back to the defaults in [`crate::constants::defaults`].

use super::database::DatabaseConfig;
use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Image captioning service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptioningConfig {
    /// Model endpoint receiving raw image bytes
    pub api_url: String,
    /// Bearer token; the mock captioner is used when absent
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout; no timeout when unset
    pub timeout_secs: Option<u64>,
}

impl Default for CaptioningConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::HF_API_URL.to_owned(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

/// Recipe data and search behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// Replacement recipe data document; the bundled data is used when unset
    pub data_path: Option<PathBuf>,
    /// Cosmetic delay applied before each search
    pub generation_delay_ms: u64,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            generation_delay_ms: defaults::RECIPE_GENERATION_DELAY_MS,
        }
    }
}

impl RecipeConfig {
    /// Delay applied before each search
    #[must_use]
    pub const fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }
}

/// Session lifetime settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle seconds before a session is evicted; 0 keeps sessions forever
    pub idle_ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: defaults::SESSION_IDLE_TTL_SECS,
        }
    }
}

impl SessionConfig {
    /// Idle lifetime, or `None` when eviction is off
    #[must_use]
    pub const fn idle_ttl(&self) -> Option<Duration> {
        match self.idle_ttl_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Listen address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Saved recipe store
    pub database: DatabaseConfig,
    /// Image captioning service
    pub captioning: CaptioningConfig,
    /// Recipe data and search behavior
    pub recipes: RecipeConfig,
    /// Session lifetime
    pub sessions: SessionConfig,
    /// Cross-origin settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        Ok(Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            http_port: parse_env_or(env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            database: DatabaseConfig::from_env()?,
            captioning: CaptioningConfig {
                api_url: env_var_or(env_vars::HF_API_URL, defaults::HF_API_URL),
                api_key: non_empty_env(env_vars::HF_API_KEY),
                timeout_secs: parse_optional_env(env_vars::CAPTION_TIMEOUT_SECS)?,
            },
            recipes: RecipeConfig {
                data_path: non_empty_env(env_vars::RECIPE_DATA_PATH).map(PathBuf::from),
                generation_delay_ms: parse_env_or(
                    env_vars::RECIPE_GENERATION_DELAY_MS,
                    defaults::RECIPE_GENERATION_DELAY_MS,
                )?,
            },
            sessions: SessionConfig {
                idle_ttl_secs: parse_env_or(
                    env_vars::SESSION_IDLE_TTL_SECS,
                    defaults::SESSION_IDLE_TTL_SECS,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_vars::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
        })
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a one-line-per-setting summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Smart Recipes Server Configuration:\n\
             - Listen: {}\n\
             - Environment: {}\n\
             - Database: {} (max connections: {})\n\
             - Captioning: {}\n\
             - Recipe Data: {}\n\
             - Generation Delay: {} ms\n\
             - Session Idle TTL: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            self.database.url,
            self.database.effective_max_connections(),
            if self.captioning.api_key.is_some() {
                self.captioning.api_url.as_str()
            } else {
                "mock (HF_API_KEY not set)"
            },
            self.recipes
                .data_path
                .as_ref()
                .map_or_else(|| "bundled".to_owned(), |p| p.display().to_string()),
            self.recipes.generation_delay_ms,
            self.sessions
                .idle_ttl()
                .map_or_else(|| "never".to_owned(), |ttl| format!("{} s", ttl.as_secs())),
            self.cors.allowed_origins,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get a set, non-blank environment variable
fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_optional_env(key).map(|value| value.unwrap_or(default))
}

fn parse_optional_env<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    non_empty_env(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| AppError::config_invalid(format!("Invalid {key} value {raw:?}: {e}")))
        })
        .transpose()
}
