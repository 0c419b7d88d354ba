// ABOUTME: Structured logging setup for the Smart Recipes server
// ABOUTME: Chooses the output format from the environment and provides domain event helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Structured logging
//!
//! `RUST_LOG` sets the level, `LOG_FORMAT` picks `json`, `pretty` (default)
//! or `compact`. Production adds source locations to every event. Chatty
//! dependencies are held at `warn` whatever the level.

use crate::config::Environment;
use crate::constants::{env_vars, service_names};
use anyhow::{anyhow, Result};
use std::env;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const QUIET_DEPENDENCIES: [&str; 5] = [
    "hyper=warn",
    "reqwest=warn",
    "sqlx=warn",
    "sqlx::query=warn",
    "tower_http=info",
];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human-readable lines
    #[default]
    Pretty,
    /// Single-line human-readable events
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unknown is pretty
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// How the global subscriber is built
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level directive, e.g. `info` or `smart_recipes=debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Add file and line to each event
    pub include_location: bool,
    /// Emit span open and close events
    pub include_spans: bool,
    /// Deployment environment reported at startup
    pub environment: Environment,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`, `LOG_INCLUDE_SPANS` and `ENVIRONMENT`
    #[must_use]
    pub fn from_env() -> Self {
        let environment = Environment::from_str_or_default(
            &env::var(env_vars::ENVIRONMENT).unwrap_or_default(),
        );

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()),
            format: LogFormat::from_str_or_default(&env::var("LOG_FORMAT").unwrap_or_default()),
            include_location: environment.is_production()
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            environment,
        }
    }

    /// The configured level, this crate at the same level, dependencies held down
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let crate_directive = format!("smart_recipes={}", self.level)
            .parse::<Directive>()
            .unwrap_or_else(|_| LevelFilter::INFO.into());

        QUIET_DEPENDENCIES
            .iter()
            .filter_map(|d| d.parse::<Directive>().ok())
            .fold(EnvFilter::new(&self.level), EnvFilter::add_directive)
            .add_directive(crate_directive)
    }

    fn fmt_layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_writer(io::stdout)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_span_events(span_events);

        match self.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(self.fmt_layer())
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        info!(
            service.name = service_names::SMART_RECIPES_SERVER,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured events for the recipe domain
pub struct AppLogger;

impl AppLogger {
    /// One completed recipe search
    pub fn log_recipe_search(
        session_id: &str,
        ingredient_count: usize,
        filters: &str,
        result_count: usize,
        duration_ms: u64,
    ) {
        info!(
            session.id = %session_id,
            search.ingredients = ingredient_count,
            search.filters = %filters,
            search.results = result_count,
            search.duration_ms = duration_ms,
            "Recipe search"
        );
    }

    /// What a photo caption yielded; a caption with no known word is a warning
    pub fn log_caption_detection(session_id: &str, caption: &str, detected: &[String]) {
        if detected.is_empty() {
            warn!(
                session.id = %session_id,
                caption.text = %caption,
                "Caption contained no known ingredient"
            );
        } else {
            info!(
                session.id = %session_id,
                caption.text = %caption,
                caption.detected = ?detected,
                "Ingredients detected from image"
            );
        }
    }

    /// One saved recipe store query
    pub fn log_database_operation(operation: &str, table: &str, success: bool, duration_ms: u64) {
        if success {
            debug!(
                store.operation = operation,
                store.table = table,
                store.duration_ms = duration_ms,
                "Saved recipe store query"
            );
        } else {
            warn!(
                store.operation = operation,
                store.table = table,
                store.duration_ms = duration_ms,
                "Saved recipe store query failed"
            );
        }
    }
}
