// ABOUTME: Smart Recipes CLI: search the catalog offline and manage saved recipes on a server
// ABOUTME: Subcommands for recipe search, caption ingredient extraction, and the saved recipe store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors
//!
//! Usage:
//! ```bash
//! # Recipes using tomato or rice, vegan, ready in 30 minutes
//! recipe-cli find --ingredient tomato --ingredient rice --diet vegan --time 30
//!
//! # Known ingredients in a caption
//! recipe-cli extract "a bowl of rice with broccoli and chicken"
//!
//! # Save a catalog recipe to a running server, then list saved recipes
//! recipe-cli save "Vegan Chili" --server-url http://localhost:8081
//! recipe-cli saved
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use smart_recipes::constants::{defaults, env_vars};
use smart_recipes::errors::AppResult;
use std::io;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Smart Recipes command-line client",
    long_about = "Search the recipe catalog from the ingredients you have, extract ingredients from image captions, and save recipes to a Smart Recipes server."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe data document (YAML) replacing the bundled catalog
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Smart Recipes server base URL
    #[arg(long, global = true, env = env_vars::SMART_RECIPES_URL, default_value = defaults::SERVER_URL)]
    server_url: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Find recipes for a set of ingredients and filters
    Find {
        /// Ingredient you have (repeatable)
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,

        /// Diet tag: vegan, vegetarian, pescatarian, gluten-free or any
        #[arg(long, default_value = "any")]
        diet: String,

        /// Maximum preparation time in minutes, or any
        #[arg(long, default_value = "any")]
        time: String,

        /// Difficulty: easy, medium, hard or any
        #[arg(long, default_value = "any")]
        difficulty: String,

        /// Print the steps of each match
        #[arg(long, short = 'd')]
        detailed: bool,
    },

    /// List known ingredients found in an image caption
    Extract {
        /// Caption text
        caption: String,
    },

    /// List every recipe in the catalog
    Catalog,

    /// Save a catalog recipe to the server
    Save {
        /// Recipe name as listed in the catalog
        name: String,
    },

    /// List recipes saved on the server
    Saved,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    debug!("Smart Recipes CLI");

    match cli.command {
        Command::Find {
            ingredients,
            diet,
            time,
            difficulty,
            detailed,
        } => {
            let data = helpers::load_data(cli.data.as_deref()).await?;
            commands::find::run(&data, &ingredients, &diet, &time, &difficulty, detailed);
        }
        Command::Extract { caption } => {
            let data = helpers::load_data(cli.data.as_deref()).await?;
            commands::extract::run(&data, &caption);
        }
        Command::Catalog => {
            let data = helpers::load_data(cli.data.as_deref()).await?;
            commands::find::catalog(&data);
        }
        Command::Save { name } => {
            let data = helpers::load_data(cli.data.as_deref()).await?;
            commands::store::save(&data, &cli.server_url, &name).await?;
        }
        Command::Saved => {
            commands::store::list(&cli.server_url).await?;
        }
    }

    Ok(())
}
