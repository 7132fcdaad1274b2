// ABOUTME: recipe-cli - command-line front end for the seasonal recipe recommender
// ABOUTME: Recommends recipes, records feedback, adds recipes, shows solar terms, and moves CSV data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Recommend something for today
//! recipe-cli recommend --area "Melbourne, Australia" -r "vegan, max 30"
//!
//! # Score a recipe
//! recipe-cli feedback spiced-lentil-curry-0d31aa 5
//!
//! # Add a recipe (stamped with today's solar term)
//! recipe-cli add --name "Leek Soup" --seasons "autumn, winter" \
//!     --ingredients "leeks, potatoes" --steps "Sweat leeks; simmer"
//!
//! # Solar term for a date, in Chinese
//! recipe-cli --lang zh solar-term --date 2024-06-21
//!
//! # CSV interchange
//! recipe-cli csv export data/recipes.csv
//! recipe-cli csv import data/recipes.csv --dry-run --strict
//! recipe-cli csv template data/template.csv
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use recipe_core::AppResult;
use recipe_recommender::config::RecommenderConfig;
use recipe_recommender::logging::LoggingConfig;
use recipe_recommender::services::RecommendationService;
use recipe_recommender::storage::JsonFileStore;
use std::path::PathBuf;
use tracing::debug;

use commands::add::AddArgs;
use commands::csv::CsvCommand;
use commands::recommend::RecommendArgs;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Seasonal Recipe Recommender",
    long_about = "Recommends a recipe for a date, area, and dietary requirements, and maps dates to the 24 solar terms."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding recipes.json and ratings.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Display language: en or zh
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend a recipe
    Recommend(RecommendArgs),

    /// Record a 1-5 score for a recipe
    Feedback {
        /// Recipe ID
        recipe_id: String,

        /// Score from 1 to 5
        score: u8,
    },

    /// Add a recipe to the catalog
    Add(AddArgs),

    /// Show the solar term and seasonal guidance for a date
    SolarTerm {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// CSV import, export, and templates
    Csv {
        #[command(subcommand)]
        action: CsvCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let config = RecommenderConfig::from_env().with_overrides(cli.data_dir, cli.lang.as_deref());
    let language = config.language;
    debug!(data_dir = %config.data_dir.display(), language = language.code(), "Starting recipe-cli");

    let store = JsonFileStore::new(config.data_dir());
    let mut service = RecommendationService::load(store).await?;

    match cli.command {
        Command::Recommend(args) => commands::recommend::run(&service, args, language).await?,
        Command::Feedback { recipe_id, score } => {
            commands::feedback::run(&service, &recipe_id, score, language).await?;
        }
        Command::Add(args) => commands::add::run(&mut service, args, language).await?,
        Command::SolarTerm { date } => {
            commands::solar::run(&service, date.as_deref(), language).await?;
        }
        Command::Csv { action } => commands::csv::run(&mut service, action, language).await?,
    }

    Ok(())
}
