// ABOUTME: Main library entry point for the seasonal recipe recommender
// ABOUTME: Wires storage, CSV interchange, configuration, and services around the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Recommender
//!
//! Picks a single recipe for a date, an optional area, and free-text dietary or
//! time constraints, and classifies dates into the 24 solar terms to surface
//! seasonal food guidance.
//!
//! ## Architecture
//!
//! - **`recipe-core`**: error type, domain models, constants
//! - **`recipe-intelligence`**: requirement parsing, season resolution, ranking, solar terms
//! - **Storage**: JSON files for the recipe catalog and rating statistics
//! - **CSV**: pipe-delimited list interchange for bulk editing
//! - **Services**: the sequences the CLI runs (recommend, feedback, add, solar term)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_recommender::config::environment::RecommenderConfig;
//! use recipe_recommender::services::RecommendationService;
//! use recipe_recommender::storage::json::JsonFileStore;
//! use recipe_core::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = RecommenderConfig::from_env();
//!     let store = JsonFileStore::new(&config.data_dir);
//!     let service = RecommendationService::load(store).await?;
//!     println!("{} recipes loaded", service.recipes().len());
//!     Ok(())
//! }
//! ```

/// Environment-driven application configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Identifier, slug, and date helpers
pub mod utils;

/// Fixed Chinese input translation tables
pub mod i18n;

/// Recipe and rating persistence
pub mod storage;

/// CSV import, export, and template generation
pub mod csv_io;

/// Recommendation, feedback, catalog, and solar term services
pub mod services;

pub use recipe_core::{AppError, AppResult, ErrorCode};
