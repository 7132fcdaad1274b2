// ABOUTME: Environment-based configuration for storage paths and display language
// ABOUTME: CLI flags override environment values, which override defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::{env_config, storage};
use recipe_core::models::Language;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Directory holding the recipe catalog and rating statistics
    pub data_dir: PathBuf,
    /// Display language for labels, guidance, and recipe text
    pub language: Language,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(storage::DEFAULT_DATA_DIR),
            language: Language::English,
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            data_dir: PathBuf::from(env_var_or(
                env_config::DATA_DIR,
                storage::DEFAULT_DATA_DIR,
            )),
            language: Language::from_str_or_default(&env_var_or(env_config::LANGUAGE, "en")),
        };
        info!(
            data_dir = %config.data_dir.display(),
            language = config.language.code(),
            "Loaded recommender configuration"
        );
        config
    }

    /// Apply command-line overrides on top of the loaded values
    #[must_use]
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, language: Option<&str>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(lang) = language {
            self.language = Language::from_str_or_default(lang);
        }
        self
    }

    /// Path of the recipe catalog file
    #[must_use]
    pub fn recipes_path(&self) -> PathBuf {
        self.data_dir.join(storage::RECIPES_FILE)
    }

    /// Path of the rating statistics file
    #[must_use]
    pub fn ratings_path(&self) -> PathBuf {
        self.data_dir.join(storage::RATINGS_FILE)
    }

    /// Data directory
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}
