// ABOUTME: JSON file backend for the recipe catalog and rating statistics
// ABOUTME: Writes pretty-printed JSON with sorted keys and seeds the default catalog on first use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{default_recipes, RatingsStore, RecipeStore};
use async_trait::async_trait;
use recipe_core::constants::storage::{RATINGS_FILE, RECIPES_FILE};
use recipe_core::models::{RatingsTable, Recipe};
use recipe_core::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Store keeping `recipes.json` and `ratings.json` side by side
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    recipes_path: PathBuf,
    ratings_path: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at a data directory
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            recipes_path: dir.join(RECIPES_FILE),
            ratings_path: dir.join(RATINGS_FILE),
        }
    }

    /// Store with explicit file locations
    pub fn with_paths(recipes_path: impl Into<PathBuf>, ratings_path: impl Into<PathBuf>) -> Self {
        Self {
            recipes_path: recipes_path.into(),
            ratings_path: ratings_path.into(),
        }
    }

    /// Location of the recipe catalog
    #[must_use]
    pub fn recipes_path(&self) -> &Path {
        &self.recipes_path
    }

    /// Location of the ratings table
    #[must_use]
    pub fn ratings_path(&self) -> &Path {
        &self.ratings_path
    }
}

#[async_trait]
impl RecipeStore for JsonFileStore {
    async fn load_recipes(&self) -> AppResult<Vec<Recipe>> {
        if let Some(recipes) = read_json::<Vec<Recipe>>(&self.recipes_path).await? {
            info!(
                path = %self.recipes_path.display(),
                count = recipes.len(),
                "Loaded recipe catalog"
            );
            return Ok(recipes);
        }
        let recipes = default_recipes();
        info!(
            path = %self.recipes_path.display(),
            count = recipes.len(),
            "Recipe catalog not found, using default catalog"
        );
        Ok(recipes)
    }

    async fn save_recipes(&self, recipes: &[Recipe]) -> AppResult<()> {
        write_json(&self.recipes_path, recipes).await?;
        info!(
            path = %self.recipes_path.display(),
            count = recipes.len(),
            "Saved recipe catalog"
        );
        Ok(())
    }
}

#[async_trait]
impl RatingsStore for JsonFileStore {
    async fn load_ratings(&self) -> AppResult<RatingsTable> {
        let ratings = read_json::<RatingsTable>(&self.ratings_path)
            .await?
            .unwrap_or_default();
        debug!(
            path = %self.ratings_path.display(),
            entries = ratings.len(),
            "Loaded ratings"
        );
        Ok(ratings)
    }

    async fn save_ratings(&self, ratings: &RatingsTable) -> AppResult<()> {
        write_json(&self.ratings_path, ratings).await?;
        debug!(
            path = %self.ratings_path.display(),
            entries = ratings.len(),
            "Saved ratings"
        );
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(
                AppError::storage(format!("Failed to read {}", path.display())).with_source(e),
            )
        }
    };
    serde_json::from_str(&text).map(Some).map_err(|e| {
        AppError::serialization(format!("Failed to parse {}", path.display())).with_source(e)
    })
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            AppError::storage(format!("Failed to create {}", parent.display())).with_source(e)
        })?;
    }
    // Round-trip through Value so object keys come out sorted
    let sorted = serde_json::to_value(value)?;
    let mut text = serde_json::to_string_pretty(&sorted)?;
    text.push('\n');
    fs::write(path, text)
        .await
        .map_err(|e| AppError::storage(format!("Failed to write {}", path.display())).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::ErrorCode;

    #[tokio::test]
    async fn test_missing_files_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.load_recipes().await.unwrap().len(), 8);
        assert!(store.load_ratings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("data"));
        let mut ratings = RatingsTable::new();
        ratings.record_view("soup");
        store.save_ratings(&ratings).await.unwrap();
        assert_eq!(store.load_ratings().await.unwrap(), ratings);
    }

    #[tokio::test]
    async fn test_recipe_keys_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store
            .save_recipes(&[Recipe::new("a", "A").with_time_minutes(5)])
            .await
            .unwrap();
        let text = std::fs::read_to_string(store.recipes_path()).unwrap();
        let id_at = text.find("\"id\"").unwrap();
        let name_at = text.find("\"name\"").unwrap();
        let time_at = text.find("\"time_minutes\"").unwrap();
        assert!(id_at < name_at && name_at < time_at);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.ratings_path(), "{not json").unwrap();
        let err = store.load_ratings().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }
}
