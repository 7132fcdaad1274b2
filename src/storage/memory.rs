// ABOUTME: In-memory recipe and ratings store
// ABOUTME: Keeps saved state behind async locks so services can be exercised without touching disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RatingsStore, RecipeStore};
use async_trait::async_trait;
use recipe_core::models::{RatingsTable, Recipe};
use recipe_core::AppResult;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Volatile store; clones share the same state
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    recipes: Arc<RwLock<Vec<Recipe>>>,
    ratings: Arc<RwLock<RatingsTable>>,
}

impl MemoryStore {
    /// Store seeded with a catalog and a ratings table
    #[must_use]
    pub fn new(recipes: Vec<Recipe>, ratings: RatingsTable) -> Self {
        Self {
            recipes: Arc::new(RwLock::new(recipes)),
            ratings: Arc::new(RwLock::new(ratings)),
        }
    }

    /// Store seeded with a catalog and no ratings
    #[must_use]
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes, RatingsTable::new())
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn load_recipes(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.recipes.read().await.clone())
    }

    async fn save_recipes(&self, recipes: &[Recipe]) -> AppResult<()> {
        *self.recipes.write().await = recipes.to_vec();
        Ok(())
    }
}

#[async_trait]
impl RatingsStore for MemoryStore {
    async fn load_ratings(&self) -> AppResult<RatingsTable> {
        Ok(self.ratings.read().await.clone())
    }

    async fn save_ratings(&self, ratings: &RatingsTable) -> AppResult<()> {
        *self.ratings.write().await = ratings.clone();
        Ok(())
    }
}
