// ABOUTME: Persistence abstraction for the recipe catalog and rating statistics
// ABOUTME: Store traits, the JSON file backend, an in-memory backend, and shared ratings state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use recipe_core::models::{RatingsTable, Recipe};
use recipe_core::AppResult;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

/// Seeded catalog used when no recipe file exists yet
pub mod defaults;

/// JSON file backend
pub mod json;

/// In-memory backend for tests and benchmarks
pub mod memory;

pub use defaults::default_recipes;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Recipe catalog persistence
///
/// Implementations load the whole catalog at once and rewrite it on save.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Load every recipe, in stored order
    async fn load_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// Replace the stored catalog
    async fn save_recipes(&self, recipes: &[Recipe]) -> AppResult<()>;
}

/// Rating statistics persistence
#[async_trait]
pub trait RatingsStore: Send + Sync {
    /// Load the ratings table, empty when nothing was stored yet
    async fn load_ratings(&self) -> AppResult<RatingsTable>;

    /// Replace the stored ratings table
    async fn save_ratings(&self, ratings: &RatingsTable) -> AppResult<()>;
}

/// Ratings table shared between concurrent tasks
///
/// Mutations take the write lock; ranking holds the read lock for the whole
/// pass so it sees one consistent snapshot of views and scores.
#[derive(Debug, Clone, Default)]
pub struct SharedRatings {
    inner: Arc<RwLock<RatingsTable>>,
}

impl SharedRatings {
    /// Wrap a loaded table
    #[must_use]
    pub fn new(table: RatingsTable) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// Acquire a read guard over the table
    pub async fn read(&self) -> RwLockReadGuard<'_, RatingsTable> {
        self.inner.read().await
    }

    /// Record that a recipe was shown
    pub async fn record_view(&self, recipe_id: &str) {
        self.inner.write().await.record_view(recipe_id);
    }

    /// Record a feedback score
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the score is outside `[1, 5]`.
    pub async fn record_feedback(&self, recipe_id: &str, score: u8) -> AppResult<()> {
        self.inner.write().await.record_feedback(recipe_id, score)
    }

    /// Clone the current table, e.g. to persist it without holding the lock
    pub async fn snapshot(&self) -> RatingsTable {
        self.inner.read().await.clone()
    }
}
