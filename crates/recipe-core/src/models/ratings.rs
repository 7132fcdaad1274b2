// ABOUTME: Rating statistics per recipe and the ratings table keyed by recipe identifier
// ABOUTME: Entries are created lazily and only mutated by recording views or feedback scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::feedback::{MAX_SCORE, MIN_SCORE};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{BTreeMap, Iter};

/// Running view and feedback counters for one recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    #[serde(default)]
    views: u64,
    #[serde(default)]
    total_score: f64,
    #[serde(default)]
    count: u64,
}

impl RatingStats {
    /// Rebuild statistics from persisted counters
    #[must_use]
    pub const fn from_parts(views: u64, total_score: f64, count: u64) -> Self {
        Self {
            views,
            total_score,
            count,
        }
    }

    /// Number of times the recipe was shown
    #[must_use]
    pub const fn views(&self) -> u64 {
        self.views
    }

    /// Sum of all feedback scores
    #[must_use]
    pub const fn total_score(&self) -> f64 {
        self.total_score
    }

    /// Number of feedback scores received
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Mean feedback score, undefined until the first feedback arrives
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total_score / self.count as f64)
    }

    fn record_view(&mut self) {
        self.views += 1;
    }

    fn record_score(&mut self, score: u8) {
        self.total_score += f64::from(score);
        self.count += 1;
    }
}

/// Rating statistics keyed by recipe identifier
///
/// Serialized as a plain JSON object with sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingsTable {
    entries: BTreeMap<String, RatingStats>,
}

impl RatingsTable {
    /// Create an empty table
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Statistics for a recipe, if any were recorded
    #[must_use]
    pub fn get(&self, recipe_id: &str) -> Option<&RatingStats> {
        self.entries.get(recipe_id)
    }

    /// Get-or-insert-default: the zero-initialized entry is created on first access
    pub fn entry_mut(&mut self, recipe_id: &str) -> &mut RatingStats {
        self.entries.entry(recipe_id.to_owned()).or_default()
    }

    /// Replace the statistics for a recipe (used when loading persisted data)
    pub fn insert(&mut self, recipe_id: impl Into<String>, stats: RatingStats) {
        self.entries.insert(recipe_id.into(), stats);
    }

    /// Record that a recipe was shown to the user
    pub fn record_view(&mut self, recipe_id: &str) {
        self.entry_mut(recipe_id).record_view();
    }

    /// Record a feedback score in `[1, 5]`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the score is outside `[1, 5]`; the table is left untouched.
    pub fn record_feedback(&mut self, recipe_id: &str, score: u8) -> AppResult<()> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(AppError::out_of_range(format!(
                "Score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
            )));
        }
        self.entry_mut(recipe_id).record_score(score);
        Ok(())
    }

    /// Sum of views across every recipe in the table
    ///
    /// Recomputed on each call; ranking relies on this being a global figure.
    #[must_use]
    pub fn total_views(&self) -> u64 {
        self.entries.values().map(RatingStats::views).sum()
    }

    /// Number of recipes with recorded statistics
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no statistics were recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in identifier order
    pub fn iter(&self) -> Iter<'_, String, RatingStats> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RatingsTable {
    type Item = (&'a String, &'a RatingStats);
    type IntoIter = Iter<'a, String, RatingStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
