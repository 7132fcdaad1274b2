// ABOUTME: Ranking configuration for the exploration-weighted recipe scorer
// ABOUTME: Neutral prior for unrated recipes and a multiplier on the exploration bonus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Score assumed for a recipe that has never received feedback
pub const DEFAULT_NEUTRAL_PRIOR: f64 = 3.0;

/// Multiplier on the exploration bonus; 1.0 reproduces the plain UCB score
pub const DEFAULT_EXPLORATION_WEIGHT: f64 = 1.0;

/// Ranking Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Average used for recipes with no feedback yet
    pub neutral_prior: f64,
    /// Weight applied to the exploration bonus
    pub exploration_weight: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            neutral_prior: DEFAULT_NEUTRAL_PRIOR,
            exploration_weight: DEFAULT_EXPLORATION_WEIGHT,
        }
    }
}
