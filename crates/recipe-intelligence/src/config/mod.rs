// ABOUTME: Configuration module for recipe-intelligence crate
// ABOUTME: Process-wide intelligence configuration loaded from defaults and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Values can be overridden via environment variables with the `RECIPE_RANKING_` prefix.

/// Configuration error types
pub mod error;

/// Ranking weights and priors
pub mod ranking;

pub use error::ConfigError;
pub use ranking::RankingConfig;

use recipe_core::constants::env_config;
use recipe_core::constants::feedback::{MAX_SCORE, MIN_SCORE};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Ranking engine settings
    pub ranking: RankingConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prior = self.ranking.neutral_prior;
        if !prior.is_finite() || prior < f64::from(MIN_SCORE) || prior > f64::from(MAX_SCORE) {
            return Err(ConfigError::InvalidRange(
                "ranking neutral_prior must be between 1 and 5",
            ));
        }

        let weight = self.ranking.exploration_weight;
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "ranking exploration_weight must be >= 0",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::RANKING_NEUTRAL_PRIOR,
            &mut self.ranking.neutral_prior,
        )?;
        Self::apply_env_var(
            env_config::RANKING_EXPLORATION_WEIGHT,
            &mut self.ranking.exploration_weight,
        )?;
        Ok(self)
    }
}
