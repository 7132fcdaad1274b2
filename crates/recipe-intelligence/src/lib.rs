// ABOUTME: Recommendation and solar term algorithms for the seasonal recipe recommender
// ABOUTME: Tag normalization, requirement parsing, season resolution, ranking, and solar terms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Intelligence
//!
//! Every function in this crate is a pure, synchronous computation over
//! caller-supplied data. Storage, CSV interchange, and presentation live in
//! the application crate.

/// Ranking and solar term configuration with environment overrides
pub mod config;

/// Free-text synonym resolution to canonical dietary tags
pub mod tags;

/// Comma-separated requirement parsing
pub mod requirements;

/// Area to hemisphere and date to season resolution
pub mod temporal;

/// Progressive candidate filtering and exploration-weighted ranking
pub mod ranking;

/// Julian day, apparent solar longitude, and the 24 solar terms
pub mod solar_terms;

pub use config::{ConfigError, IntelligenceConfig, RankingConfig};
pub use ranking::{recommend, FilterPass, RecommendationEngine};
pub use requirements::{parse_requirements, RequirementSet};
pub use solar_terms::{
    apparent_solar_longitude, classify_longitude, julian_day, solar_term_for_date, SolarTerm,
    TermGuidance, TermMatch,
};
pub use tags::normalize_tag;
pub use temporal::{determine_hemisphere, determine_season, season_for_month};
