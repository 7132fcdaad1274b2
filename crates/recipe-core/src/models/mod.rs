// ABOUTME: Core data models shared across the recommender workspace
// ABOUTME: Re-exports recipe, rating statistics, and temporal context types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe model with bilingual fields and builder-style setters
pub mod recipe;

/// Per-recipe rating statistics and the ratings table
pub mod ratings;

/// Season, hemisphere, and display language enums
pub mod season;

pub use ratings::{RatingStats, RatingsTable};
pub use recipe::Recipe;
pub use season::{Hemisphere, Language, Season};
