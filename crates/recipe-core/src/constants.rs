// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Canonical dietary tags, feedback bounds, storage file names, and env variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single list.

/// Canonical dietary and feature tags used for set-based requirement matching
pub mod tags {
    /// No gluten-containing ingredients
    pub const GLUTEN_FREE: &str = "gluten-free";
    /// No meat or fish
    pub const VEGETARIAN: &str = "vegetarian";
    /// No animal products
    pub const VEGAN: &str = "vegan";
    /// Ready in a short time
    pub const QUICK: &str = "quick";
    /// Low carbohydrate
    pub const LOW_CARB: &str = "low-carb";
    /// High protein
    pub const HIGH_PROTEIN: &str = "high-protein";
    /// No dairy products
    pub const DAIRY_FREE: &str = "dairy-free";
    /// No nuts
    pub const NUT_FREE: &str = "nut-free";
    /// Spicy
    pub const SPICY: &str = "spicy";
}

/// Feedback score bounds (inclusive)
pub mod feedback {
    /// Lowest accepted feedback score
    pub const MIN_SCORE: u8 = 1;
    /// Highest accepted feedback score
    pub const MAX_SCORE: u8 = 5;
}

/// On-disk storage layout
pub mod storage {
    /// Default data directory, relative to the working directory
    pub const DEFAULT_DATA_DIR: &str = "data";
    /// Recipe catalog file name
    pub const RECIPES_FILE: &str = "recipes.json";
    /// Rating statistics file name
    pub const RATINGS_FILE: &str = "ratings.json";
}

/// CSV interchange format
pub mod csv_schema {
    /// Separator used inside list-valued CSV cells
    pub const LIST_SEPARATOR: char = '|';
    /// Header row, in column order
    pub const HEADER: [&str; 13] = [
        "id",
        "name",
        "name_zh",
        "country_tags",
        "seasons",
        "ingredients",
        "ingredients_zh",
        "steps",
        "steps_zh",
        "time_minutes",
        "dietary_tags",
        "date",
        "solar_term",
    ];
}

/// Date handling
pub mod dates {
    /// Accepted calendar date format
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Environment variable names
pub mod env_config {
    /// Directory holding recipes.json and ratings.json
    pub const DATA_DIR: &str = "RECIPE_DATA_DIR";
    /// Display language (`en` or `zh`)
    pub const LANGUAGE: &str = "RECIPE_LANG";
    /// Neutral prior used for unrated recipes
    pub const RANKING_NEUTRAL_PRIOR: &str = "RECIPE_RANKING_NEUTRAL_PRIOR";
    /// Multiplier applied to the exploration bonus
    pub const RANKING_EXPLORATION_WEIGHT: &str = "RECIPE_RANKING_EXPLORATION_WEIGHT";
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Service name reported in startup logs
    pub const RECIPE_RECOMMENDER: &str = "recipe-recommender";
}
