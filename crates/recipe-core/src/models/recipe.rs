// ABOUTME: Recipe data model with bilingual text, season and area tags, and dietary tags
// ABOUTME: The identifier is fixed at construction; list fields keep insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::season::{Language, Season};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recipe in the catalog
///
/// List fields are insertion-ordered and may contain duplicates; all matching
/// against them is set-based. The identifier has no public setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    id: String,
    /// Display name
    pub name: String,
    /// Chinese display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_zh: Option<String>,
    /// Lower-case country or area tags (e.g. "united states", "europe")
    #[serde(default)]
    pub country_tags: Vec<String>,
    /// Seasons in which the recipe is a good fit
    #[serde(default)]
    pub seasons: Vec<Season>,
    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Ordered Chinese ingredient list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients_zh: Vec<String>,
    /// Ordered preparation steps
    #[serde(default)]
    pub steps: Vec<String>,
    /// Ordered Chinese preparation steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps_zh: Vec<String>,
    /// Total preparation time, when known
    #[serde(default)]
    pub time_minutes: Option<u32>,
    /// Canonical dietary tags (e.g. "vegan", "gluten-free")
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    /// Date the recipe was entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Solar term label (Chinese term name) associated with the recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_term: Option<String>,
}

impl Recipe {
    /// Create a recipe with the given identifier and name and no tags
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_zh: None,
            country_tags: Vec::new(),
            seasons: Vec::new(),
            ingredients: Vec::new(),
            ingredients_zh: Vec::new(),
            steps: Vec::new(),
            steps_zh: Vec::new(),
            time_minutes: None,
            dietary_tags: Vec::new(),
            date: None,
            solar_term: None,
        }
    }

    /// Stable identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set the seasons
    #[must_use]
    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.seasons = seasons.into_iter().collect();
        self
    }

    /// Set the country or area tags (stored lower-cased)
    #[must_use]
    pub fn with_country_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.country_tags = tags
            .into_iter()
            .map(|tag| tag.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Set the dietary tags (stored lower-cased)
    #[must_use]
    pub fn with_dietary_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.dietary_tags = tags
            .into_iter()
            .map(|tag| tag.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Set the ingredient list
    #[must_use]
    pub fn with_ingredients<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.ingredients = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the step list
    #[must_use]
    pub fn with_steps<S: Into<String>>(mut self, steps: impl IntoIterator<Item = S>) -> Self {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Set the preparation time in minutes
    #[must_use]
    pub const fn with_time_minutes(mut self, minutes: u32) -> Self {
        self.time_minutes = Some(minutes);
        self
    }

    /// Whether the recipe is tagged for the given season
    #[must_use]
    pub fn has_season(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }

    /// Whether any area tag occurs inside the (already lower-cased) area text
    #[must_use]
    pub fn matches_area(&self, area_lower: &str) -> bool {
        self.country_tags
            .iter()
            .any(|tag| area_lower.contains(tag.as_str()))
    }

    /// Whether the recipe carries the canonical dietary tag (case-insensitive)
    #[must_use]
    pub fn has_dietary_tag(&self, tag: &str) -> bool {
        self.dietary_tags
            .iter()
            .any(|own| own.eq_ignore_ascii_case(tag))
    }

    /// Name in the requested language, falling back to the English name
    #[must_use]
    pub fn display_name(&self, language: Language) -> &str {
        match (language, self.name_zh.as_deref()) {
            (Language::Chinese, Some(name_zh)) if !name_zh.is_empty() => name_zh,
            _ => &self.name,
        }
    }

    /// Ingredients in the requested language, falling back to English
    #[must_use]
    pub fn display_ingredients(&self, language: Language) -> &[String] {
        if language == Language::Chinese && !self.ingredients_zh.is_empty() {
            &self.ingredients_zh
        } else {
            &self.ingredients
        }
    }

    /// Steps in the requested language, falling back to English
    #[must_use]
    pub fn display_steps(&self, language: Language) -> &[String] {
        if language == Language::Chinese && !self.steps_zh.is_empty() {
            &self.steps_zh
        } else {
            &self.steps
        }
    }
}
