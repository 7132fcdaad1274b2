// ABOUTME: Recipe entry and CSV bulk operations on the loaded catalog
// ABOUTME: New recipes are stamped with their entry date and the solar term in effect on it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::recommendation::RecommendationService;
use crate::csv_io::{export_recipes_csv, import_recipes_csv, ImportOptions, ImportOutcome};
use crate::i18n::{normalize_seasons, normalize_tags};
use crate::storage::{RatingsStore, RecipeStore};
use crate::utils::{generate_recipe_id, today};
use chrono::NaiveDate;
use recipe_core::models::{Language, Recipe, Season};
use recipe_core::{AppError, AppResult};
use recipe_intelligence::solar_term_for_date;
use std::path::Path;
use tracing::info;

/// Separators accepted for comma lists, including the full-width comma
const COMMA_SEPARATORS: [char; 2] = [',', '，'];

/// Separators accepted for step lists, including the full-width semicolon
const STEP_SEPARATORS: [char; 2] = [';', '；'];

/// Raw user input for a new recipe
///
/// Area, seasons, ingredients, and tags are comma separated; steps are
/// semicolon separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    /// Display name (required)
    pub name: String,
    /// Country or area tags
    pub area: String,
    /// Season names (at least one required)
    pub seasons: String,
    /// Ingredients
    pub ingredients: String,
    /// Preparation steps
    pub steps: String,
    /// Preparation time in minutes
    pub time_minutes: Option<u32>,
    /// Dietary tags
    pub tags: String,
    /// Entry date, defaults to today
    pub date: Option<NaiveDate>,
}

/// Turn a draft into a recipe with a fresh identifier
///
/// In Chinese mode the entered name, ingredients, and steps also fill the
/// Chinese display fields, and Chinese season and tag words are translated.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank name, an unknown season word, or an
/// empty season list.
pub fn build_recipe(draft: &RecipeDraft, language: Language) -> AppResult<Recipe> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Recipe name is required"));
    }

    let seasons = split_items(&normalize_seasons(&draft.seasons, language), &COMMA_SEPARATORS)
        .iter()
        .map(|word| word.parse::<Season>())
        .collect::<AppResult<Vec<_>>>()?;
    if seasons.is_empty() {
        return Err(AppError::invalid_input("At least one season is required"));
    }

    let date = draft.date.unwrap_or_else(today);
    let term = solar_term_for_date(date).term;

    let mut recipe = Recipe::new(generate_recipe_id(name), name)
        .with_seasons(seasons)
        .with_country_tags(split_items(&draft.area, &COMMA_SEPARATORS))
        .with_dietary_tags(split_items(
            &normalize_tags(&draft.tags, language),
            &COMMA_SEPARATORS,
        ))
        .with_ingredients(split_items(&draft.ingredients, &COMMA_SEPARATORS))
        .with_steps(split_items(&draft.steps, &STEP_SEPARATORS));
    recipe.time_minutes = draft.time_minutes;
    recipe.date = Some(date);
    recipe.solar_term = Some(term.chinese_name().to_owned());

    if language == Language::Chinese {
        recipe.name_zh = Some(recipe.name.clone());
        recipe.ingredients_zh.clone_from(&recipe.ingredients);
        recipe.steps_zh.clone_from(&recipe.steps);
    }
    Ok(recipe)
}

fn split_items(text: &str, separators: &[char]) -> Vec<String> {
    text.split(separators)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

impl<S> RecommendationService<S>
where
    S: RecipeStore + RatingsStore,
{
    /// Build a recipe from a draft, append it, and save the catalog
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid draft or a storage error when the
    /// catalog cannot be saved.
    pub async fn add_recipe(&mut self, draft: &RecipeDraft, language: Language) -> AppResult<Recipe> {
        let recipe = build_recipe(draft, language)?;
        self.recipes.push(recipe.clone());
        self.store.save_recipes(&self.recipes).await?;
        info!(
            recipe_id = recipe.id(),
            solar_term = recipe.solar_term.as_deref().unwrap_or_default(),
            "Added recipe"
        );
        Ok(recipe)
    }

    /// Merge a CSV file into the catalog
    ///
    /// The merged catalog replaces the loaded one and is saved unless strict
    /// mode rejected it or `dry_run` is set.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing file, `InvalidFormat` for
    /// malformed CSV, or a storage error when saving fails.
    pub async fn import_csv(&mut self, path: &Path, options: ImportOptions) -> AppResult<ImportOutcome> {
        let outcome = import_recipes_csv(&self.recipes, path, options)?;
        if options.dry_run {
            info!(path = %path.display(), "Dry run: import not saved");
            return Ok(outcome);
        }
        if let Some(merged) = &outcome.recipes {
            self.recipes.clone_from(merged);
            self.store.save_recipes(&self.recipes).await?;
        }
        Ok(outcome)
    }

    /// Write the catalog to a CSV file
    ///
    /// # Errors
    ///
    /// Returns a storage error when the file cannot be written.
    pub fn export_csv(&self, path: &Path) -> AppResult<usize> {
        export_recipes_csv(&self.recipes, path)?;
        Ok(self.recipes.len())
    }
}
