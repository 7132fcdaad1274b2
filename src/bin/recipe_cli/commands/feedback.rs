// ABOUTME: Feedback command for recipe-cli
// ABOUTME: Records a 1-5 score for a recipe identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::Language;
use recipe_core::AppResult;
use recipe_recommender::services::RecommendationService;
use recipe_recommender::storage::{RatingsStore, RecipeStore};

use crate::helpers::display::display_feedback;

/// Record a score
pub async fn run<S>(
    service: &RecommendationService<S>,
    recipe_id: &str,
    score: u8,
    language: Language,
) -> AppResult<()>
where
    S: RecipeStore + RatingsStore,
{
    let receipt = service.record_feedback(recipe_id.trim(), score).await?;
    display_feedback(recipe_id, &receipt, language);
    Ok(())
}
