// ABOUTME: Recommend command for recipe-cli
// ABOUTME: Resolves the date, asks the service for a recipe, and optionally records a score for it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Args;
use recipe_core::models::Language;
use recipe_core::AppResult;
use recipe_recommender::services::{RecommendationRequest, RecommendationService};
use recipe_recommender::storage::{RatingsStore, RecipeStore};
use recipe_recommender::utils::parse_optional_date;

use crate::helpers::display::{display_feedback, display_no_match, display_recommendation};

#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// Date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Country or area, e.g. "Sydney, Australia"
    #[arg(long, default_value = "")]
    area: String,

    /// Comma-separated requirements, e.g. "vegan, no nuts, max 30"
    #[arg(long, short = 'r', default_value = "")]
    requirements: String,

    /// Score the recommended recipe right away (1-5)
    #[arg(long)]
    feedback: Option<u8>,
}

/// Run a recommendation
pub async fn run<S>(
    service: &RecommendationService<S>,
    args: RecommendArgs,
    language: Language,
) -> AppResult<()>
where
    S: RecipeStore + RatingsStore,
{
    let date = parse_optional_date(args.date.as_deref())?;
    let request = RecommendationRequest::new(date)
        .with_area(args.area)
        .with_requirements(args.requirements)
        .with_language(language);

    let Some(outcome) = service.recommend(&request).await? else {
        display_no_match(language);
        return Ok(());
    };
    display_recommendation(&outcome, language);

    if let Some(score) = args.feedback {
        let receipt = service.record_feedback(outcome.recipe.id(), score).await?;
        display_feedback(outcome.recipe.id(), &receipt, language);
    }
    Ok(())
}
