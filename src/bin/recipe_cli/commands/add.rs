// ABOUTME: Add command for recipe-cli
// ABOUTME: Collects recipe fields from flags, stamps the solar term, and saves the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Args;
use recipe_core::models::Language;
use recipe_core::AppResult;
use recipe_recommender::services::{RecipeDraft, RecommendationService};
use recipe_recommender::storage::{RatingsStore, RecipeStore};
use recipe_recommender::utils::parse_date;

use crate::helpers::display::display_added_recipe;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Recipe name
    #[arg(long)]
    name: String,

    /// Seasons, comma-separated (e.g. "spring, summer")
    #[arg(long)]
    seasons: String,

    /// Country or area tags, comma-separated
    #[arg(long, default_value = "")]
    area: String,

    /// Ingredients, comma-separated
    #[arg(long)]
    ingredients: String,

    /// Steps, semicolon-separated
    #[arg(long)]
    steps: String,

    /// Preparation time in minutes
    #[arg(long)]
    time: Option<u32>,

    /// Dietary tags, comma-separated
    #[arg(long, default_value = "")]
    tags: String,

    /// Entry date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<String>,
}

/// Add a recipe to the catalog
pub async fn run<S>(
    service: &mut RecommendationService<S>,
    args: AddArgs,
    language: Language,
) -> AppResult<()>
where
    S: RecipeStore + RatingsStore,
{
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let draft = RecipeDraft {
        name: args.name,
        area: args.area,
        seasons: args.seasons,
        ingredients: args.ingredients,
        steps: args.steps,
        time_minutes: args.time,
        tags: args.tags,
        date,
    };
    let recipe = service.add_recipe(&draft, language).await?;
    display_added_recipe(&recipe, language);
    Ok(())
}
