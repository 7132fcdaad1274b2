// ABOUTME: Solar term command for recipe-cli
// ABOUTME: Shows the term for a date, its seasonal guidance, and the best-rated recipe stamped with it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::Language;
use recipe_core::AppResult;
use recipe_recommender::services::RecommendationService;
use recipe_recommender::storage::{RatingsStore, RecipeStore};
use recipe_recommender::utils::parse_optional_date;
use tracing::debug;

use crate::helpers::display::display_solar_term;

/// Print the solar term report for a date
pub async fn run<S>(
    service: &RecommendationService<S>,
    date: Option<&str>,
    language: Language,
) -> AppResult<()>
where
    S: RecipeStore + RatingsStore,
{
    let date = parse_optional_date(date)?;
    let report = service.solar_term_report(date, language).await;
    debug!(
        term = %report.term(),
        longitude = report.term_match.longitude,
        distance = report.term_match.distance,
        "Classified solar term"
    );
    display_solar_term(&report, language);
    Ok(())
}
