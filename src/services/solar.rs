// ABOUTME: Solar term report for a date with guidance and the best-rated recipe of that term
// ABOUTME: Recipes are matched to a term by the Chinese term name stamped on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::recommendation::RecommendationService;
use crate::storage::{RatingsStore, RecipeStore};
use chrono::NaiveDate;
use recipe_core::models::{Language, RatingStats, RatingsTable, Recipe};
use recipe_intelligence::solar_terms::guidance_for;
use recipe_intelligence::{solar_term_for_date, SolarTerm, TermGuidance, TermMatch};

/// Recipe shown alongside a solar term
#[derive(Debug, Clone, PartialEq)]
pub struct PopularRecipe {
    /// The recipe
    pub recipe: Recipe,
    /// Average feedback score, `None` when never rated
    pub average: Option<f64>,
}

/// Everything displayed for a solar term lookup
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTermReport {
    /// Date that was classified
    pub date: NaiveDate,
    /// Classification result
    pub term_match: TermMatch,
    /// Guidance in the requested language
    pub guidance: &'static TermGuidance,
    /// Best-rated recipe stamped with this term, if any
    pub popular: Option<PopularRecipe>,
}

impl SolarTermReport {
    /// The classified term
    #[must_use]
    pub const fn term(&self) -> SolarTerm {
        self.term_match.term
    }
}

/// Best-rated recipe whose solar term label equals the term's Chinese name
///
/// Unrated recipes count as 0.0; among equal ratings the earliest recipe wins.
#[must_use]
pub fn most_popular_recipe<'r>(
    recipes: &'r [Recipe],
    ratings: &RatingsTable,
    term: SolarTerm,
) -> Option<&'r Recipe> {
    let label = term.chinese_name();
    let mut best: Option<(&Recipe, f64)> = None;
    for recipe in recipes
        .iter()
        .filter(|recipe| recipe.solar_term.as_deref() == Some(label))
    {
        let rating = ratings
            .get(recipe.id())
            .and_then(RatingStats::average)
            .unwrap_or(0.0);
        let better = match best {
            Some((_, best_rating)) => rating > best_rating,
            None => true,
        };
        if better {
            best = Some((recipe, rating));
        }
    }
    best.map(|(recipe, _)| recipe)
}

/// Classify a date and assemble guidance plus the most popular matching recipe
#[must_use]
pub fn solar_term_report(
    date: NaiveDate,
    language: Language,
    recipes: &[Recipe],
    ratings: &RatingsTable,
) -> SolarTermReport {
    let term_match = solar_term_for_date(date);
    let popular = most_popular_recipe(recipes, ratings, term_match.term).map(|recipe| {
        PopularRecipe {
            average: ratings.get(recipe.id()).and_then(RatingStats::average),
            recipe: recipe.clone(),
        }
    });
    SolarTermReport {
        date,
        term_match,
        guidance: guidance_for(term_match.term, language),
        popular,
    }
}

impl<S> RecommendationService<S>
where
    S: RecipeStore + RatingsStore,
{
    /// Solar term report against the loaded catalog and live ratings
    pub async fn solar_term_report(&self, date: NaiveDate, language: Language) -> SolarTermReport {
        let ratings = self.ratings().await;
        solar_term_report(date, language, &self.recipes, &ratings)
    }
}
