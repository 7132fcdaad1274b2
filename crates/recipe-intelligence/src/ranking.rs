// ABOUTME: Candidate filter and exploration-weighted ranking engine for recipe recommendation
// ABOUTME: Relaxes season and area constraints in order and scores candidates UCB-style
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Candidate Filter & Ranking Engine
//!
//! Filtering runs an ordered list of progressively relaxed passes and stops at
//! the first non-empty one. Within the surviving candidates each recipe gets
//!
//! ```text
//! score = avg + weight * sqrt(ln(total_views + 1) / (views + 1))
//! ```
//!
//! where `avg` falls back to a neutral prior for unrated recipes and
//! `total_views` is summed over the whole ratings table, not just candidates.

use crate::config::{IntelligenceConfig, RankingConfig};
use crate::requirements::RequirementSet;
use recipe_core::models::{RatingStats, RatingsTable, Recipe, Season};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One level of constraint relaxation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPass {
    /// Season, area, and requirements must all match
    SeasonAndArea,
    /// Area constraint dropped
    SeasonOnly,
    /// Season constraint dropped as well
    RequirementsOnly,
}

impl FilterPass {
    /// Passes in the order they are tried
    pub const ORDERED: [Self; 3] = [Self::SeasonAndArea, Self::SeasonOnly, Self::RequirementsOnly];

    /// Whether a recipe survives this pass
    #[must_use]
    pub fn accepts(self, recipe: &Recipe, context: &FilterContext<'_>) -> bool {
        if !context.requirements.matches(recipe) {
            return false;
        }
        match self {
            Self::SeasonAndArea => {
                recipe.has_season(context.season)
                    && (context.area.is_empty() || recipe.matches_area(&context.area))
            }
            Self::SeasonOnly => recipe.has_season(context.season),
            Self::RequirementsOnly => true,
        }
    }
}

/// Request context shared by every filter pass
#[derive(Debug, Clone)]
pub struct FilterContext<'a> {
    /// Season resolved for the request
    pub season: Season,
    /// Lower-cased, trimmed area text (may be empty)
    pub area: String,
    /// Parsed requirements
    pub requirements: &'a RequirementSet,
}

impl<'a> FilterContext<'a> {
    /// Build a context, case-folding the area text
    #[must_use]
    pub fn new(season: Season, area: &str, requirements: &'a RequirementSet) -> Self {
        Self {
            season,
            area: area.trim().to_lowercase(),
            requirements,
        }
    }
}

/// Select candidates from the first non-empty pass
///
/// Returns the pass that produced them, or `None` when even the most relaxed
/// pass is empty.
#[must_use]
pub fn select_candidates<'r>(
    recipes: &'r [Recipe],
    context: &FilterContext<'_>,
) -> Option<(FilterPass, Vec<&'r Recipe>)> {
    FilterPass::ORDERED.into_iter().find_map(|pass| {
        let candidates: Vec<&Recipe> = recipes
            .iter()
            .filter(|recipe| pass.accepts(recipe, context))
            .collect();
        (!candidates.is_empty()).then_some((pass, candidates))
    })
}

/// Exploration-weighted ranker
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    config: RankingConfig,
}

impl RecommendationEngine {
    /// Create an engine with explicit ranking configuration
    #[must_use]
    pub const fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Create an engine from the process-wide configuration
    #[must_use]
    pub fn from_global_config() -> Self {
        Self::new(IntelligenceConfig::global().ranking)
    }

    /// Ranking configuration in use
    #[must_use]
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Score one recipe given the global view total
    #[must_use]
    #[allow(clippy::imprecise_flops)] // ln(total + 1) as the score is defined
    pub fn score(&self, recipe_id: &str, stats: &RatingsTable, total_views: u64) -> f64 {
        let entry = stats.get(recipe_id);
        let average = entry
            .and_then(RatingStats::average)
            .unwrap_or(self.config.neutral_prior);
        let views = entry.map_or(0, RatingStats::views);
        let bonus = ((total_views as f64 + 1.0).ln() / (views as f64 + 1.0)).sqrt();
        self.config.exploration_weight.mul_add(bonus, average)
    }

    /// Pick the highest scoring candidate; the first maximum wins ties
    #[must_use]
    pub fn rank<'r>(&self, candidates: &[&'r Recipe], stats: &RatingsTable) -> Option<&'r Recipe> {
        let total_views = stats.total_views();
        let mut best: Option<(&Recipe, f64)> = None;
        for recipe in candidates {
            let score = self.score(recipe.id(), stats, total_views);
            let better = match best {
                Some((_, best_score)) => score > best_score,
                None => true,
            };
            if better {
                best = Some((recipe, score));
            }
        }
        if let Some((winner, score)) = best {
            debug!(
                recipe_id = winner.id(),
                score,
                total_views,
                candidates = candidates.len(),
                "Ranked recommendation candidates"
            );
        }
        best.map(|(recipe, _)| recipe)
    }

    /// Filter then rank; `None` is the normal "no recommendation" outcome
    #[must_use]
    pub fn recommend<'r>(
        &self,
        recipes: &'r [Recipe],
        stats: &RatingsTable,
        season: Season,
        area: &str,
        requirements: &RequirementSet,
    ) -> Option<&'r Recipe> {
        let context = FilterContext::new(season, area, requirements);
        let Some((pass, candidates)) = select_candidates(recipes, &context) else {
            debug!(%season, "No recipe satisfies the requirements in any pass");
            return None;
        };
        debug!(?pass, candidates = candidates.len(), "Selected candidate pass");
        self.rank(&candidates, stats)
    }
}

/// Recommend a recipe using the process-wide ranking configuration
#[must_use]
pub fn recommend<'r>(
    recipes: &'r [Recipe],
    stats: &RatingsTable,
    season: Season,
    area: &str,
    requirements: &RequirementSet,
) -> Option<&'r Recipe> {
    RecommendationEngine::from_global_config().recommend(recipes, stats, season, area, requirements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::parse_requirements;

    fn us_recipe(id: &str, season: Season) -> Recipe {
        Recipe::new(id, id)
            .with_seasons([season])
            .with_country_tags(["united states"])
    }

    #[test]
    fn test_season_match_wins() {
        let recipes = vec![
            us_recipe("a", Season::Spring),
            us_recipe("b", Season::Winter),
        ];
        let picked = RecommendationEngine::default().recommend(
            &recipes,
            &RatingsTable::new(),
            Season::Winter,
            "United States",
            &RequirementSet::default(),
        );
        assert_eq!(picked.map(Recipe::id), Some("b"));
    }

    #[test]
    fn test_passes_relax_in_order() {
        let recipes = vec![
            Recipe::new("italian", "Italian")
                .with_seasons([Season::Summer])
                .with_country_tags(["italy"]),
            Recipe::new("vegan-winter", "Vegan")
                .with_seasons([Season::Winter])
                .with_dietary_tags(["vegan"]),
        ];
        let none = RequirementSet::default();

        let context = FilterContext::new(Season::Summer, "Rome, Italy", &none);
        let (pass, _) = select_candidates(&recipes, &context).unwrap();
        assert_eq!(pass, FilterPass::SeasonAndArea);

        let context = FilterContext::new(Season::Summer, "Japan", &none);
        let (pass, found) = select_candidates(&recipes, &context).unwrap();
        assert_eq!(pass, FilterPass::SeasonOnly);
        assert_eq!(found[0].id(), "italian");

        let vegan = parse_requirements("vegan");
        let context = FilterContext::new(Season::Summer, "", &vegan);
        let (pass, found) = select_candidates(&recipes, &context).unwrap();
        assert_eq!(pass, FilterPass::RequirementsOnly);
        assert_eq!(found[0].id(), "vegan-winter");

        let impossible = parse_requirements("spicy");
        let context = FilterContext::new(Season::Summer, "", &impossible);
        assert!(select_candidates(&recipes, &context).is_none());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let recipes = vec![
            us_recipe("first", Season::Winter),
            us_recipe("second", Season::Winter),
        ];
        let picked = RecommendationEngine::default().recommend(
            &recipes,
            &RatingsTable::new(),
            Season::Winter,
            "",
            &RequirementSet::default(),
        );
        assert_eq!(picked.map(Recipe::id), Some("first"));
    }

    #[test]
    fn test_under_viewed_recipe_gets_exploration_bonus() {
        let recipes = vec![
            us_recipe("seen", Season::Winter),
            us_recipe("fresh", Season::Winter),
        ];
        let mut stats = RatingsTable::new();
        stats.insert("seen", RatingStats::from_parts(50, 15.0, 5));
        let picked = RecommendationEngine::default().recommend(
            &recipes,
            &stats,
            Season::Winter,
            "",
            &RequirementSet::default(),
        );
        assert_eq!(picked.map(Recipe::id), Some("fresh"));
    }

    #[test]
    fn test_score_formula() {
        let mut stats = RatingsTable::new();
        stats.insert("a", RatingStats::from_parts(3, 8.0, 2));
        stats.insert("other", RatingStats::from_parts(5, 0.0, 0));
        let engine = RecommendationEngine::default();
        let total = stats.total_views();
        assert_eq!(total, 8);
        let expected = 4.0 + (9.0_f64.ln() / 4.0).sqrt();
        assert!((engine.score("a", &stats, total) - expected).abs() < 1e-12);

        let unrated = 3.0 + 9.0_f64.ln().sqrt();
        assert!((engine.score("missing", &stats, total) - unrated).abs() < 1e-12);
    }

    #[test]
    fn test_zero_exploration_weight_ranks_by_average() {
        let engine = RecommendationEngine::new(RankingConfig {
            neutral_prior: 3.0,
            exploration_weight: 0.0,
        });
        let recipes = vec![
            us_recipe("low", Season::Winter),
            us_recipe("high", Season::Winter),
        ];
        let mut stats = RatingsTable::new();
        stats.insert("low", RatingStats::from_parts(0, 2.0, 1));
        stats.insert("high", RatingStats::from_parts(100, 5.0, 1));
        let picked = engine.recommend(&recipes, &stats, Season::Winter, "", &RequirementSet::default());
        assert_eq!(picked.map(Recipe::id), Some("high"));
    }

    #[test]
    fn test_empty_catalog_yields_nothing() {
        let picked = RecommendationEngine::default().recommend(
            &[],
            &RatingsTable::new(),
            Season::Spring,
            "",
            &RequirementSet::default(),
        );
        assert!(picked.is_none());
    }
}
