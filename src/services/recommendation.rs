// ABOUTME: Recommendation service running requirement parsing, season resolution, and ranking
// ABOUTME: Records a view for every recommendation and persists feedback scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::i18n::translate_requirements;
use crate::storage::{RatingsStore, RecipeStore, SharedRatings};
use chrono::NaiveDate;
use recipe_core::models::{Hemisphere, Language, RatingStats, RatingsTable, Recipe, Season};
use recipe_core::AppResult;
use recipe_intelligence::{
    determine_hemisphere, determine_season, parse_requirements, RecommendationEngine,
    RequirementSet,
};
use tokio::sync::RwLockReadGuard;
use tracing::{info, warn};

/// Inputs for one recommendation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    /// Date used to resolve the season
    pub date: NaiveDate,
    /// Free-text country or area, may be empty
    pub area: String,
    /// Comma-separated requirement clauses, may be empty
    pub requirements: String,
    /// Language the requirement text is written in
    pub language: Language,
}

impl RecommendationRequest {
    /// Request for a date with no area and no requirements
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            area: String::new(),
            requirements: String::new(),
            language: Language::English,
        }
    }

    /// Set the area text
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Set the requirement text
    #[must_use]
    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = requirements.into();
        self
    }

    /// Set the input language
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// A successful recommendation and the context it was chosen in
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationOutcome {
    /// Winning recipe
    pub recipe: Recipe,
    /// Season resolved from the date and hemisphere
    pub season: Season,
    /// Hemisphere inferred from the area
    pub hemisphere: Hemisphere,
    /// Parsed requirements
    pub requirements: RequirementSet,
}

/// Result of recording a feedback score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackReceipt {
    /// Whether the identifier belongs to a recipe in the catalog
    pub recipe_known: bool,
    /// Statistics after the score was recorded
    pub stats: RatingStats,
}

/// Owns the loaded catalog and ratings, and writes changes back to the store
pub struct RecommendationService<S> {
    pub(super) store: S,
    pub(super) recipes: Vec<Recipe>,
    ratings: SharedRatings,
    engine: RecommendationEngine,
}

impl<S> RecommendationService<S>
where
    S: RecipeStore + RatingsStore,
{
    /// Load the catalog and ratings from the store, ranking with the global configuration
    ///
    /// # Errors
    ///
    /// Returns an error when either file exists but cannot be read or parsed.
    pub async fn load(store: S) -> AppResult<Self> {
        Self::load_with_engine(store, RecommendationEngine::from_global_config()).await
    }

    /// Load with an explicit ranking engine
    ///
    /// # Errors
    ///
    /// Returns an error when either file exists but cannot be read or parsed.
    pub async fn load_with_engine(store: S, engine: RecommendationEngine) -> AppResult<Self> {
        let recipes = store.load_recipes().await?;
        let ratings = store.load_ratings().await?;
        info!(
            recipes = recipes.len(),
            rated = ratings.len(),
            "Recommendation service ready"
        );
        Ok(Self {
            store,
            recipes,
            ratings: SharedRatings::new(ratings),
            engine,
        })
    }

    /// Catalog in stored order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by identifier
    #[must_use]
    pub fn find_recipe(&self, recipe_id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id() == recipe_id)
    }

    /// Read access to the live ratings table
    pub async fn ratings(&self) -> RwLockReadGuard<'_, RatingsTable> {
        self.ratings.read().await
    }

    /// Pick a recipe for the request and record a view for it
    ///
    /// `Ok(None)` means no recipe satisfies the requirements, which is a
    /// normal outcome.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the updated ratings cannot be saved.
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<Option<RecommendationOutcome>> {
        let requirement_text = translate_requirements(&request.requirements, request.language);
        let requirements = parse_requirements(&requirement_text);
        let hemisphere = determine_hemisphere(&request.area);
        let season = determine_season(request.date, hemisphere);

        let winner = {
            let ratings = self.ratings.read().await;
            self.engine
                .recommend(&self.recipes, &ratings, season, &request.area, &requirements)
                .cloned()
        };
        let Some(recipe) = winner else {
            info!(%season, %hemisphere, "No recipe matched the request");
            return Ok(None);
        };

        self.ratings.record_view(recipe.id()).await;
        self.persist_ratings().await?;
        info!(recipe_id = recipe.id(), %season, %hemisphere, "Recommended recipe");

        Ok(Some(RecommendationOutcome {
            recipe,
            season,
            hemisphere,
            requirements,
        }))
    }

    /// Record a feedback score in `[1, 5]` and persist it
    ///
    /// Scores for identifiers outside the catalog are still stored.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a score outside `[1, 5]`, or a storage
    /// error when the ratings cannot be saved.
    pub async fn record_feedback(&self, recipe_id: &str, score: u8) -> AppResult<FeedbackReceipt> {
        self.ratings.record_feedback(recipe_id, score).await?;
        self.persist_ratings().await?;

        let recipe_known = self.find_recipe(recipe_id).is_some();
        if !recipe_known {
            warn!(recipe_id, "Feedback recorded for a recipe outside the catalog");
        }
        let stats = self
            .ratings
            .read()
            .await
            .get(recipe_id)
            .copied()
            .unwrap_or_default();
        Ok(FeedbackReceipt {
            recipe_known,
            stats,
        })
    }

    async fn persist_ratings(&self) -> AppResult<()> {
        let snapshot = self.ratings.snapshot().await;
        self.store.save_ratings(&snapshot).await
    }
}
