// ABOUTME: Integration tests for progressive filtering and exploration-weighted ranking
// ABOUTME: Covers pass relaxation, rating influence, view penalties, and deterministic ties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{recipe, tagged_recipe};
use recipe_core::models::{RatingStats, RatingsTable, Season};
use recipe_intelligence::ranking::{select_candidates, FilterContext};
use recipe_intelligence::{
    parse_requirements, FilterPass, RankingConfig, RecommendationEngine, RequirementSet,
};

fn engine() -> RecommendationEngine {
    RecommendationEngine::new(RankingConfig::default())
}

#[test]
fn test_season_match_beats_off_season() {
    let recipes = vec![
        recipe("a", &[Season::Spring], &["united states"]),
        recipe("b", &[Season::Winter], &["united states"]),
    ];
    let winner = engine()
        .recommend(
            &recipes,
            &RatingsTable::new(),
            Season::Winter,
            "United States",
            &RequirementSet::default(),
        )
        .unwrap();
    assert_eq!(winner.id(), "b");
}

#[test]
fn test_area_is_dropped_before_season() {
    let recipes = vec![
        recipe("italian", &[Season::Summer], &["italy"]),
        recipe("japanese", &[Season::Winter], &["japan"]),
    ];
    let requirements = RequirementSet::default();

    let context = FilterContext::new(Season::Winter, "Rome, Italy", &requirements);
    let (pass, candidates) = select_candidates(&recipes, &context).unwrap();
    assert_eq!(pass, FilterPass::SeasonOnly);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id(), "japanese");
}

#[test]
fn test_season_is_dropped_last() {
    let recipes = vec![
        tagged_recipe("salad", &[Season::Summer], &["vegan"], Some(10)),
        tagged_recipe("stew", &[Season::Winter], &["vegetarian"], Some(60)),
    ];
    let requirements = parse_requirements("vegan");
    let context = FilterContext::new(Season::Winter, "", &requirements);
    let (pass, candidates) = select_candidates(&recipes, &context).unwrap();
    assert_eq!(pass, FilterPass::RequirementsOnly);
    assert_eq!(candidates[0].id(), "salad");
}

#[test]
fn test_no_candidate_is_a_normal_outcome() {
    let recipes = vec![tagged_recipe("stew", &[Season::Winter], &["vegetarian"], None)];
    let requirements = parse_requirements("vegan, max 20");
    let result = engine().recommend(
        &recipes,
        &RatingsTable::new(),
        Season::Winter,
        "",
        &requirements,
    );
    assert!(result.is_none());
}

#[test]
fn test_higher_average_wins_at_equal_views() {
    let recipes = vec![
        recipe("meh", &[Season::Autumn], &[]),
        recipe("great", &[Season::Autumn], &[]),
    ];
    let mut stats = RatingsTable::new();
    stats.insert("meh", RatingStats::from_parts(3, 6.0, 3));
    stats.insert("great", RatingStats::from_parts(3, 15.0, 3));
    let winner = engine()
        .recommend(&recipes, &stats, Season::Autumn, "", &RequirementSet::default())
        .unwrap();
    assert_eq!(winner.id(), "great");
}

#[test]
fn test_unseen_recipe_gets_exploration_bonus() {
    let recipes = vec![
        recipe("seen", &[Season::Autumn], &[]),
        recipe("fresh", &[Season::Autumn], &[]),
    ];
    let mut stats = RatingsTable::new();
    // Average 3.0 (the neutral prior) but many views
    stats.insert("seen", RatingStats::from_parts(50, 9.0, 3));
    let winner = engine()
        .recommend(&recipes, &stats, Season::Autumn, "", &RequirementSet::default())
        .unwrap();
    assert_eq!(winner.id(), "fresh");
}

#[test]
fn test_total_views_spans_the_whole_table() {
    let engine = engine();
    let mut stats = RatingsTable::new();
    stats.insert("elsewhere", RatingStats::from_parts(99, 0.0, 0));
    let score = engine.score("candidate", &stats, stats.total_views());
    let expected = 3.0 + (100.0_f64.ln() / 1.0).sqrt();
    assert!((score - expected).abs() < 1e-12);
}

#[test]
fn test_views_outside_the_candidates_change_the_winner() {
    let recipes = vec![
        recipe("rated", &[Season::Winter], &[]),
        recipe("fresh", &[Season::Winter], &[]),
        recipe("off-season", &[Season::Summer], &[]),
    ];
    let mut stats = RatingsTable::new();
    stats.insert("rated", RatingStats::from_parts(1, 4.0, 1));
    let winner = engine()
        .recommend(&recipes, &stats, Season::Winter, "", &RequirementSet::default())
        .unwrap();
    assert_eq!(winner.id(), "rated");

    stats.insert("off-season", RatingStats::from_parts(1_000_000, 0.0, 0));
    let winner = engine()
        .recommend(&recipes, &stats, Season::Winter, "", &RequirementSet::default())
        .unwrap();
    assert_eq!(winner.id(), "fresh");
}

#[test]
fn test_identical_scores_pick_first_in_input_order() {
    let recipes = vec![
        recipe("first", &[Season::Spring], &[]),
        recipe("second", &[Season::Spring], &[]),
        recipe("third", &[Season::Spring], &[]),
    ];
    let mut stats = RatingsTable::new();
    for id in ["first", "second", "third"] {
        stats.insert(id, RatingStats::from_parts(2, 8.0, 2));
    }
    for _ in 0..5 {
        let winner = engine()
            .recommend(&recipes, &stats, Season::Spring, "", &RequirementSet::default())
            .unwrap();
        assert_eq!(winner.id(), "first");
    }
}

#[test]
fn test_exploration_weight_zero_ranks_by_average_only() {
    let engine = RecommendationEngine::new(RankingConfig {
        exploration_weight: 0.0,
        ..RankingConfig::default()
    });
    let recipes = vec![
        recipe("rated", &[Season::Summer], &[]),
        recipe("unrated", &[Season::Summer], &[]),
    ];
    let mut stats = RatingsTable::new();
    stats.insert("rated", RatingStats::from_parts(40, 14.0, 4));
    let winner = engine
        .recommend(&recipes, &stats, Season::Summer, "", &RequirementSet::default())
        .unwrap();
    assert_eq!(winner.id(), "rated");
}
