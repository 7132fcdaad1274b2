// ABOUTME: Integration tests for the JSON file store
// ABOUTME: Covers first-run defaults, round trips, and errors for corrupt files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{recipe, temp_store};
use recipe_core::models::{RatingStats, RatingsTable, Season};
use recipe_core::ErrorCode;
use recipe_recommender::storage::{default_recipes, RatingsStore, RecipeStore};

#[tokio::test]
async fn test_missing_files_yield_defaults() {
    let (_dir, store) = temp_store();

    let recipes = store.load_recipes().await.unwrap();
    assert_eq!(recipes, default_recipes());

    let ratings = store.load_ratings().await.unwrap();
    assert!(ratings.is_empty());
}

#[tokio::test]
async fn test_recipes_round_trip_in_order() {
    let (_dir, store) = temp_store();
    let mut stew = recipe("stew", &[Season::Winter, Season::Autumn], &["ireland"]);
    stew.time_minutes = Some(90);
    let catalog = vec![recipe("zucchini", &[Season::Summer], &[]), stew];

    store.save_recipes(&catalog).await.unwrap();
    let loaded = store.load_recipes().await.unwrap();
    assert_eq!(loaded, catalog);
}

#[tokio::test]
async fn test_ratings_round_trip() {
    let (_dir, store) = temp_store();
    let mut ratings = RatingsTable::new();
    ratings.insert("stew", RatingStats::from_parts(4, 9.0, 2));
    ratings.record_view("salad");

    store.save_ratings(&ratings).await.unwrap();
    let loaded = store.load_ratings().await.unwrap();
    assert_eq!(loaded, ratings);
    assert_eq!(loaded.total_views(), 5);
}

#[tokio::test]
async fn test_saved_json_is_pretty_with_sorted_keys() {
    let (_dir, store) = temp_store();
    let mut ratings = RatingsTable::new();
    ratings.record_view("b-recipe");
    ratings.record_view("a-recipe");
    store.save_ratings(&ratings).await.unwrap();

    let text = std::fs::read_to_string(store.ratings_path()).unwrap();
    assert!(text.ends_with('\n'));
    assert!(text.contains("\n  "));
    assert!(text.find("a-recipe").unwrap() < text.find("b-recipe").unwrap());
}

#[tokio::test]
async fn test_save_creates_missing_data_directory() {
    let (dir, _) = temp_store();
    let nested = dir.path().join("nested").join("data");
    let store = recipe_recommender::storage::JsonFileStore::new(&nested);

    store.save_recipes(&default_recipes()).await.unwrap();
    assert!(nested.join("recipes.json").exists());
}

#[tokio::test]
async fn test_corrupt_catalog_is_a_serialization_error() {
    let (_dir, store) = temp_store();
    std::fs::write(store.recipes_path(), "{ not json").unwrap();

    let error = store.load_recipes().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}
