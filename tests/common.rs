// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, recipe builders, dates, and temporary JSON stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_recommender`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use chrono::NaiveDate;
use recipe_core::models::{Recipe, Season};
use recipe_recommender::storage::JsonFileStore;
use std::sync::Once;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Recipe tagged for the given seasons and areas
pub fn recipe(id: &str, seasons: &[Season], areas: &[&str]) -> Recipe {
    Recipe::new(id, id)
        .with_seasons(seasons.iter().copied())
        .with_country_tags(areas.iter().copied())
}

/// Recipe with dietary tags and an optional preparation time
pub fn tagged_recipe(id: &str, seasons: &[Season], tags: &[&str], minutes: Option<u32>) -> Recipe {
    let mut recipe = recipe(id, seasons, &[]).with_dietary_tags(tags.iter().copied());
    recipe.time_minutes = minutes;
    recipe
}

/// JSON store in a fresh temporary directory; keep the `TempDir` alive for the test
pub fn temp_store() -> (TempDir, JsonFileStore) {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    (dir, store)
}
