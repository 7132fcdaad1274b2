// ABOUTME: Configuration management module for the recipe recommender
// ABOUTME: Environment-only configuration; ranking settings live in the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Data directory, file layout, and display language
pub mod environment;

pub use environment::RecommenderConfig;
pub use recipe_intelligence::IntelligenceConfig;
