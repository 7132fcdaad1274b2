// ABOUTME: Domain service layer sequencing parsing, ranking, and persistence
// ABOUTME: Used by the CLI; independent of how input is collected or output rendered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services own the loaded catalog and the shared ratings table, call into the
//! intelligence crate for every decision, and write changes back through the
//! store traits.

/// Recommendation requests and feedback recording
pub mod recommendation;

/// Recipe entry and CSV bulk operations
pub mod catalog;

/// Solar term reports with the most popular matching recipe
pub mod solar;

pub use catalog::{build_recipe, RecipeDraft};
pub use recommendation::{
    FeedbackReceipt, RecommendationOutcome, RecommendationRequest, RecommendationService,
};
pub use solar::{most_popular_recipe, solar_term_report, PopularRecipe, SolarTermReport};
