// ABOUTME: Core types and constants for the seasonal recipe recommender
// ABOUTME: Foundation crate with error handling, recipe and rating models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the seasonal
//! recipe recommender. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Recipe, rating statistics, season, hemisphere, and language types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `RatingStats`, `RatingsTable`, Season, etc.)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
