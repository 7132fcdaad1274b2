// ABOUTME: Utility module exports for identifier, slug, and date helpers
// ABOUTME: Shared by the services, CSV import, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe identifier generation
pub mod ids;

/// Calendar date parsing
pub mod dates;

pub use dates::{parse_date, parse_optional_date, today};
pub use ids::{generate_recipe_id, slugify};
