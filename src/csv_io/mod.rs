// ABOUTME: CSV interchange for the recipe catalog
// ABOUTME: Export, header-only templates, and validated import with a row-level report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! CSV interchange
//!
//! One recipe per row. List-valued fields are joined with `|` inside a cell.
//! The header row is always written in the fixed column order of
//! [`recipe_core::constants::csv_schema::HEADER`].

use recipe_core::models::Recipe;
use std::fmt;

/// Export and template writing
pub mod export;

/// Validated import
pub mod import;

pub use export::{export_recipes_csv, write_csv_template};
pub use import::import_recipes_csv;

/// Import behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Reject the whole import when any warning was raised or any row skipped
    pub strict: bool,
    /// Validate and report without persisting the merged catalog
    pub dry_run: bool,
}

/// Row-level summary of an import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows appended as new recipes
    pub added: usize,
    /// Rows that replaced an existing recipe with the same identifier
    pub updated: usize,
    /// Rows dropped entirely
    pub skipped: usize,
    /// Validation messages, each prefixed with its row number
    pub warnings: Vec<String>,
}

impl ImportReport {
    /// Whether the import raised no warnings and skipped no rows
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.skipped == 0
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Imported {} recipes, updated {} recipes, skipped {} rows.",
            self.added, self.updated, self.skipped
        )
    }
}

/// Result of an import: the merged catalog unless strict mode rejected it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Merged catalog, `None` when the import was rejected
    pub recipes: Option<Vec<Recipe>>,
    /// Row-level summary
    pub report: ImportReport,
}

impl ImportOutcome {
    /// Whether strict mode rejected the import
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.recipes.is_none()
    }
}
