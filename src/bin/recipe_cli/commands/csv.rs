// ABOUTME: CSV commands for recipe-cli
// ABOUTME: Export the catalog, import with validation (dry run and strict modes), or write a template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Subcommand;
use recipe_core::models::Language;
use recipe_core::AppResult;
use recipe_recommender::csv_io::{write_csv_template, ImportOptions};
use recipe_recommender::services::RecommendationService;
use recipe_recommender::storage::{RatingsStore, RecipeStore};
use std::path::PathBuf;

use crate::helpers::display::{display_import_report, labels};

#[non_exhaustive]
#[derive(Debug, Subcommand)]
pub enum CsvCommand {
    /// Export the catalog to a CSV file
    Export {
        /// Destination path
        path: PathBuf,
    },

    /// Merge recipes from a CSV file into the catalog
    Import {
        /// Source path
        path: PathBuf,

        /// Validate and report without saving
        #[arg(long)]
        dry_run: bool,

        /// Reject the import if any row raises a warning or is skipped
        #[arg(long)]
        strict: bool,
    },

    /// Write a header-only CSV template
    Template {
        /// Destination path
        path: PathBuf,
    },
}

/// Run a CSV subcommand
pub async fn run<S>(
    service: &mut RecommendationService<S>,
    command: CsvCommand,
    language: Language,
) -> AppResult<()>
where
    S: RecipeStore + RatingsStore,
{
    let t = labels(language);
    match command {
        CsvCommand::Export { path } => {
            let count = service.export_csv(&path)?;
            println!("Exported {count} recipes to {}", path.display());
        }
        CsvCommand::Import {
            path,
            dry_run,
            strict,
        } => {
            let outcome = service
                .import_csv(&path, ImportOptions { strict, dry_run })
                .await?;
            display_import_report(&outcome.report);
            if outcome.is_rejected() {
                println!("{}", t.import_rejected);
            } else if dry_run {
                println!("{}", t.dry_run);
            }
        }
        CsvCommand::Template { path } => {
            write_csv_template(&path)?;
            println!("{} {}", t.template_written, path.display());
        }
    }
    Ok(())
}
