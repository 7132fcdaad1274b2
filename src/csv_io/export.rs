// ABOUTME: Writes the recipe catalog, or just its header row, as CSV
// ABOUTME: Parent directories are created and list fields are pipe-joined
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::csv_schema::{HEADER, LIST_SEPARATOR};
use recipe_core::constants::dates::DATE_FORMAT;
use recipe_core::models::{Recipe, Season};
use recipe_core::{AppError, AppResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Write every recipe to `path`, header first
///
/// # Errors
///
/// Returns `StorageError` when the file or its parent directory cannot be
/// written.
pub fn export_recipes_csv(recipes: &[Recipe], path: &Path) -> AppResult<()> {
    let mut writer = open_writer(path)?;
    for recipe in recipes {
        writer.write_record(recipe_row(recipe)).map_err(csv_error)?;
    }
    writer.flush()?;
    info!(path = %path.display(), count = recipes.len(), "Exported recipes to CSV");
    Ok(())
}

/// Write a header-only CSV file to `path`
///
/// # Errors
///
/// Returns `StorageError` when the file cannot be written.
pub fn write_csv_template(path: &Path) -> AppResult<()> {
    let mut writer = open_writer(path)?;
    writer.flush()?;
    info!(path = %path.display(), "Wrote CSV template");
    Ok(())
}

fn open_writer(path: &Path) -> AppResult<csv::Writer<fs::File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(HEADER).map_err(csv_error)?;
    Ok(writer)
}

fn recipe_row(recipe: &Recipe) -> [String; 13] {
    [
        recipe.id().to_owned(),
        recipe.name.clone(),
        recipe.name_zh.clone().unwrap_or_default(),
        join_list(&recipe.country_tags),
        join_list(recipe.seasons.iter().map(Season::as_str)),
        join_list(&recipe.ingredients),
        join_list(&recipe.ingredients_zh),
        join_list(&recipe.steps),
        join_list(&recipe.steps_zh),
        recipe
            .time_minutes
            .map(|minutes| minutes.to_string())
            .unwrap_or_default(),
        join_list(&recipe.dietary_tags),
        recipe
            .date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        recipe.solar_term.clone().unwrap_or_default(),
    ]
}

fn join_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            joined.push(LIST_SEPARATOR);
        }
        joined.push_str(item.as_ref());
    }
    joined
}

pub(super) fn csv_error(error: csv::Error) -> AppError {
    if error.is_io_error() {
        AppError::storage(format!("CSV I/O failed: {error}")).with_source(error)
    } else {
        AppError::invalid_format(format!("Malformed CSV: {error}")).with_source(error)
    }
}
