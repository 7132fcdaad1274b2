// ABOUTME: Merges CSV rows into an existing recipe catalog with row-level validation
// ABOUTME: Blank ids get generated identifiers, known ids are replaced in place, problems become warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::export::csv_error;
use super::{ImportOptions, ImportOutcome, ImportReport};
use crate::utils::{generate_recipe_id, parse_date};
use recipe_core::constants::csv_schema::LIST_SEPARATOR;
use recipe_core::models::{Recipe, Season};
use recipe_core::{AppError, AppResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Raw CSV row; absent columns read as empty cells
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    id: String,
    name: String,
    name_zh: String,
    country_tags: String,
    seasons: String,
    ingredients: String,
    ingredients_zh: String,
    steps: String,
    steps_zh: String,
    time_minutes: String,
    dietary_tags: String,
    date: String,
    solar_term: String,
}

/// Identifier and name indexes over the catalog being merged into
struct MergeState {
    recipes: Vec<Recipe>,
    position_by_id: HashMap<String, usize>,
    id_by_name: HashMap<String, String>,
}

impl MergeState {
    fn new(existing: &[Recipe]) -> Self {
        let mut position_by_id = HashMap::new();
        let mut id_by_name = HashMap::new();
        for (position, recipe) in existing.iter().enumerate() {
            position_by_id.insert(recipe.id().to_owned(), position);
            if !recipe.name.trim().is_empty() {
                id_by_name.insert(name_key(&recipe.name), recipe.id().to_owned());
            }
        }
        Self {
            recipes: existing.to_vec(),
            position_by_id,
            id_by_name,
        }
    }

    fn existing(&self, recipe_id: &str) -> Option<&Recipe> {
        self.position_by_id
            .get(recipe_id)
            .and_then(|&position| self.recipes.get(position))
    }

    /// Replace in place when the id is known, otherwise append; returns true on replace
    fn upsert(&mut self, recipe: Recipe) -> bool {
        self.id_by_name
            .insert(name_key(&recipe.name), recipe.id().to_owned());
        let slot = self
            .position_by_id
            .get(recipe.id())
            .and_then(|&position| self.recipes.get_mut(position));
        if let Some(slot) = slot {
            *slot = recipe;
            true
        } else {
            self.position_by_id
                .insert(recipe.id().to_owned(), self.recipes.len());
            self.recipes.push(recipe);
            false
        }
    }
}

/// Merge the rows of the CSV file at `path` into `existing`
///
/// Row numbers in warnings count the header as row 1. With
/// [`ImportOptions::strict`] any warning or skipped row rejects the merge and
/// the outcome carries no recipes.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the file does not exist and `InvalidFormat`
/// when it is not parseable CSV.
pub fn import_recipes_csv(
    existing: &[Recipe],
    path: &Path,
    options: ImportOptions,
) -> AppResult<ImportOutcome> {
    if !path.exists() {
        return Err(AppError::not_found(format!("CSV file {}", path.display())));
    }
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let mut state = MergeState::new(existing);
    let mut report = ImportReport::default();

    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row_number = index + 2;
        let row = row.map_err(csv_error)?;
        let Some(recipe) = recipe_from_row(&row, row_number, &state, &mut report.warnings) else {
            report.skipped += 1;
            continue;
        };
        if state.upsert(recipe) {
            report.updated += 1;
        } else {
            report.added += 1;
        }
    }

    info!(
        path = %path.display(),
        added = report.added,
        updated = report.updated,
        skipped = report.skipped,
        "CSV import processed"
    );
    for warning in &report.warnings {
        warn!("{warning}");
    }

    if options.strict && !report.is_clean() {
        warn!("Strict import rejected due to validation warnings or skipped rows");
        return Ok(ImportOutcome {
            recipes: None,
            report,
        });
    }
    Ok(ImportOutcome {
        recipes: Some(state.recipes),
        report,
    })
}

fn recipe_from_row(
    row: &CsvRow,
    row_number: usize,
    state: &MergeState,
    warnings: &mut Vec<String>,
) -> Option<Recipe> {
    let name = row.name.trim();
    if name.is_empty() {
        warnings.push(format!("Row {row_number}: missing name."));
        return None;
    }

    let recipe_id = match row.id.trim() {
        "" => generate_recipe_id(name),
        id => id.to_owned(),
    };
    if let Some(existing) = state.existing(&recipe_id) {
        if name_key(&existing.name) != name_key(name) {
            warnings.push(format!(
                "Row {row_number}: recipe ID {recipe_id} already exists with different name."
            ));
        }
    }
    if let Some(duplicate_id) = state.id_by_name.get(&name_key(name)) {
        if *duplicate_id != recipe_id {
            warnings.push(format!(
                "Row {row_number}: duplicate name '{name}' already exists as {duplicate_id}."
            ));
        }
    }

    let mut seasons = Vec::new();
    for word in split_lower(&row.seasons) {
        match word.parse::<Season>() {
            Ok(season) => seasons.push(season),
            Err(_) => warnings.push(format!(
                "Row {row_number}: unknown season '{word}' ignored."
            )),
        }
    }

    let date = match row.date.trim() {
        "" => None,
        text => parse_date(text).map_or_else(
            |_| {
                warnings.push(format!("Row {row_number}: invalid date '{text}' ignored."));
                None
            },
            Some,
        ),
    };

    let mut recipe = Recipe::new(recipe_id, name);
    recipe.name_zh = non_empty(&row.name_zh);
    recipe.country_tags = split_lower(&row.country_tags);
    recipe.seasons = seasons;
    recipe.ingredients = split_list(&row.ingredients);
    recipe.ingredients_zh = split_list(&row.ingredients_zh);
    recipe.steps = split_list(&row.steps);
    recipe.steps_zh = split_list(&row.steps_zh);
    recipe.time_minutes = parse_minutes(&row.time_minutes);
    recipe.dietary_tags = split_lower(&row.dietary_tags);
    recipe.date = date;
    recipe.solar_term = non_empty(&row.solar_term);
    Some(recipe)
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn non_empty(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn split_lower(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Digits only; anything else (signs, decimals, overflow) means unknown
fn parse_minutes(cell: &str) -> Option<u32> {
    let trimmed = cell.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_requires_digits() {
        assert_eq!(parse_minutes("30"), Some(30));
        assert_eq!(parse_minutes(" 45 "), Some(45));
        assert_eq!(parse_minutes("-5"), None);
        assert_eq!(parse_minutes("12.5"), None);
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("99999999999"), None);
    }

    #[test]
    fn test_split_lower_drops_empty_items() {
        assert_eq!(
            split_lower(" Italy | |EUROPE|"),
            vec!["italy".to_owned(), "europe".to_owned()]
        );
    }
}
