// ABOUTME: Strict YYYY-MM-DD date parsing and the local "today" default
// ABOUTME: Malformed input surfaces as an InvalidFormat error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate};
use recipe_core::constants::dates::DATE_FORMAT;
use recipe_core::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
///
/// Returns `InvalidFormat` if the text is not a valid calendar date
pub fn parse_date(text: &str) -> AppResult<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        AppError::invalid_format(format!("Invalid date '{trimmed}', expected YYYY-MM-DD"))
            .with_source(e)
    })
}

/// Parse an optional date, defaulting to today when absent or blank
///
/// # Errors
///
/// Returns `InvalidFormat` if a non-blank value is not a valid calendar date
pub fn parse_optional_date(text: Option<&str>) -> AppResult<NaiveDate> {
    match text.map(str::trim) {
        Some(value) if !value.is_empty() => parse_date(value),
        _ => Ok(today()),
    }
}

/// Current local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
