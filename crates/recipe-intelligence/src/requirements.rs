// ABOUTME: Requirement parser turning comma-separated free text into a structured requirement set
// ABOUTME: Handles negation markers, duration bounds, and canonical include tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::tags::normalize_tag;
use recipe_core::models::Recipe;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Clause prefixes that turn the remainder into an exclusion
const NEGATION_MARKERS: [&str; 4] = ["no ", "without ", "exclude ", "avoid "];

/// Duration bound, stored as Option to handle compilation failure gracefully
static DURATION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: under 30, max 45, <=20, 15; a longer digit run is not a bound
    Regex::new(r"(?:^|\D)(\d{1,3})(?:\D|$)").ok()
});

/// Structured constraints built fresh for each recommendation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Canonical tags that must all be present
    pub include: Vec<String>,
    /// Canonical tags that must all be absent
    pub exclude: Vec<String>,
    /// Inclusive upper bound on preparation time
    pub max_minutes: Option<u32>,
}

impl RequirementSet {
    /// Whether the set places no constraint at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty() && self.max_minutes.is_none()
    }

    /// Whether a recipe satisfies every constraint
    ///
    /// A recipe with unknown duration fails any duration bound.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.include.iter().all(|tag| recipe.has_dietary_tag(tag)) {
            return false;
        }
        if self.exclude.iter().any(|tag| recipe.has_dietary_tag(tag)) {
            return false;
        }
        self.max_minutes.is_none_or(|limit| {
            recipe
                .time_minutes
                .is_some_and(|minutes| minutes <= limit)
        })
    }
}

/// Parse a free-text requirement string
///
/// Clauses are comma separated and processed independently. A negated clause
/// is never inspected for a duration, and the last duration clause wins.
#[must_use]
pub fn parse_requirements(text: &str) -> RequirementSet {
    let mut requirements = RequirementSet::default();

    for clause in text
        .split(',')
        .map(|clause| clause.trim().to_lowercase())
        .filter(|clause| !clause.is_empty())
    {
        if let Some(rest) = NEGATION_MARKERS
            .iter()
            .find_map(|marker| clause.strip_prefix(marker))
        {
            requirements.exclude.push(normalize_tag(rest));
            continue;
        }

        if let Some(minutes) = DURATION_PATTERN
            .as_ref()
            .and_then(|pattern| pattern.captures(&clause))
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse::<u32>().ok())
        {
            requirements.max_minutes = Some(minutes);
            continue;
        }

        requirements.include.push(normalize_tag(&clause));
    }

    requirements
}
