// ABOUTME: Integration tests for requirement parsing and tag normalization
// ABOUTME: Covers inclusion, negation, duration bounds, and pass-through of unknown tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::tagged_recipe;
use recipe_core::models::{Language, Season};
use recipe_intelligence::{normalize_tag, parse_requirements, RequirementSet};
use recipe_recommender::i18n::translate_requirements;

#[test]
fn test_plain_clauses_become_includes() {
    let parsed = parse_requirements("vegan, quick, high protein");
    assert_eq!(parsed.include, vec!["vegan", "quick", "high-protein"]);
    assert!(parsed.exclude.is_empty());
    assert_eq!(parsed.max_minutes, None);
}

#[test]
fn test_negated_clauses_become_excludes() {
    let parsed = parse_requirements("no nuts, avoid dairy");
    assert!(parsed.include.is_empty());
    assert_eq!(parsed.exclude, vec!["nut-free", "dairy-free"]);
}

#[test]
fn test_duration_clause_sets_bound() {
    let parsed = parse_requirements("max 30, gluten free");
    assert_eq!(parsed.include, vec!["gluten-free"]);
    assert_eq!(parsed.max_minutes, Some(30));
}

#[test]
fn test_last_duration_wins() {
    let parsed = parse_requirements("under 45, <= 20");
    assert_eq!(parsed.max_minutes, Some(20));
    assert!(parsed.include.is_empty());
}

#[test]
fn test_bare_number_is_a_duration() {
    let parsed = parse_requirements("25");
    assert_eq!(parsed.max_minutes, Some(25));
}

#[test]
fn test_long_digit_run_is_not_truncated_to_a_bound() {
    let parsed = parse_requirements("vegan, under 1000");
    assert_eq!(parsed.max_minutes, None);
    assert_eq!(parsed.include, vec!["vegan", "under 1000"]);
}

#[test]
fn test_negated_clause_is_never_a_duration() {
    let parsed = parse_requirements("without 30");
    assert_eq!(parsed.max_minutes, None);
    assert_eq!(parsed.exclude, vec!["30"]);
}

#[test]
fn test_empty_input_is_unconstrained() {
    let parsed = parse_requirements("  , ,");
    assert!(parsed.is_empty());
    assert_eq!(parsed, RequirementSet::default());
}

#[test]
fn test_unknown_tokens_pass_through_and_never_match() {
    let parsed = parse_requirements("Paleo");
    assert_eq!(parsed.include, vec!["paleo"]);
    let recipe = tagged_recipe("a", &[Season::Summer], &["vegan"], Some(10));
    assert!(!parsed.matches(&recipe));
}

#[test]
fn test_unknown_duration_fails_bound() {
    let parsed = parse_requirements("max 30");
    let timed = tagged_recipe("a", &[Season::Summer], &[], Some(30));
    let untimed = tagged_recipe("b", &[Season::Summer], &[], None);
    assert!(parsed.matches(&timed));
    assert!(!parsed.matches(&untimed));
}

#[test]
fn test_normalizer_synonyms() {
    assert_eq!(normalize_tag("Gluten-Free"), "gluten-free");
    assert_eq!(normalize_tag("nut"), "nut-free");
    assert_eq!(normalize_tag("LOW CARB"), "low-carb");
}

#[test]
fn test_chinese_requirements_feed_the_parser() {
    let text = translate_requirements("纯素，无坚果，不超过30", Language::Chinese);
    let parsed = parse_requirements(&text);
    assert_eq!(parsed.include, vec!["vegan"]);
    assert_eq!(parsed.exclude, vec!["nut-free"]);
    assert_eq!(parsed.max_minutes, Some(30));
}
