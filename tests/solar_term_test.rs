// ABOUTME: Integration tests for solar term classification across whole years
// ABOUTME: Checks term succession, guidance lookup, and bilingual term names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Days, NaiveDate};
use common::date;
use recipe_core::models::Language;
use recipe_intelligence::solar_terms::guidance_for;
use recipe_intelligence::{classify_longitude, solar_term_for_date, SolarTerm};
use std::collections::HashSet;

fn position(term: SolarTerm) -> usize {
    SolarTerm::ALL.iter().position(|t| *t == term).unwrap()
}

fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    let start = date(year, 1, 1);
    let end = date(year, 12, 31);
    start.iter_days().take_while(move |day| *day <= end)
}

#[test]
fn test_terms_advance_in_table_order_through_a_year() {
    let mut previous = solar_term_for_date(date(2024, 1, 1)).term;
    let mut seen = HashSet::from([previous]);
    for day in days_of_year(2024) {
        let term = solar_term_for_date(day).term;
        if term != previous {
            assert_eq!(
                position(term),
                (position(previous) + 1) % 24,
                "{day}: {previous:?} -> {term:?}"
            );
            previous = term;
        }
        seen.insert(term);
    }
    assert_eq!(seen.len(), 24);
}

#[test]
fn test_each_term_lasts_about_fifteen_days() {
    let mut run_lengths = Vec::new();
    let mut current = solar_term_for_date(date(2023, 1, 1)).term;
    let mut length = 0_u32;
    for day in days_of_year(2023) {
        let term = solar_term_for_date(day).term;
        if term == current {
            length += 1;
        } else {
            run_lengths.push(length);
            current = term;
            length = 1;
        }
    }
    // Drop the partial runs at either end of the year
    for length in &run_lengths[1..] {
        assert!((13..=17).contains(length), "run of {length} days");
    }
}

#[test]
fn test_well_known_dates() {
    let cases = [
        (date(2024, 1, 6), SolarTerm::MinorCold),
        (date(2024, 4, 4), SolarTerm::PureBrightness),
        (date(2024, 5, 5), SolarTerm::BeginningOfSummer),
        (date(2024, 8, 7), SolarTerm::BeginningOfAutumn),
        (date(2024, 9, 22), SolarTerm::AutumnEquinox),
        (date(2024, 11, 7), SolarTerm::BeginningOfWinter),
        (date(2000, 12, 21), SolarTerm::WinterSolstice),
    ];
    for (day, expected) in cases {
        assert_eq!(solar_term_for_date(day).term, expected, "{day}");
    }
}

#[test]
fn test_distance_is_within_half_a_term() {
    let start = date(1950, 1, 1);
    for offset in (0..365 * 150).step_by(37) {
        let day = start.checked_add_days(Days::new(offset)).unwrap();
        let found = solar_term_for_date(day);
        assert!(found.distance <= 7.5, "{day}: {}", found.distance);
        assert!((0.0..360.0).contains(&found.longitude));
    }
}

#[test]
fn test_classifier_bands_cover_the_circle() {
    let mut longitude = 0.0;
    while longitude < 360.0 {
        let found = classify_longitude(longitude);
        assert!(found.distance <= 7.5);
        longitude += 0.25;
    }
}

#[test]
fn test_guidance_and_names_are_bilingual() {
    for term in SolarTerm::ALL {
        assert!(!term.english_name().is_empty());
        assert_eq!(term.name(Language::Chinese), term.chinese_name());
        assert_eq!(SolarTerm::from_chinese_name(term.chinese_name()), Some(term));

        let english = guidance_for(term, Language::English);
        assert!(!english.title.is_empty());
        assert!(english.recipes.iter().all(|line| !line.is_empty()));

        let chinese = guidance_for(term, Language::Chinese);
        assert!(chinese.tips.iter().all(|line| !line.is_empty()));
    }
}
