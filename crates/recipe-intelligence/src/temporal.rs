// ABOUTME: Temporal context resolver mapping area text to hemisphere and dates to seasons
// ABOUTME: Month-based three-month bucketing, rotated by two seasons south of the equator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use recipe_core::models::{Hemisphere, Season};

/// Countries and regions whose mention places the user in the southern hemisphere
const SOUTHERN_KEYWORDS: [&str; 16] = [
    "australia",
    "new zealand",
    "south africa",
    "argentina",
    "chile",
    "uruguay",
    "paraguay",
    "bolivia",
    "peru",
    "brazil",
    "namibia",
    "botswana",
    "zimbabwe",
    "mozambique",
    "madagascar",
    "fiji",
];

/// Resolve the hemisphere from free-text area input
///
/// Matching is substring-based on the case-folded input, so
/// `"Melbourne, Australia"` resolves south. Empty or unrecognized input is north.
#[must_use]
pub fn determine_hemisphere(area: &str) -> Hemisphere {
    let folded = area.trim().to_lowercase();
    if folded.is_empty() {
        return Hemisphere::North;
    }
    if SOUTHERN_KEYWORDS
        .iter()
        .any(|keyword| folded.contains(keyword))
    {
        Hemisphere::South
    } else {
        Hemisphere::North
    }
}

/// Season for a calendar month (1-12); values are taken modulo 12
#[must_use]
pub const fn season_for_month(month: u32, hemisphere: Hemisphere) -> Season {
    let northern = match month % 12 {
        0..=2 => Season::Winter,
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        _ => Season::Autumn,
    };
    match hemisphere {
        Hemisphere::North => northern,
        Hemisphere::South => match northern {
            Season::Winter => Season::Summer,
            Season::Spring => Season::Autumn,
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
        },
    }
}

/// Season for a date; only the month matters
#[must_use]
pub fn determine_season(date: NaiveDate, hemisphere: Hemisphere) -> Season {
    season_for_month(date.month(), hemisphere)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_hemisphere_resolution() {
        assert_eq!(determine_hemisphere(""), Hemisphere::North);
        assert_eq!(
            determine_hemisphere("Melbourne, Australia"),
            Hemisphere::South
        );
        assert_eq!(determine_hemisphere("CAPE TOWN SOUTH AFRICA"), Hemisphere::South);
        assert_eq!(determine_hemisphere("Canada"), Hemisphere::North);
    }

    #[test]
    fn test_northern_buckets() {
        assert_eq!(season_for_month(12, Hemisphere::North), Season::Winter);
        assert_eq!(season_for_month(1, Hemisphere::North), Season::Winter);
        assert_eq!(season_for_month(4, Hemisphere::North), Season::Spring);
        assert_eq!(season_for_month(7, Hemisphere::North), Season::Summer);
        assert_eq!(season_for_month(11, Hemisphere::North), Season::Autumn);
    }

    #[test]
    fn test_southern_rotation() {
        assert_eq!(season_for_month(1, Hemisphere::South), Season::Summer);
        assert_eq!(season_for_month(4, Hemisphere::South), Season::Autumn);
        assert_eq!(season_for_month(7, Hemisphere::South), Season::Winter);
        assert_eq!(season_for_month(10, Hemisphere::South), Season::Spring);
    }

    #[test]
    fn test_months_partition_into_four_groups_of_three() {
        for hemisphere in [Hemisphere::North, Hemisphere::South] {
            let mut counts: HashMap<Season, u32> = HashMap::new();
            for month in 1..=12 {
                *counts.entry(season_for_month(month, hemisphere)).or_default() += 1;
                assert_eq!(
                    season_for_month(month, hemisphere),
                    season_for_month(month + 12, hemisphere)
                );
            }
            assert_eq!(counts.len(), 4);
            assert!(counts.values().all(|count| *count == 3));
        }
    }

    #[test]
    fn test_day_and_year_are_irrelevant() {
        let early = NaiveDate::from_ymd_opt(1999, 6, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2031, 6, 30).unwrap();
        assert_eq!(
            determine_season(early, Hemisphere::North),
            determine_season(late, Hemisphere::North)
        );
    }
}
