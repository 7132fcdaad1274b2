// ABOUTME: Julian Day Number conversion for proleptic Gregorian calendar dates
// ABOUTME: Uses the standard century correction with a -1524.5 offset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};

/// Julian Day Number for a Gregorian `(year, month, day)`
///
/// January and February count as months 13 and 14 of the previous year.
/// The caller guarantees a valid calendar date; nothing is rejected here.
#[must_use]
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (year, month) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = year.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    (365.25 * f64::from(year + 4716)).floor()
        + (30.6001 * f64::from(month + 1)).floor()
        + f64::from(day)
        + f64::from(b)
        - 1524.5
}

/// Julian Day Number for a parsed date
#[must_use]
pub fn julian_day_for_date(date: NaiveDate) -> f64 {
    julian_day(date.year(), date.month(), date.day())
}
