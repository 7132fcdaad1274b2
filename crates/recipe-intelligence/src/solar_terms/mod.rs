// ABOUTME: Solar term calculator built from Julian day conversion and apparent solar longitude
// ABOUTME: Classifies a calendar date into one of the 24 traditional 15-degree solar terms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Solar Term Calculator
//!
//! `date -> julian_day -> apparent_solar_longitude -> classify_longitude`.
//! The series is a low-order truncation, accurate to well under a degree over
//! the 1900-2100 range, which is enough for 15-degree bands.

/// Gregorian date to Julian Day Number
pub mod julian;

/// Apparent ecliptic longitude of the Sun
pub mod longitude;

/// The 24-term table and nearest-term classification
pub mod classifier;

/// Bilingual seasonal guidance per term
pub mod guidance;

pub use classifier::{classify_longitude, solar_term_for_date, SolarTerm, TermMatch};
pub use guidance::{guidance_for, TermGuidance};
pub use julian::{julian_day, julian_day_for_date};
pub use longitude::apparent_solar_longitude;
