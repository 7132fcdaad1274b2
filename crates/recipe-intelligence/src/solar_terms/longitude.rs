// ABOUTME: Apparent solar ecliptic longitude from a Julian Day Number
// ABOUTME: Truncated series with equation of center, nutation, and aberration corrections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

const J2000: f64 = 2_451_545.0;
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
const ABERRATION_DEGREES: f64 = 0.00569;

/// Apparent ecliptic longitude of the Sun in degrees, in `[0, 360)`
///
/// Closed form; no iteration.
#[must_use]
#[allow(clippy::suboptimal_flops, clippy::unreadable_literal)] // Evaluated term by term as in the published series
pub fn apparent_solar_longitude(jd: f64) -> f64 {
    let t = (jd - J2000) / DAYS_PER_JULIAN_CENTURY;

    let mean_longitude = 280.46645 + 36000.76983 * t + 0.0003032 * t * t;
    let mean_anomaly = 357.52910 + 35999.05030 * t - 0.0001559 * t * t - 0.00000048 * t * t * t;

    let center = (1.914600 - 0.004817 * t - 0.000014 * t * t) * mean_anomaly.to_radians().sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mean_anomaly).to_radians().sin()
        + 0.000290 * (3.0 * mean_anomaly).to_radians().sin();
    let true_longitude = mean_longitude + center;

    let omega = 125.04 - 1934.136 * t;
    let nutation = -0.004778 * omega.to_radians().sin();

    let mut longitude = (true_longitude + nutation - ABERRATION_DEGREES) % 360.0;
    if longitude < 0.0 {
        longitude += 360.0;
    }
    // A tiny negative remainder rounds up to exactly 360 after the shift
    if longitude >= 360.0 {
        longitude -= 360.0;
    }
    longitude
}
