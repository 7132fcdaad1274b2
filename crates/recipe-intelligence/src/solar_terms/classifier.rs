// ABOUTME: The 24 solar terms with target longitudes and nearest-term classification
// ABOUTME: Terms are ordered from Beginning of Spring (315 degrees); the order breaks fallback ties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::julian::julian_day_for_date;
use super::longitude::apparent_solar_longitude;
use chrono::NaiveDate;
use recipe_core::models::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half the 15-degree spacing between terms; strictly-less comparison
const CLASSIFICATION_HALF_WIDTH: f64 = 7.5;

/// One of the 24 solar terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarTerm {
    /// 立春, 315°
    BeginningOfSpring,
    /// 雨水, 330°
    RainWater,
    /// 惊蛰, 345°
    AwakeningOfInsects,
    /// 春分, 0°
    SpringEquinox,
    /// 清明, 15°
    PureBrightness,
    /// 谷雨, 30°
    GrainRain,
    /// 立夏, 45°
    BeginningOfSummer,
    /// 小满, 60°
    GrainBuds,
    /// 芒种, 75°
    GrainInEar,
    /// 夏至, 90°
    SummerSolstice,
    /// 小暑, 105°
    MinorHeat,
    /// 大暑, 120°
    MajorHeat,
    /// 立秋, 135°
    BeginningOfAutumn,
    /// 处暑, 150°
    EndOfHeat,
    /// 白露, 165°
    WhiteDew,
    /// 秋分, 180°
    AutumnEquinox,
    /// 寒露, 195°
    ColdDew,
    /// 霜降, 210°
    FrostsDescent,
    /// 立冬, 225°
    BeginningOfWinter,
    /// 小雪, 240°
    MinorSnow,
    /// 大雪, 255°
    MajorSnow,
    /// 冬至, 270°
    WinterSolstice,
    /// 小寒, 285°
    MinorCold,
    /// 大寒, 300°
    MajorCold,
}

impl SolarTerm {
    /// Fixed table order, starting at Beginning of Spring
    pub const ALL: [Self; 24] = [
        Self::BeginningOfSpring,
        Self::RainWater,
        Self::AwakeningOfInsects,
        Self::SpringEquinox,
        Self::PureBrightness,
        Self::GrainRain,
        Self::BeginningOfSummer,
        Self::GrainBuds,
        Self::GrainInEar,
        Self::SummerSolstice,
        Self::MinorHeat,
        Self::MajorHeat,
        Self::BeginningOfAutumn,
        Self::EndOfHeat,
        Self::WhiteDew,
        Self::AutumnEquinox,
        Self::ColdDew,
        Self::FrostsDescent,
        Self::BeginningOfWinter,
        Self::MinorSnow,
        Self::MajorSnow,
        Self::WinterSolstice,
        Self::MinorCold,
        Self::MajorCold,
    ];

    /// Target apparent longitude in whole degrees
    #[must_use]
    pub const fn target_degrees(self) -> u16 {
        match self {
            Self::BeginningOfSpring => 315,
            Self::RainWater => 330,
            Self::AwakeningOfInsects => 345,
            Self::SpringEquinox => 0,
            Self::PureBrightness => 15,
            Self::GrainRain => 30,
            Self::BeginningOfSummer => 45,
            Self::GrainBuds => 60,
            Self::GrainInEar => 75,
            Self::SummerSolstice => 90,
            Self::MinorHeat => 105,
            Self::MajorHeat => 120,
            Self::BeginningOfAutumn => 135,
            Self::EndOfHeat => 150,
            Self::WhiteDew => 165,
            Self::AutumnEquinox => 180,
            Self::ColdDew => 195,
            Self::FrostsDescent => 210,
            Self::BeginningOfWinter => 225,
            Self::MinorSnow => 240,
            Self::MajorSnow => 255,
            Self::WinterSolstice => 270,
            Self::MinorCold => 285,
            Self::MajorCold => 300,
        }
    }

    /// Target apparent longitude in degrees
    #[must_use]
    pub fn target_longitude(self) -> f64 {
        f64::from(self.target_degrees())
    }

    /// Chinese name, also used as the label stored on recipes
    #[must_use]
    pub const fn chinese_name(self) -> &'static str {
        match self {
            Self::BeginningOfSpring => "立春",
            Self::RainWater => "雨水",
            Self::AwakeningOfInsects => "惊蛰",
            Self::SpringEquinox => "春分",
            Self::PureBrightness => "清明",
            Self::GrainRain => "谷雨",
            Self::BeginningOfSummer => "立夏",
            Self::GrainBuds => "小满",
            Self::GrainInEar => "芒种",
            Self::SummerSolstice => "夏至",
            Self::MinorHeat => "小暑",
            Self::MajorHeat => "大暑",
            Self::BeginningOfAutumn => "立秋",
            Self::EndOfHeat => "处暑",
            Self::WhiteDew => "白露",
            Self::AutumnEquinox => "秋分",
            Self::ColdDew => "寒露",
            Self::FrostsDescent => "霜降",
            Self::BeginningOfWinter => "立冬",
            Self::MinorSnow => "小雪",
            Self::MajorSnow => "大雪",
            Self::WinterSolstice => "冬至",
            Self::MinorCold => "小寒",
            Self::MajorCold => "大寒",
        }
    }

    /// English name
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::BeginningOfSpring => "Beginning of Spring",
            Self::RainWater => "Rain Water",
            Self::AwakeningOfInsects => "Awakening of Insects",
            Self::SpringEquinox => "Spring Equinox",
            Self::PureBrightness => "Pure Brightness",
            Self::GrainRain => "Grain Rain",
            Self::BeginningOfSummer => "Beginning of Summer",
            Self::GrainBuds => "Grain Buds",
            Self::GrainInEar => "Grain in Ear",
            Self::SummerSolstice => "Summer Solstice",
            Self::MinorHeat => "Minor Heat",
            Self::MajorHeat => "Major Heat",
            Self::BeginningOfAutumn => "Beginning of Autumn",
            Self::EndOfHeat => "End of Heat",
            Self::WhiteDew => "White Dew",
            Self::AutumnEquinox => "Autumn Equinox",
            Self::ColdDew => "Cold Dew",
            Self::FrostsDescent => "Frost's Descent",
            Self::BeginningOfWinter => "Beginning of Winter",
            Self::MinorSnow => "Minor Snow",
            Self::MajorSnow => "Major Snow",
            Self::WinterSolstice => "Winter Solstice",
            Self::MinorCold => "Minor Cold",
            Self::MajorCold => "Major Cold",
        }
    }

    /// Name in the requested display language
    #[must_use]
    pub const fn name(self, language: Language) -> &'static str {
        match language {
            Language::English => self.english_name(),
            Language::Chinese => self.chinese_name(),
        }
    }

    /// Look a term up by its Chinese label
    #[must_use]
    pub fn from_chinese_name(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|term| term.chinese_name() == label)
    }

    /// Circular distance in degrees between a longitude and this term's target
    #[must_use]
    pub fn distance_from(self, longitude: f64) -> f64 {
        let diff = (longitude - self.target_longitude()).abs();
        diff.min(360.0 - diff)
    }
}

impl fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Classification result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TermMatch {
    /// Winning term
    pub term: SolarTerm,
    /// Circular distance in degrees from the term's target longitude
    pub distance: f64,
    /// Longitude that was classified
    pub longitude: f64,
}

/// Classify an apparent longitude into its solar term
///
/// The first term in table order within 7.5 degrees wins. Otherwise the
/// globally nearest term is used, with table order breaking ties.
#[must_use]
pub fn classify_longitude(longitude: f64) -> TermMatch {
    let within_band = SolarTerm::ALL.into_iter().find_map(|term| {
        let distance = term.distance_from(longitude);
        (distance < CLASSIFICATION_HALF_WIDTH).then_some((term, distance))
    });

    let (term, distance) = within_band.unwrap_or_else(|| nearest_term(longitude));
    TermMatch {
        term,
        distance,
        longitude,
    }
}

fn nearest_term(longitude: f64) -> (SolarTerm, f64) {
    let mut best = (SolarTerm::BeginningOfSpring, f64::INFINITY);
    for term in SolarTerm::ALL {
        let distance = term.distance_from(longitude);
        if distance < best.1 {
            best = (term, distance);
        }
    }
    best
}

/// Nearest solar term to the Sun's position on a calendar date
///
/// This is the term whose target longitude is closest (within half a term),
/// not the term that most recently began.
#[must_use]
pub fn solar_term_for_date(date: NaiveDate) -> TermMatch {
    classify_longitude(apparent_solar_longitude(julian_day_for_date(date)))
}
