// ABOUTME: Fixed Chinese-to-English translation of user input before parsing
// ABOUTME: Requirement phrases, duration bounds, season words, and dietary tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Chinese input pre-translation
//!
//! Only applied when the display language is Chinese. Output feeds the
//! ordinary English requirement parser and season/tag parsing.

use recipe_core::models::Language;
use regex::Regex;
use std::sync::LazyLock;

/// Requirement phrases, rewritten into parser vocabulary
const REQUIREMENT_PHRASES: [(&str, &str); 11] = [
    ("纯素", "vegan"),
    ("素食", "vegetarian"),
    ("无麸质", "gluten free"),
    ("无乳制品", "no dairy"),
    ("无奶", "no dairy"),
    ("无坚果", "no nuts"),
    ("避免坚果", "no nuts"),
    ("低碳", "low carb"),
    ("高蛋白", "high protein"),
    ("辣", "spicy"),
    ("快速", "quick"),
];

/// Dietary tag words, rewritten into canonical tags
const TAG_WORDS: [(&str, &str); 10] = [
    ("纯素", "vegan"),
    ("素食", "vegetarian"),
    ("无麸质", "gluten-free"),
    ("无乳制品", "dairy-free"),
    ("无奶", "dairy-free"),
    ("无坚果", "nut-free"),
    ("低碳", "low-carb"),
    ("高蛋白", "high-protein"),
    ("辣", "spicy"),
    ("快速", "quick"),
];

/// Season words; two-character forms come first so 春季 never becomes "spring季"
const SEASON_WORDS: [(&str, &str); 8] = [
    ("春季", "spring"),
    ("夏季", "summer"),
    ("秋季", "autumn"),
    ("冬季", "winter"),
    ("春", "spring"),
    ("夏", "summer"),
    ("秋", "autumn"),
    ("冬", "winter"),
];

/// Chinese duration bounds, stored as Option to handle compilation failure gracefully
static CHINESE_DURATION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 不超过30, 最多 45, 少于20, <=15
    Regex::new(r"(?:不超过|最多|少于|少於|<=|<)\s*(\d{1,3})").ok()
});

fn replace_all(text: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(text.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Rewrite Chinese requirement text into parser vocabulary
///
/// `纯素，不超过30` becomes `vegan, max 30`. Full-width commas are
/// treated as clause separators. English input is returned unchanged.
#[must_use]
pub fn translate_requirements(text: &str, language: Language) -> String {
    if language != Language::Chinese || text.is_empty() {
        return text.to_owned();
    }
    let normalized = replace_all(&text.replace('，', ","), &REQUIREMENT_PHRASES);
    match CHINESE_DURATION_PATTERN.as_ref() {
        Some(pattern) => pattern
            .replace_all(&normalized, "max $1")
            .into_owned(),
        None => normalized,
    }
}

/// Rewrite Chinese season words into English season names
#[must_use]
pub fn normalize_seasons(text: &str, language: Language) -> String {
    if language != Language::Chinese {
        return text.to_owned();
    }
    replace_all(&text.replace('，', ","), &SEASON_WORDS)
}

/// Rewrite Chinese dietary tag words into canonical tags
#[must_use]
pub fn normalize_tags(text: &str, language: Language) -> String {
    if language != Language::Chinese {
        return text.to_owned();
    }
    replace_all(&text.replace('，', ","), &TAG_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_intelligence::parse_requirements;

    #[test]
    fn test_requirements_translate_to_parser_vocabulary() {
        let text = translate_requirements("纯素, 无坚果, 不超过 30", Language::Chinese);
        assert_eq!(text, "vegan, no nuts, max 30");
        let parsed = parse_requirements(&text);
        assert_eq!(parsed.include, vec!["vegan"]);
        assert_eq!(parsed.exclude, vec!["nut-free"]);
        assert_eq!(parsed.max_minutes, Some(30));
    }

    #[test]
    fn test_full_width_comma_separates_clauses() {
        let text = translate_requirements("高蛋白，最多20", Language::Chinese);
        assert_eq!(text, "high protein,max 20");
    }

    #[test]
    fn test_english_input_is_untouched() {
        assert_eq!(translate_requirements("纯素", Language::English), "纯素");
        assert_eq!(normalize_seasons("春", Language::English), "春");
    }

    #[test]
    fn test_season_words() {
        assert_eq!(normalize_seasons("春季, 冬", Language::Chinese), "spring, winter");
    }

    #[test]
    fn test_tag_words() {
        assert_eq!(normalize_tags("无麸质, 辣", Language::Chinese), "gluten-free, spicy");
    }
}
