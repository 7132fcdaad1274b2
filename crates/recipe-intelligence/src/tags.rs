// ABOUTME: Tag normalizer mapping free-text dietary synonyms to canonical tags
// ABOUTME: Unknown tokens pass through case-folded so they simply never match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::tags;

/// Ordered synonym table: free-text token to canonical tag
static SYNONYMS: &[(&str, &str)] = &[
    ("gluten free", tags::GLUTEN_FREE),
    ("gluten-free", tags::GLUTEN_FREE),
    ("vegetarian", tags::VEGETARIAN),
    ("vegan", tags::VEGAN),
    ("quick", tags::QUICK),
    ("low carb", tags::LOW_CARB),
    ("low-carb", tags::LOW_CARB),
    ("high protein", tags::HIGH_PROTEIN),
    ("high-protein", tags::HIGH_PROTEIN),
    ("dairy free", tags::DAIRY_FREE),
    ("dairy-free", tags::DAIRY_FREE),
    ("dairy", tags::DAIRY_FREE),
    ("nut free", tags::NUT_FREE),
    ("nut-free", tags::NUT_FREE),
    ("nut", tags::NUT_FREE),
    ("nuts", tags::NUT_FREE),
    ("spicy", tags::SPICY),
];

/// Normalize a free-text tag token to its canonical form
///
/// The token is trimmed and lower-cased before lookup. Tokens without a known
/// synonym are returned case-folded.
#[must_use]
pub fn normalize_tag(token: &str) -> String {
    let folded = token.trim().to_lowercase();
    SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == folded)
        .map_or(folded, |(_, canonical)| (*canonical).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_resolve_to_canonical() {
        assert_eq!(normalize_tag("Gluten Free"), "gluten-free");
        assert_eq!(normalize_tag(" nuts "), "nut-free");
        assert_eq!(normalize_tag("dairy"), "dairy-free");
        assert_eq!(normalize_tag("high protein"), "high-protein");
    }

    #[test]
    fn test_unknown_token_passes_through_folded() {
        assert_eq!(normalize_tag("Paleo"), "paleo");
        assert_eq!(normalize_tag(""), "");
    }

    #[test]
    fn test_canonical_forms_are_fixed_points() {
        for (_, canonical) in SYNONYMS {
            assert_eq!(normalize_tag(canonical), *canonical);
        }
    }
}
