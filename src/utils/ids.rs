// ABOUTME: Slug and recipe identifier generation
// ABOUTME: Identifiers are a name slug plus six random hex characters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use uuid::Uuid;

/// Slug used when a name has no ASCII letters or digits
const FALLBACK_SLUG: &str = "recipe";

/// Number of hex characters appended to a slug
const ID_SUFFIX_LEN: usize = 6;

/// Lower-case the text and collapse every run of characters outside
/// `[a-z0-9]` into a single `-`, trimming dashes at both ends
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        FALLBACK_SLUG.to_owned()
    } else {
        slug
    }
}

/// New stable identifier for a recipe name, e.g. `tomato-soup-3fa2c1`
#[must_use]
pub fn generate_recipe_id(name: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    let suffix = hex.get(..ID_SUFFIX_LEN).unwrap_or(&hex);
    format!("{}-{suffix}", slugify(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Lemon Herb  Salmon!! "), "lemon-herb-salmon");
        assert_eq!(slugify("Crème brûlée"), "cr-me-br-l-e");
        assert_eq!(slugify("--A__B--"), "a-b");
    }

    #[test]
    fn test_slugify_falls_back_when_empty() {
        assert_eq!(slugify("饺子"), "recipe");
        assert_eq!(slugify(""), "recipe");
    }

    #[test]
    fn test_generated_id_shape() {
        let id = generate_recipe_id("Tomato Soup");
        let (slug, suffix) = id.rsplit_once('-').unwrap();
        assert_eq!(slug, "tomato-soup");
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
