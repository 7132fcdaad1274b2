// ABOUTME: Criterion benchmarks for recommendation ranking and solar term classification
// ABOUTME: Measures filter-and-rank latency over growing catalogs and per-date term lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recommendation hot paths.
//!
//! Catalogs are synthetic: seasons, areas, and tags rotate by index so every
//! filter pass has work to do.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_core::models::{RatingStats, RatingsTable, Recipe, Season};
use recipe_intelligence::{
    parse_requirements, solar_term_for_date, RankingConfig, RecommendationEngine,
};

const SEASONS: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];
const AREAS: [&str; 4] = ["united states", "europe", "japan", "australia"];
const TAGS: [&str; 4] = ["vegan", "vegetarian", "gluten-free", "high-protein"];

#[allow(clippy::cast_possible_truncation)]
fn synthetic_catalog(count: usize) -> (Vec<Recipe>, RatingsTable) {
    let mut ratings = RatingsTable::new();
    let recipes = (0..count)
        .map(|index| {
            let id = format!("bench-recipe-{index}");
            let views = (index * 7 % 50) as u64;
            let rated = (index % 3) as u64;
            ratings.insert(
                id.clone(),
                RatingStats::from_parts(views, rated as f64 * 4.0, rated),
            );
            let mut recipe = Recipe::new(id, format!("Bench Recipe {index}"))
                .with_seasons([SEASONS[index % 4], SEASONS[(index + 1) % 4]])
                .with_country_tags([AREAS[index % 4]])
                .with_dietary_tags([TAGS[index % 4]]);
            recipe.time_minutes = Some(10 + (index * 13 % 80) as u32);
            recipe
        })
        .collect();
    (recipes, ratings)
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let engine = RecommendationEngine::new(RankingConfig::default());
    let requirements = parse_requirements("vegan, max 45");

    for count in [10_usize, 100, 1_000] {
        let (recipes, ratings) = synthetic_catalog(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("filter_and_rank", count),
            &(recipes, ratings),
            |b, (recipes, ratings)| {
                b.iter(|| {
                    engine.recommend(
                        black_box(recipes),
                        black_box(ratings),
                        black_box(Season::Winter),
                        black_box("Tokyo, Japan"),
                        black_box(&requirements),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_parse_requirements(c: &mut Criterion) {
    c.bench_function("parse_requirements", |b| {
        b.iter(|| parse_requirements(black_box("vegan, no nuts, gluten free, under 30, spicy")));
    });
}

fn bench_solar_terms(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let dates: Vec<NaiveDate> = (0..366)
        .map(|offset| start.checked_add_days(Days::new(offset)).unwrap())
        .collect();

    let mut group = c.benchmark_group("solar_terms");
    group.throughput(Throughput::Elements(dates.len() as u64));
    group.bench_function("classify_full_year", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(solar_term_for_date(black_box(*date)));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_recommend,
    bench_parse_requirements,
    bench_solar_terms,
);
criterion_main!(benches);
