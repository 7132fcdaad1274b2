// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Fixed English and Chinese labels for recommendations, feedback, solar terms, and CSV reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::{Language, Recipe};
use recipe_recommender::csv_io::ImportReport;
use recipe_recommender::services::{FeedbackReceipt, RecommendationOutcome, SolarTermReport};

/// User-facing strings for one display language
pub struct Labels {
    pub recipe_id: &'static str,
    pub name: &'static str,
    pub season: &'static str,
    pub time: &'static str,
    pub minutes: &'static str,
    pub ingredients: &'static str,
    pub steps: &'static str,
    pub date: &'static str,
    pub solar_term: &'static str,
    pub recipes: &'static str,
    pub tips: &'static str,
    pub most_popular: &'static str,
    pub rating: &'static str,
    pub no_match: &'static str,
    pub feedback_recorded: &'static str,
    pub saved: &'static str,
    pub dry_run: &'static str,
    pub import_rejected: &'static str,
    pub template_written: &'static str,
}

const ENGLISH: Labels = Labels {
    recipe_id: "Recipe ID",
    name: "Name",
    season: "Season",
    time: "Time",
    minutes: "minutes",
    ingredients: "Ingredients",
    steps: "Steps",
    date: "Date",
    solar_term: "Solar Term",
    recipes: "Recipes",
    tips: "Tips",
    most_popular: "Most Popular Recipe",
    rating: "Rating",
    no_match: "No recipes matched your requirements yet.",
    feedback_recorded: "Feedback recorded.",
    saved: "Recipe saved with ID",
    dry_run: "Dry run enabled: no changes were saved.",
    import_rejected: "Strict mode enabled: import rejected due to validation warnings or skipped rows.",
    template_written: "Wrote CSV template to",
};

const CHINESE: Labels = Labels {
    recipe_id: "菜谱 ID",
    name: "名称",
    season: "季节",
    time: "时间",
    minutes: "分钟",
    ingredients: "食材",
    steps: "步骤",
    date: "日期",
    solar_term: "节气",
    recipes: "推荐食谱",
    tips: "养生注意事项",
    most_popular: "最受欢迎食谱",
    rating: "评分",
    no_match: "没有找到符合条件的菜谱。",
    feedback_recorded: "反馈已记录。",
    saved: "已保存菜谱，ID",
    dry_run: "校验完成，未保存更改。",
    import_rejected: "严格模式：因校验警告而拒绝导入。",
    template_written: "CSV 模板已写入",
};

/// Labels for a display language
pub const fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::Chinese => &CHINESE,
    }
}

fn print_recipe_body(recipe: &Recipe, language: Language, indent: &str) {
    let t = labels(language);
    match recipe.time_minutes {
        Some(minutes) => println!("{indent}{}: {minutes} {}", t.time, t.minutes),
        None => println!("{indent}{}: N/A", t.time),
    }
    println!("{indent}{}:", t.ingredients);
    for item in recipe.display_ingredients(language) {
        println!("{indent}- {item}");
    }
    println!("{indent}{}:", t.steps);
    for (idx, step) in recipe.display_steps(language).iter().enumerate() {
        println!("{indent}{}. {step}", idx + 1);
    }
}

/// Print a recommendation
pub fn display_recommendation(outcome: &RecommendationOutcome, language: Language) {
    let t = labels(language);
    let recipe = &outcome.recipe;
    println!();
    println!("{}: {}", t.recipe_id, recipe.id());
    println!("{}: {}", t.name, recipe.display_name(language));
    println!("{}: {}", t.season, outcome.season.label(language));
    print_recipe_body(recipe, language, "");
}

/// Print the "no recommendation" message
pub fn display_no_match(language: Language) {
    println!("{}", labels(language).no_match);
}

/// Print the feedback confirmation, with a note when the id is not in the catalog
pub fn display_feedback(recipe_id: &str, receipt: &FeedbackReceipt, language: Language) {
    let t = labels(language);
    println!("{}", t.feedback_recorded);
    if let Some(average) = receipt.stats.average() {
        println!(
            "{}: {average:.1}/5 ({}x)",
            t.rating,
            receipt.stats.count()
        );
    }
    if !receipt.recipe_known {
        eprintln!("Warning: recipe ID {recipe_id} is not in the catalog");
    }
}

/// Print the identifier and solar term of a newly added recipe
pub fn display_added_recipe(recipe: &Recipe, language: Language) {
    let t = labels(language);
    println!("{}: {}", t.saved, recipe.id());
    if let Some(term) = recipe.solar_term.as_deref() {
        println!("{}: {term}", t.solar_term);
    }
}

/// Print a solar term report
pub fn display_solar_term(report: &SolarTermReport, language: Language) {
    let t = labels(language);
    let guidance = report.guidance;
    println!("{}: {}", t.date, report.date);
    println!("{}: {}", t.solar_term, report.term().name(language));
    println!("{}: {}", guidance.title, guidance.description);
    println!();
    println!("{}:", t.recipes);
    for item in guidance.recipes {
        println!("- {item}");
    }
    println!();
    println!("{}:", t.tips);
    for item in guidance.tips {
        println!("- {item}");
    }

    if let Some(popular) = &report.popular {
        println!();
        let name = popular.recipe.display_name(language);
        match popular.average {
            Some(average) => println!("* {}: {name} ({}: {average:.1}/5)", t.most_popular, t.rating),
            None => println!("* {}: {name}", t.most_popular),
        }
        print_recipe_body(&popular.recipe, language, "   ");
    }
}

/// Print an import summary and its warnings
pub fn display_import_report(report: &ImportReport) {
    println!("{report}");
    if !report.warnings.is_empty() {
        println!("Validation warnings:");
        for warning in &report.warnings {
            println!("- {warning}");
        }
    }
}
