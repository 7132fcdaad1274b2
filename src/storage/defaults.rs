// ABOUTME: Seeded recipe catalog used before any recipe file has been written
// ABOUTME: Eight recipes spanning all four seasons with area and dietary tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::tags::{GLUTEN_FREE, QUICK, VEGAN, VEGETARIAN};
use recipe_core::models::{Recipe, Season};

/// The default catalog, in its canonical order
#[must_use]
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("lemon-herb-salmon-5c8a1f", "Lemon Herb Salmon with Asparagus")
            .with_country_tags(["united states", "canada", "europe"])
            .with_seasons([Season::Spring, Season::Summer])
            .with_ingredients([
                "salmon fillets",
                "asparagus",
                "lemon",
                "olive oil",
                "garlic",
                "parsley",
                "salt",
                "pepper",
            ])
            .with_steps([
                "Preheat oven to 400F.",
                "Toss asparagus with olive oil, salt, and pepper on a sheet pan.",
                "Place salmon alongside asparagus, top with garlic, lemon, and parsley.",
                "Roast 12 to 15 minutes until salmon flakes easily.",
            ])
            .with_time_minutes(20)
            .with_dietary_tags([GLUTEN_FREE, QUICK]),
        Recipe::new("mushroom-barley-stew-5b1a72", "Mushroom Barley Stew")
            .with_country_tags(["united states", "europe"])
            .with_seasons([Season::Autumn, Season::Winter])
            .with_ingredients([
                "cremini mushrooms",
                "carrots",
                "celery",
                "onion",
                "garlic",
                "pearl barley",
                "vegetable broth",
                "thyme",
                "bay leaf",
            ])
            .with_steps([
                "Saute onion, carrot, celery, and garlic until soft.",
                "Add mushrooms and cook until browned.",
                "Stir in barley, broth, thyme, and bay leaf.",
                "Simmer 35 to 45 minutes until barley is tender.",
            ])
            .with_time_minutes(50)
            .with_dietary_tags([VEGETARIAN]),
        Recipe::new("chilled-cucumber-noodle-bowl-2ac9e0", "Chilled Cucumber Noodle Bowl")
            .with_country_tags(["japan", "korea", "europe"])
            .with_seasons([Season::Summer])
            .with_ingredients([
                "cucumber noodles",
                "rice vinegar",
                "sesame oil",
                "soy sauce",
                "ginger",
                "scallions",
                "sesame seeds",
            ])
            .with_steps([
                "Whisk vinegar, sesame oil, soy sauce, and ginger.",
                "Toss cucumber noodles in dressing.",
                "Top with scallions and sesame seeds, chill 10 minutes.",
            ])
            .with_time_minutes(15)
            .with_dietary_tags([VEGAN, QUICK]),
        Recipe::new("pumpkin-sage-risotto-9b2e4d", "Pumpkin Sage Risotto")
            .with_country_tags(["italy", "europe"])
            .with_seasons([Season::Autumn])
            .with_ingredients([
                "arborio rice",
                "pumpkin puree",
                "vegetable broth",
                "onion",
                "garlic",
                "sage",
                "parmesan",
                "butter",
            ])
            .with_steps([
                "Saute onion and garlic in butter.",
                "Stir in rice until lightly toasted.",
                "Add broth gradually, stirring until absorbed.",
                "Mix in pumpkin and sage, finish with parmesan.",
            ])
            .with_time_minutes(40)
            .with_dietary_tags([VEGETARIAN]),
        Recipe::new("tomato-basil-pasta-41f8b2", "Tomato Basil Pasta")
            .with_country_tags(["italy", "europe", "united states"])
            .with_seasons([Season::Summer])
            .with_ingredients([
                "pasta",
                "cherry tomatoes",
                "basil",
                "garlic",
                "olive oil",
                "parmesan",
            ])
            .with_steps([
                "Cook pasta until al dente.",
                "Saute garlic and tomatoes in olive oil.",
                "Toss pasta with tomatoes and basil, top with parmesan.",
            ])
            .with_time_minutes(25)
            .with_dietary_tags([VEGETARIAN, QUICK]),
        Recipe::new("spiced-lentil-curry-0d31aa", "Spiced Lentil Curry")
            .with_country_tags(["india", "south asia"])
            .with_seasons([Season::Autumn, Season::Winter])
            .with_ingredients([
                "red lentils",
                "onion",
                "garlic",
                "ginger",
                "tomato",
                "curry powder",
                "coconut milk",
                "spinach",
            ])
            .with_steps([
                "Saute onion, garlic, and ginger.",
                "Add lentils, tomato, curry powder, and water.",
                "Simmer until lentils are tender, stir in coconut milk and spinach.",
            ])
            .with_time_minutes(35)
            .with_dietary_tags([VEGAN, GLUTEN_FREE]),
        Recipe::new("spring-berry-yogurt-parfait-2b8c6e", "Spring Berry Yogurt Parfait")
            .with_country_tags(["united states", "europe"])
            .with_seasons([Season::Spring])
            .with_ingredients([
                "greek yogurt",
                "strawberries",
                "blueberries",
                "granola",
                "honey",
                "lemon zest",
            ])
            .with_steps([
                "Layer yogurt, berries, and granola in a glass.",
                "Drizzle honey and add lemon zest before serving.",
            ])
            .with_time_minutes(10)
            .with_dietary_tags([VEGETARIAN, QUICK]),
        Recipe::new("roasted-root-vegetable-traybake-3a7d12", "Roasted Root Vegetable Traybake")
            .with_country_tags(["united states", "europe"])
            .with_seasons([Season::Winter, Season::Autumn])
            .with_ingredients([
                "carrots",
                "parsnips",
                "sweet potatoes",
                "red onion",
                "olive oil",
                "rosemary",
                "salt",
                "pepper",
            ])
            .with_steps([
                "Preheat oven to 425F.",
                "Toss vegetables with olive oil, rosemary, salt, and pepper.",
                "Roast 30 to 35 minutes until caramelized.",
            ])
            .with_time_minutes(40)
            .with_dietary_tags([VEGAN, GLUTEN_FREE]),
    ]
}
