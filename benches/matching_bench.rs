// ABOUTME: Criterion benchmarks for recipe matching and caption extraction
// ABOUTME: Measures filter latency over generated catalogs and tokenization of captions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Criterion benchmarks for the matching engine.
//!
//! Catalogs are generated deterministically so runs are comparable.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipes_core::{
    extract_ingredients, filter_recipes, Diet, Difficulty, FilterSelection, Nutrition, Recipe,
    RecipeData, UserIngredients,
};

const PANTRY: [&str; 12] = [
    "chicken", "rice", "tomato", "onion", "garlic", "tofu", "butter", "milk", "cheese", "pasta",
    "salmon", "spinach",
];

/// Build `count` recipes cycling through pantry items, diets and difficulties
fn generate_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| Recipe {
            name: format!("Recipe {i}"),
            ingredients: (0..3)
                .map(|k| PANTRY[(i + k * 5) % PANTRY.len()].to_owned())
                .collect(),
            diet: Diet::ALL[i % Diet::ALL.len()],
            time: 10 + (i as u32 % 6) * 10,
            difficulty: Difficulty::ALL[i % Difficulty::ALL.len()],
            nutrition: Nutrition {
                calories: 300 + i as u32 % 400,
                protein: format!("{}g", 10 + i % 30),
            },
            steps: vec!["Prepare".to_owned(), "Cook".to_owned()],
        })
        .collect()
}

fn user_ingredients(entries: &[&str]) -> UserIngredients {
    let mut ingredients = UserIngredients::new();
    for entry in entries {
        ingredients.add(entry);
    }
    ingredients
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_recipes");
    let ingredients = user_ingredients(&["tomato", "garlic"]);
    let selection = FilterSelection::parse("vegetarian", "30", "easy");

    for size in [10_usize, 100, 1_000] {
        let recipes = generate_recipes(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("any", size), &recipes, |b, recipes| {
            b.iter(|| {
                filter_recipes(
                    black_box(recipes),
                    black_box(&ingredients),
                    &FilterSelection::any(),
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("restricted", size), &recipes, |b, recipes| {
            b.iter(|| filter_recipes(black_box(recipes), black_box(&ingredients), &selection));
        });
    }

    group.finish();
}

fn bench_builtin_catalog(c: &mut Criterion) {
    let data = RecipeData::builtin().expect("builtin recipe data");
    let ingredients = user_ingredients(&["chicken", "rice", "milk"]);

    c.bench_function("builtin_catalog_filter", |b| {
        b.iter(|| {
            data.catalog()
                .filter(black_box(&ingredients), &FilterSelection::any())
                .len()
        });
    });
}

fn bench_extract(c: &mut Criterion) {
    let data = RecipeData::builtin().expect("builtin recipe data");
    let vocabulary = data.vocabulary();
    let mut group = c.benchmark_group("extract_ingredients");

    let captions = [
        ("short", "a bowl of rice".to_owned()),
        (
            "typical",
            "a plate of chicken, rice and tomato with garlic on a wooden table".to_owned(),
        ),
        (
            "long",
            "a kitchen counter with onion garlic tomato cheese milk butter pasta and a knife "
                .repeat(20),
        ),
    ];

    for (label, caption) in &captions {
        group.throughput(Throughput::Bytes(caption.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), caption, |b, caption| {
            b.iter(|| extract_ingredients(black_box(caption), vocabulary));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_builtin_catalog, bench_extract);
criterion_main!(benches);
