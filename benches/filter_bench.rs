//! Filter pipeline benchmarks.
//!
//! The filtered view is recomputed from the store on every render, so the
//! filter has to stay cheap even for collections far larger than a real
//! aggregation returns.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `filter/text` | Case-insensitive substring scan at each store size |
//! | `filter/facets` | Category + area membership checks |
//! | `browser/visible` | Full view + truncation to the revealed page |
//! | `aggregate/merge` | De-duplicating merge of per-term batches |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench filter_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealdeck::{Browser, Filter, Recipe, RecipeStore};
use mealdeck_core::{pager::PAGE_SIZE, search, Ingredient};
use mealdeck_feeds::aggregate::merge_unique;
use std::hint::black_box;
use std::time::Duration;

const SIZES: [usize; 3] = [100, 1_000, 10_000];
const CATEGORIES: [&str; 6] = ["Beef", "Chicken", "Dessert", "Pasta", "Seafood", "Vegetarian"];
const AREAS: [&str; 5] = ["British", "Italian", "Japanese", "Jamaican", "Mexican"];

fn collection(n: usize) -> Vec<Recipe> {
    (0..n)
        .map(|i| Recipe {
            id: i.to_string(),
            name: format!("{} dish number {i}", CATEGORIES[i % CATEGORIES.len()]),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            area: AREAS[i % AREAS.len()].to_string(),
            instructions: "Chop, season and cook until done. Rest before serving.".repeat(4),
            thumbnail: String::new(),
            video: None,
            ingredients: vec![Ingredient::new("Salt", "pinch"), Ingredient::new("Oil", "1 tbsp")],
        })
        .collect()
}

fn text_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/text");
    for size in SIZES {
        let recipes = collection(size);
        group.throughput(Throughput::Elements(size as u64));
        for needle in ["pasta", "serving", "zzz"] {
            let filter = Filter::new().with_text(needle);
            group.bench_with_input(BenchmarkId::new(needle, size), &recipes, |b, recipes| {
                b.iter(|| black_box(search::filter(recipes, &filter).len()))
            });
        }
    }
    group.finish();
}

fn facet_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/facets");
    let filter = Filter::new()
        .with_categories(["Beef", "Pasta"])
        .with_areas(["Italian", "British"]);
    for size in SIZES {
        let recipes = collection(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &recipes, |b, recipes| {
            b.iter(|| black_box(search::filter(recipes, &filter).len()))
        });
    }
    group.finish();
}

fn visible_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("browser/visible");
    for size in SIZES {
        let store = RecipeStore::with_recipes(collection(size));
        let mut browser = Browser::with_page_size(PAGE_SIZE, Duration::from_millis(500));
        browser.set_text("dish", &store);
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(browser.visible(store).len()))
        });
    }
    group.finish();
}

fn merge_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate/merge");
    // Six terms, each overlapping its neighbour by half.
    let batches: Vec<Vec<Recipe>> = (0..6)
        .map(|t| {
            let mut batch = collection(50 * (t + 2));
            batch.drain(..50 * t);
            batch
        })
        .collect();
    group.bench_function("six_overlapping_terms", |b| {
        b.iter(|| black_box(merge_unique(batches.clone()).len()))
    });
    group.finish();
}

criterion_group!(benches, text_bench, facet_bench, visible_bench, merge_bench);
criterion_main!(benches);
