#![allow(unused)]
//! Filter and pagination integration harness.
//!
//! # What this covers
//!
//! - **Filter correctness** on the two-recipe reference collection.
//! - **Property: the view is an ordered subsequence** of the collection, and
//!   every member satisfies the filter.
//! - **Reveal cursor**: K never exceeds the view, grows one page per fired
//!   reveal, and only resets when the filter or the collection changes.
//! - **Stale reveals**: a reveal scheduled before the view changed is dropped.
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;
use mealdeck::{Browser, Filter, RecipeStore};
use mealdeck_core::pager::{RevealOutcome, PAGE_SIZE};
use mealdeck_core::search;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(500);

fn reference() -> Vec<mealdeck::Recipe> {
    vec![
        recipe("1", "Pasta Bake", "Pasta", "Italian"),
        recipe("2", "Beef Stew", "Beef", "British"),
    ]
}

fn browser(store: &RecipeStore) -> Browser {
    let mut b = Browser::with_page_size(PAGE_SIZE, DELAY);
    b.sync(store);
    b
}

// ---------------------------------------------------------------------------
// Filter correctness
// ---------------------------------------------------------------------------

#[rstest]
#[case::text(Filter::new().with_text("pasta"), &["1"])]
#[case::text_mixed_case(Filter::new().with_text("BeEf"), &["2"])]
#[case::category(Filter::new().with_categories(["Beef"]), &["2"])]
#[case::area(Filter::new().with_areas(["Italian"]), &["1"])]
#[case::no_match(Filter::new().with_text("xyz"), &[])]
#[case::blank_text(Filter::new().with_text("   "), &["1", "2"])]
#[case::combined(Filter::new().with_text("stew").with_categories(["Pasta"]), &[])]
#[case::either_category(Filter::new().with_categories(["Beef", "Pasta"]), &["1", "2"])]
fn reference_collection(#[case] filter: Filter, #[case] expected: &[&str]) {
    let recipes = reference();
    let view = search::filter(&recipes, &filter);
    assert_eq!(ids(view.iter().copied()), expected.to_vec());
}

#[test]
fn browser_view_follows_store_mutations() {
    let mut store = RecipeStore::with_recipes(reference());
    let mut b = browser(&store);
    b.set_text("pasta", &store);
    assert_ids!(b.view(&store), ["1"]);

    store
        .create(draft("Pasta Primavera", "Pasta"), "placeholder")
        .unwrap();
    // No cache: the new record shows up on the very next read.
    assert_eq!(b.found(&store), 2);
    assert_eq!(b.view(&store)[0].name, "Pasta Primavera");
}

proptest! {
    #[test]
    fn prop_view_is_ordered_matching_subsequence(
        names in proptest::collection::vec("[a-c]{1,4}", 0..40),
        needle in "[a-c]{0,2}",
    ) {
        let recipes: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, n)| recipe(&i.to_string(), n, "", ""))
            .collect();
        let filter = Filter::new().with_text(needle.clone());
        let view = search::filter(&recipes, &filter);

        let mut last = None;
        for r in &view {
            prop_assert!(r.name.contains(needle.as_str()));
            let idx: usize = r.id.parse().unwrap();
            prop_assert!(last.map_or(true, |l| idx > l));
            last = Some(idx);
        }
        let expected = recipes.iter().filter(|r| r.name.contains(needle.as_str())).count();
        prop_assert_eq!(view.len(), expected);
    }
}

// ---------------------------------------------------------------------------
// Reveal cursor
// ---------------------------------------------------------------------------

#[test]
fn first_page_is_twelve() {
    let store = RecipeStore::with_recipes(dishes(30));
    let b = browser(&store);
    assert_eq!(b.revealed(&store), 12);
    assert_eq!(b.visible(&store).len(), 12);
    assert!(b.has_more(&store));
}

#[test]
fn small_views_reveal_everything() {
    let store = RecipeStore::with_recipes(dishes(5));
    let b = browser(&store);
    assert_eq!(b.revealed(&store), 5);
    assert!(!b.has_more(&store));
}

#[test]
fn load_more_is_deferred_then_grows_by_a_page() {
    let store = RecipeStore::with_recipes(dishes(30));
    let mut b = browser(&store);
    let t0 = Instant::now();

    assert!(b.load_more(t0, &store));
    assert!(b.is_loading_more());
    // A second request while one is pending is ignored.
    assert!(!b.load_more(t0, &store));
    assert_eq!(b.tick(t0 + DELAY / 2, &store), RevealOutcome::Idle);
    assert_eq!(b.revealed(&store), 12);

    assert_eq!(b.tick(t0 + DELAY, &store), RevealOutcome::Revealed { revealed: 24 });
    assert!(b.load_more(t0 + DELAY, &store));
    assert_eq!(b.tick(t0 + DELAY * 2, &store), RevealOutcome::Revealed { revealed: 30 });
    assert!(!b.has_more(&store));
    assert!(!b.load_more(t0 + DELAY * 2, &store));
}

#[test]
fn reveal_scheduled_before_filter_change_is_dropped() {
    let store = RecipeStore::with_recipes(dishes(30));
    let mut b = browser(&store);
    let t0 = Instant::now();

    b.load_more(t0, &store);
    b.set_text("dish 1", &store);
    let found = b.found(&store);
    assert_eq!(b.revealed(&store), found.min(12));

    assert_eq!(b.tick(t0 + DELAY, &store), RevealOutcome::Stale);
    assert_eq!(b.revealed(&store), found.min(12));
}

#[test]
fn reveal_scheduled_before_store_change_is_dropped() {
    let mut store = RecipeStore::with_recipes(dishes(30));
    let mut b = browser(&store);
    let t0 = Instant::now();

    b.load_more(t0, &store);
    store.replace_all(dishes(40));
    assert_eq!(b.tick(t0 + DELAY, &store), RevealOutcome::Stale);
    assert_eq!(b.revealed(&store), 12);
}

#[test]
fn setting_the_same_filter_keeps_k() {
    let store = RecipeStore::with_recipes(dishes(30));
    let mut b = browser(&store);
    let t0 = Instant::now();
    b.set_text("dish", &store);
    b.load_more(t0, &store);
    b.tick(t0 + DELAY, &store);
    assert_eq!(b.revealed(&store), 24);

    b.set_text("dish", &store);
    b.set_categories(Vec::<String>::new(), &store);
    assert_eq!(b.revealed(&store), 24);
}

proptest! {
    /// K stays within the view and never shrinks between resets.
    #[test]
    fn prop_k_bounded_and_monotonic(n in 0usize..80, steps in 0usize..10) {
        let store = RecipeStore::with_recipes(dishes(n));
        let mut b = browser(&store);
        let mut now = Instant::now();
        let mut last = b.revealed(&store);
        prop_assert_eq!(last, n.min(PAGE_SIZE));
        for _ in 0..steps {
            b.load_more(now, &store);
            now += DELAY;
            b.tick(now, &store);
            let k = b.revealed(&store);
            prop_assert!(k <= b.found(&store));
            prop_assert!(k >= last);
            last = k;
        }
    }
}
