//! Browse state — predicate + reveal cursor bound to a [`RecipeStore`].
//!
//! The filtered view is never cached: [`Browser::view`] recomputes it from
//! the store on every call, so a mutation is visible on the next render.
//! What the browser does remember is the store revision its reveal cursor was
//! computed for; [`Browser::sync`] restarts pagination when that revision is
//! out of date, and the filter setters restart it when the predicate actually
//! changes. Nothing else touches K.

use crate::pager::{Paginator, RevealOutcome};
use crate::search::{self, Filter};
use crate::store::RecipeStore;
use crate::types::Recipe;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Browser {
    filter: Filter,
    pager: Paginator,
    seen_revision: Option<u64>,
}

impl Default for Browser {
    fn default() -> Self {
        Self::new(Paginator::default())
    }
}

impl Browser {
    pub fn new(pager: Paginator) -> Self {
        Self {
            filter: Filter::default(),
            pager,
            seen_revision: None,
        }
    }

    pub fn with_page_size(page_size: usize, delay: Duration) -> Self {
        Self::new(Paginator::new(page_size, delay))
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    // ── Predicate setters ──────────────────────────────────────────────────

    pub fn set_text(&mut self, text: impl Into<String>, store: &RecipeStore) {
        let text = text.into();
        if self.filter.text != text {
            self.filter.text = text;
            self.restart(store);
        }
    }

    pub fn set_categories<I>(&mut self, categories: I, store: &RecipeStore)
    where
        I: IntoIterator<Item = String>,
    {
        let categories = categories.into_iter().collect();
        if self.filter.categories != categories {
            self.filter.categories = categories;
            self.restart(store);
        }
    }

    pub fn toggle_category(&mut self, category: &str, store: &RecipeStore) {
        if !self.filter.categories.remove(category) {
            self.filter.categories.insert(category.to_string());
        }
        self.restart(store);
    }

    pub fn set_areas<I>(&mut self, areas: I, store: &RecipeStore)
    where
        I: IntoIterator<Item = String>,
    {
        let areas = areas.into_iter().collect();
        if self.filter.areas != areas {
            self.filter.areas = areas;
            self.restart(store);
        }
    }

    pub fn toggle_area(&mut self, area: &str, store: &RecipeStore) {
        if !self.filter.areas.remove(area) {
            self.filter.areas.insert(area.to_string());
        }
        self.restart(store);
    }

    /// Clear every constraint.
    pub fn reset_filters(&mut self, store: &RecipeStore) {
        if self.filter != Filter::default() {
            self.filter = Filter::default();
            self.restart(store);
        }
    }

    // ── Views ──────────────────────────────────────────────────────────────

    /// Restart pagination if the store changed since the cursor was computed.
    /// Returns `true` when it did.
    pub fn sync(&mut self, store: &RecipeStore) -> bool {
        if self.seen_revision == Some(store.revision()) {
            return false;
        }
        self.restart(store);
        true
    }

    /// The full filtered view, freshly computed.
    pub fn view<'a>(&self, store: &'a RecipeStore) -> Vec<&'a Recipe> {
        search::filter(store.recipes(), &self.filter)
    }

    /// Number of recipes matching the current filter.
    pub fn found(&self, store: &RecipeStore) -> usize {
        self.view(store).len()
    }

    /// The revealed prefix of the filtered view.
    pub fn visible<'a>(&self, store: &'a RecipeStore) -> Vec<&'a Recipe> {
        let mut view = self.view(store);
        view.truncate(self.pager.revealed());
        view
    }

    /// K for `store`. Until the next [`sync`](Self::sync) after a mutation,
    /// the stored cursor is clamped to the current view.
    pub fn revealed(&self, store: &RecipeStore) -> usize {
        let revealed = self.pager.revealed();
        if self.seen_revision == Some(store.revision()) {
            revealed
        } else {
            revealed.min(self.found(store))
        }
    }

    pub fn has_more(&self, store: &RecipeStore) -> bool {
        self.revealed(store) < self.found(store)
    }

    pub fn is_loading_more(&self) -> bool {
        self.pager.is_loading()
    }

    /// Categories offered by the filter pane.
    pub fn available_categories(&self, store: &RecipeStore) -> Vec<String> {
        store.categories()
    }

    /// Areas offered by the filter pane.
    pub fn available_areas(&self, store: &RecipeStore) -> Vec<String> {
        store.areas()
    }

    // ── Load more ──────────────────────────────────────────────────────────

    /// Schedule the next page (explicit "load more" or the cursor reaching
    /// the last revealed row).
    pub fn load_more(&mut self, now: Instant, store: &RecipeStore) -> bool {
        self.sync(store);
        let view_len = self.found(store);
        self.pager.request_more(now, view_len)
    }

    /// Drive deferred reveals; call once per UI tick.
    pub fn tick(&mut self, now: Instant, store: &RecipeStore) -> RevealOutcome {
        self.sync(store);
        if self.pager.pending().is_none() {
            return RevealOutcome::Idle;
        }
        let view_len = self.found(store);
        self.pager.poll(now, view_len)
    }

    fn restart(&mut self, store: &RecipeStore) {
        self.seen_revision = Some(store.revision());
        let view_len = self.found(store);
        self.pager.reset(view_len);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Answer;
    use crate::types::RecipeDraft;
    use pretty_assertions::assert_eq;

    fn recipe(i: usize, category: &str, area: &str) -> Recipe {
        Recipe {
            id: i.to_string(),
            name: format!("Recipe {i}"),
            category: category.to_string(),
            area: area.to_string(),
            instructions: String::new(),
            thumbnail: String::new(),
            video: None,
            ingredients: Vec::new(),
        }
    }

    /// 30 recipes: even ids are Beef/British, odd ids Pasta/Italian.
    fn store() -> RecipeStore {
        RecipeStore::with_recipes(
            (0..30)
                .map(|i| {
                    if i % 2 == 0 {
                        recipe(i, "Beef", "British")
                    } else {
                        recipe(i, "Pasta", "Italian")
                    }
                })
                .collect(),
        )
    }

    fn browser() -> Browser {
        Browser::with_page_size(12, Duration::ZERO)
    }

    #[test]
    fn first_sync_reveals_one_page() {
        let store = store();
        let mut b = browser();
        assert!(b.sync(&store));
        assert_eq!(b.revealed(&store), 12);
        assert_eq!(b.visible(&store).len(), 12);
        assert!(b.has_more(&store));
        assert!(!b.sync(&store));
    }

    #[test]
    fn load_more_then_filter_change_resets() {
        let store = store();
        let mut b = browser();
        let now = Instant::now();
        b.sync(&store);
        assert!(b.load_more(now, &store));
        assert_eq!(b.tick(now, &store), RevealOutcome::Revealed { revealed: 24 });

        b.toggle_category("Beef", &store);
        assert_eq!(b.found(&store), 15);
        assert_eq!(b.revealed(&store), 12);
    }

    #[test]
    fn setting_identical_predicate_does_not_reset() {
        let store = store();
        let mut b = browser();
        let now = Instant::now();
        b.set_text("recipe", &store);
        b.load_more(now, &store);
        b.tick(now, &store);
        assert_eq!(b.revealed(&store), 24);

        b.set_text("recipe", &store);
        b.set_categories(Vec::new(), &store);
        b.set_areas(Vec::new(), &store);
        assert_eq!(b.revealed(&store), 24);
    }

    #[test]
    fn store_mutation_resets_and_view_is_fresh() {
        let mut store = store();
        let mut b = browser();
        let now = Instant::now();
        b.sync(&store);
        b.load_more(now, &store);
        b.tick(now, &store);
        assert_eq!(b.revealed(&store), 24);

        store.delete("0", &mut Answer(true));
        assert_eq!(b.view(&store).len(), 29);
        assert!(b.sync(&store));
        assert_eq!(b.revealed(&store), 12);
    }

    #[test]
    fn created_recipe_shows_first() {
        let mut store = store();
        let mut b = browser();
        b.sync(&store);
        let draft = RecipeDraft {
            name: "Fresh".into(),
            category: "Beef".into(),
            ..Default::default()
        };
        let id = store.create(draft, "ph").unwrap().id.clone();
        b.sync(&store);
        assert_eq!(b.visible(&store)[0].id, id);
    }

    #[test]
    fn pending_reveal_is_dropped_when_filter_changes() {
        let store = store();
        let mut b = Browser::with_page_size(12, Duration::from_millis(500));
        let now = Instant::now();
        b.sync(&store);
        assert!(b.load_more(now, &store));
        assert!(b.is_loading_more());

        b.set_text("Recipe 1", &store);
        assert!(!b.is_loading_more());
        assert_eq!(
            b.tick(now + Duration::from_millis(500), &store),
            RevealOutcome::Stale
        );
        assert_eq!(b.revealed(&store), b.found(&store).min(12));
    }

    #[test]
    fn revealed_never_exceeds_view_before_sync() {
        let mut store =
            RecipeStore::with_recipes((0..5).map(|i| recipe(i, "Beef", "British")).collect());
        let mut b = browser();
        b.sync(&store);
        assert_eq!(b.revealed(&store), 5);

        store.delete("0", &mut Answer(true));
        assert_eq!(b.found(&store), 4);
        assert_eq!(b.revealed(&store), 4);
        assert_eq!(b.visible(&store).len(), 4);
        assert!(!b.has_more(&store));
    }

    #[test]
    fn reset_filters_restores_full_view() {
        let store = store();
        let mut b = browser();
        b.set_text("xyz", &store);
        assert_eq!(b.found(&store), 0);
        assert_eq!(b.revealed(&store), 0);
        b.reset_filters(&store);
        assert_eq!(b.found(&store), 30);
        assert_eq!(b.revealed(&store), 12);
    }
}
