//! Store — the in-memory session collection of [`Recipe`] values.
//!
//! The store is the single source of truth; every view reads from it and
//! only the operations below mutate it. Each mutation bumps
//! [`RecipeStore::revision`] so derived views know to recompute and restart
//! pagination. Nothing is persisted: the store lives for one session.

use crate::error::{NotFound, StoreError, ValidationError};
use crate::types::{Recipe, RecipeDraft};
use std::collections::BTreeSet;

/// Prompt shown before a recipe is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this recipe?";

// ---------------------------------------------------------------------------
// Confirmation capability
// ---------------------------------------------------------------------------

/// A blocking yes/no question put to the user.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// An answer that was already collected (e.g. from a popup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of [`RecipeStore::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    Removed(Recipe),
    /// The user said no; nothing changed.
    Declined,
    /// No record with that id; nothing changed and nobody was asked.
    Absent,
}

// ---------------------------------------------------------------------------
// RecipeStore
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    revision: u64,
    /// Last timestamp-based id handed out by `create`.
    last_issued: i64,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let mut store = Self::new();
        store.replace_all(recipes);
        store
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Monotonic counter bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Swap in a freshly loaded collection.
    pub fn replace_all(&mut self, recipes: Vec<Recipe>) {
        tracing::debug!(count = recipes.len(), "store: replace all");
        self.recipes = recipes;
        self.bump();
    }

    /// Validate `draft`, assign it a fresh id and prepend it.
    pub fn create(
        &mut self,
        draft: RecipeDraft,
        placeholder_image: &str,
    ) -> Result<&Recipe, ValidationError> {
        draft.validate()?;
        let id = self.next_id();
        let recipe = draft.into_recipe(id, placeholder_image);
        tracing::debug!(id = %recipe.id, name = %recipe.name, "store: create");
        self.recipes.insert(0, recipe);
        self.bump();
        Ok(&self.recipes[0])
    }

    /// Replace the record with the same id in place. The collection is left
    /// unchanged when the id is unknown.
    pub fn update(&mut self, recipe: Recipe) -> Result<(), NotFound> {
        let slot = self
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or_else(|| NotFound(recipe.id.clone()))?;
        tracing::debug!(id = %recipe.id, "store: update");
        *slot = recipe;
        self.bump();
        Ok(())
    }

    /// Validate `draft` and merge it over the record with id `id`.
    pub fn edit(&mut self, id: &str, draft: RecipeDraft) -> Result<(), StoreError> {
        draft.validate()?;
        let base = self.get(id).ok_or_else(|| NotFound(id.to_string()))?;
        let edited = draft.apply_to(base);
        self.update(edited)?;
        Ok(())
    }

    /// Remove the record with id `id` after asking `confirm`.
    ///
    /// Deleting an id that is not present is a no-op.
    pub fn delete(&mut self, id: &str, confirm: &mut impl Confirm) -> Deletion {
        let Some(idx) = self.recipes.iter().position(|r| r.id == id) else {
            tracing::debug!(id, "store: delete of absent id ignored");
            return Deletion::Absent;
        };
        if !confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(id, "store: delete declined");
            return Deletion::Declined;
        }
        let removed = self.recipes.remove(idx);
        tracing::debug!(id, "store: delete");
        self.bump();
        Deletion::Removed(removed)
    }

    /// Distinct non-blank categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        distinct(self.recipes.iter().map(|r| r.category.as_str()))
    }

    /// Distinct non-blank areas, sorted.
    pub fn areas(&self) -> Vec<String> {
        distinct(self.recipes.iter().map(|r| r.area.as_str()))
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    /// Nanosecond UTC timestamp, forced past the previously issued id and
    /// any id already present.
    fn next_id(&mut self) -> String {
        let now = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or(i64::MAX / 2);
        let mut candidate = now.max(self.last_issued + 1);
        while self.contains(&candidate.to_string()) {
            candidate += 1;
        }
        self.last_issued = candidate;
        candidate.to_string()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
