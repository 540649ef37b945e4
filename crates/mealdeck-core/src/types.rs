//! Core types for mealdeck-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the normalised [`Recipe`], its [`Ingredient`] pairs, and the
//! [`RecipeDraft`] edited by the create/edit forms.

use crate::error::ValidationError;

/// Upper bound on ingredient pairs ingested from TheMealDB
/// (`strIngredient1` … `strIngredient20`).
pub const MAX_INGREDIENTS: usize = 20;

/// Number of ingredient pairs exposed by the create/edit forms. Pairs beyond
/// this are carried over untouched when a recipe is edited.
pub const EDITABLE_INGREDIENTS: usize = 3;

/// A recipe record held by the session store.
///
/// `id` is the only field with an invariant: it is unique within a store and
/// never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    /// Display name ("Spaghetti Carbonara").
    pub name: String,
    /// Category label ("Pasta", "Beef", …).
    pub category: String,
    /// Cuisine / area label ("Italian", "British", …).
    pub area: String,
    pub instructions: String,
    /// Image URL. Records created locally get a placeholder when none is given.
    pub thumbnail: String,
    /// External video URL, if any.
    pub video: Option<String>,
    /// Ordered (ingredient, measure) pairs; blank ingredients are never stored.
    pub ingredients: Vec<Ingredient>,
}

/// One (ingredient, measure) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.into(),
        }
    }

    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// The user-editable subset of a [`Recipe`], as filled in by the forms.
///
/// Empty strings mean "not provided". `ingredients` always has exactly
/// [`EDITABLE_INGREDIENTS`] slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub thumbnail: String,
    pub video: String,
    pub ingredients: [Ingredient; EDITABLE_INGREDIENTS],
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            area: String::new(),
            instructions: String::new(),
            thumbnail: String::new(),
            video: String::new(),
            ingredients: Default::default(),
        }
    }
}

impl RecipeDraft {
    /// Pre-fill a draft from an existing record (edit mode).
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut ingredients: [Ingredient; EDITABLE_INGREDIENTS] = Default::default();
        for (slot, pair) in ingredients.iter_mut().zip(&recipe.ingredients) {
            *slot = pair.clone();
        }
        Self {
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            area: recipe.area.clone(),
            instructions: recipe.instructions.clone(),
            thumbnail: recipe.thumbnail.clone(),
            video: recipe.video.clone().unwrap_or_default(),
            ingredients,
        }
    }

    /// Name and category are required; everything else is optional.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Ok(())
    }

    /// Build a brand-new record. Does not validate; callers run
    /// [`validate`](Self::validate) first.
    pub fn into_recipe(self, id: String, placeholder_image: &str) -> Recipe {
        let thumbnail = if self.thumbnail.trim().is_empty() {
            placeholder_image.to_string()
        } else {
            self.thumbnail
        };
        Recipe {
            id,
            name: self.name,
            category: self.category,
            area: self.area,
            instructions: self.instructions,
            thumbnail,
            video: non_blank(self.video),
            ingredients: self.ingredients.into_iter().filter(|i| !i.is_blank()).collect(),
        }
    }

    /// Merge the draft over `base`: the editable fields and the first
    /// [`EDITABLE_INGREDIENTS`] pairs are replaced, `id` and any further
    /// ingredient pairs are kept.
    pub fn apply_to(self, base: &Recipe) -> Recipe {
        let carried = base.ingredients.iter().skip(EDITABLE_INGREDIENTS).cloned();
        let ingredients = self
            .ingredients
            .into_iter()
            .filter(|i| !i.is_blank())
            .chain(carried)
            .collect();
        Recipe {
            id: base.id.clone(),
            name: self.name,
            category: self.category,
            area: self.area,
            instructions: self.instructions,
            thumbnail: self.thumbnail,
            video: non_blank(self.video),
            ingredients,
        }
    }
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
