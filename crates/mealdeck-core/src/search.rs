//! Search layer — the multi-predicate recipe filter.
//!
//! A [`Filter`] combines three independent constraints with AND:
//!
//! - **text**: case-insensitive substring of name, instructions, category or
//!   area (any field may match);
//! - **categories**: the recipe's category is one of the selected labels;
//! - **areas**: the recipe's area is one of the selected labels.
//!
//! An empty constraint (blank text, empty set) matches everything.
//! [`filter`] is a pure function of the collection and the predicate.

use crate::types::Recipe;
use std::collections::BTreeSet;

/// Current predicate state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub text: String,
    pub categories: BTreeSet<String>,
    pub areas: BTreeSet<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.areas = areas.into_iter().map(Into::into).collect();
        self
    }

    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.categories.is_empty() && self.areas.is_empty()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_text(recipe)
            && (self.categories.is_empty() || self.categories.contains(&recipe.category))
            && (self.areas.is_empty() || self.areas.contains(&recipe.area))
    }

    fn matches_text(&self, recipe: &Recipe) -> bool {
        if self.text.trim().is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        [
            recipe.name.as_str(),
            recipe.instructions.as_str(),
            recipe.category.as_str(),
            recipe.area.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Ordered subsequence of `recipes` that satisfies `filter`.
pub fn filter<'a>(recipes: &'a [Recipe], filter: &Filter) -> Vec<&'a Recipe> {
    if filter.is_empty() {
        return recipes.iter().collect();
    }
    recipes.iter().filter(|r| filter.matches(r)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
