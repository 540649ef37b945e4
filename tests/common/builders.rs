//! Test builders — ergonomic constructors for `Recipe` and `RecipeDraft`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use mealdeck::{Recipe, RecipeDraft};
use mealdeck_core::Ingredient;

// ---------------------------------------------------------------------------
// RecipeBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Recipe`] test fixtures.
///
/// ```rust
/// let recipe = RecipeBuilder::new("52772", "Teriyaki Chicken Casserole")
///     .category("Chicken")
///     .area("Japanese")
///     .ingredient("soy sauce", "3/4 cup")
///     .build();
/// ```
pub struct RecipeBuilder {
    recipe: Recipe,
}

impl RecipeBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            recipe: Recipe {
                id: id.into(),
                name: name.into(),
                category: String::new(),
                area: String::new(),
                instructions: String::new(),
                thumbnail: String::new(),
                video: None,
                ingredients: Vec::new(),
            },
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.recipe.category = category.into();
        self
    }

    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.recipe.area = area.into();
        self
    }

    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.recipe.instructions = instructions.into();
        self
    }

    pub fn ingredient(mut self, name: &str, measure: &str) -> Self {
        self.recipe.ingredients.push(Ingredient::new(name, measure));
        self
    }

    pub fn build(self) -> Recipe {
        self.recipe
    }
}

/// Shorthand for a recipe with just the fields the filter looks at.
pub fn recipe(id: &str, name: &str, category: &str, area: &str) -> Recipe {
    RecipeBuilder::new(id, name).category(category).area(area).build()
}

/// `n` recipes named `Dish 0..n`, all in the same category and area.
pub fn dishes(n: usize) -> Vec<Recipe> {
    (0..n)
        .map(|i| recipe(&format!("d{i}"), &format!("Dish {i}"), "Misc", "Unknown"))
        .collect()
}

/// A valid draft with the two required fields filled in.
pub fn draft(name: &str, category: &str) -> RecipeDraft {
    RecipeDraft {
        name: name.to_string(),
        category: category.to_string(),
        ..RecipeDraft::default()
    }
}
