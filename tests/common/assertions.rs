//! Domain-specific assertion helpers for mealdeck harnesses.

use mealdeck::Recipe;

/// Ids of `recipes`, in order.
pub fn ids<'a, I>(recipes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes.into_iter().map(|r| r.id.clone()).collect()
}

/// Assert that a list of recipes has exactly the given ids, in order.
///
/// ```rust
/// assert_ids!(view, ["1", "2"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($recipes:expr, [$($id:expr),* $(,)?]) => {{
        let actual = $crate::common::ids($recipes.iter().copied());
        let expected: Vec<String> = vec![$($id.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected, "recipe ids differ");
    }};
}

/// Assert that no two recipes share an id.
pub fn assert_unique_ids(recipes: &[Recipe]) {
    let mut seen = std::collections::HashSet::new();
    for r in recipes {
        assert!(seen.insert(r.id.as_str()), "duplicate recipe id {:?}", r.id);
    }
}
