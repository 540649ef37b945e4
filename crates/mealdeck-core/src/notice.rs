//! User-facing conditions raised by a load, shown as a dismissible banner.

use std::fmt;

/// Outcome of a load that the UI should tell the user about.
///
/// None of these are fatal; retrying the load is always possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Every lookup succeeded (or at least one did) but nothing matched.
    /// The collection is now empty; this is a valid state, not an error.
    NoRecipes,
    /// The search endpoint could not be reached for any term. The existing
    /// collection is left as it was.
    LoadFailed { reason: String },
    /// Results were loaded, but some terms failed and contributed nothing.
    Partial { failed_terms: Vec<String> },
}

impl Notice {
    /// Warnings are rendered with the warning style, the rest as info.
    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::LoadFailed { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoRecipes => write!(f, "No recipes found"),
            Notice::LoadFailed { reason } => write!(f, "Error loading data: {reason}"),
            Notice::Partial { failed_terms } => {
                write!(f, "Some searches failed: {}", failed_terms.join(", "))
            }
        }
    }
}
