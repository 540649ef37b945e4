//! mealdeck-feeds — recipe sources and the multi-term aggregator.
//!
//! A [`RecipeSource`] answers one search term with zero or more recipes.
//! [`mealdb::MealDbClient`] is the production source (TheMealDB over HTTPS);
//! tests plug in fakes. [`aggregate::Aggregator`] fans a user query plus the
//! seed terms out over a source and merges the answers.

pub mod aggregate;
pub mod mealdb;

pub use aggregate::{Aggregation, Aggregator, LoadStatus, TermOutcome};
pub use mealdb::MealDbClient;

use mealdeck_core::Recipe;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Why a single term's lookup produced nothing.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// The search capability: one term in, recipes out.
///
/// An unknown term is not an error; it yields an empty list.
pub trait RecipeSource: Send + Sync {
    fn search(&self, term: &str) -> impl Future<Output = Result<Vec<Recipe>, LookupError>> + Send;
}
