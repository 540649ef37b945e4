//! mealdeck — terminal recipe browser for TheMealDB.
//!
//! The binary is a thin shell over three crates: `mealdeck-core` (types,
//! store, filter, pager, routes, config), `mealdeck-feeds` (TheMealDB client
//! and the multi-term aggregator) and `mealdeck-tui` (the interactive shell).
//! This library re-exports the pieces integration tests reach for and holds
//! the non-interactive [`headless`] mode.
//!
//! # Architecture
//!
//! ```text
//! MealDbClient ──► Aggregator ──► RecipeStore ──► Browser ──► TUI / headless
//! ```

pub mod headless;

pub use mealdeck_core::{
    config::Config, Browser, Filter, Notice, Recipe, RecipeDraft, RecipeStore, Route,
};
pub use mealdeck_feeds::{Aggregation, Aggregator, LoadStatus, MealDbClient, RecipeSource};
