//! mealdeck-core — recipe browser core library.
//!
//! This crate holds everything that does not touch the network or the
//! terminal: the recipe types, the session store, the filter, the reveal
//! cursor and the routes between screens.
//!
//! # Architecture
//!
//! ```text
//! Aggregator ──► Store ──► Browser (filter + pager) ──► UI
//!  (feeds)         ▲                                    │
//!                  └──── create / edit / delete ◄───────┘
//! ```
//!
//! The store is only mutated from the UI thread; aggregation results are
//! handed over through a channel and applied there.

pub mod browse;
pub mod config;
pub mod error;
pub mod nav;
pub mod notice;
pub mod pager;
pub mod search;
pub mod store;
pub mod types;

pub use browse::Browser;
pub use error::{NotFound, StoreError, ValidationError};
pub use nav::Route;
pub use notice::Notice;
pub use search::Filter;
pub use store::{Answer, Confirm, Deletion, RecipeStore};
pub use types::{Ingredient, Recipe, RecipeDraft};
