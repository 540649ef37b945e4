//! Routes between the application's screens.
//!
//! Paths follow the shapes `/`, `/meal/<id>`, `/create` and `/edit/<id>`;
//! anything else parses to [`Route::NotFound`].

use crate::store::RecipeStore;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Detail(String),
    Create,
    Edit(String),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["create"] => Route::Create,
            ["meal", id] => Route::Detail((*id).to_string()),
            ["edit", id] => Route::Edit((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Detail(id) => format!("/meal/{id}"),
            Route::Create => "/create".to_string(),
            Route::Edit(id) => format!("/edit/{id}"),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Detail and edit routes for an id absent from `store` become
    /// [`Route::NotFound`].
    pub fn resolve(self, store: &RecipeStore) -> Route {
        match self {
            Route::Detail(ref id) | Route::Edit(ref id) if !store.contains(id) => {
                tracing::debug!(route = %self, "nav: unknown recipe");
                Route::NotFound
            }
            other => other,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
