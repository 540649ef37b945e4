//! TheMealDB search client.
//!
//! `GET {base_url}/search.php?s={term}` answers
//! `{"meals": [ {...}, ... ]}` or `{"meals": null}` when nothing matches.
//! Each meal spreads its ingredients over `strIngredient1..20` and
//! `strMeasure1..20`; any field may be `null` or blank.

use crate::{LookupError, RecipeSource};
use mealdeck_core::types::{Ingredient, Recipe, MAX_INGREDIENTS};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchResponse {
    meals: Option<Vec<RawMeal>>,
}

#[derive(Debug, Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strYoutube", default)]
    video: Option<String>,
    /// `strIngredientN` / `strMeasureN` and any other keys.
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl RawMeal {
    fn into_recipe(mut self) -> Recipe {
        let ingredients = (1..=MAX_INGREDIENTS)
            .filter_map(|n| {
                let name = take_str(&mut self.rest, &format!("strIngredient{n}"))?;
                if name.trim().is_empty() {
                    return None;
                }
                let measure =
                    take_str(&mut self.rest, &format!("strMeasure{n}")).unwrap_or_default();
                Some(Ingredient::new(name.trim(), measure.trim()))
            })
            .collect();

        Recipe {
            id: self.id,
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            area: self.area.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
            thumbnail: self.thumbnail.unwrap_or_default(),
            video: self.video.filter(|v| !v.trim().is_empty()),
            ingredients,
        }
    }
}

fn take_str(map: &mut HashMap<String, Value>, key: &str) -> Option<String> {
    match map.remove(key)? {
        Value::String(s) => Some(s),
        _ => None,
    }
}

/// Decode a `search.php` response body.
pub fn parse_search_response(body: &str) -> Result<Vec<Recipe>, serde_json::Error> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .meals
        .unwrap_or_default()
        .into_iter()
        .map(RawMeal::into_recipe)
        .collect())
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for TheMealDB (or anything serving the same `search.php`).
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// `timeout` bounds each whole request.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mealdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, term: &str) -> Result<Vec<Recipe>, LookupError> {
        let url = format!("{}/search.php", self.base_url);
        tracing::debug!(%url, term, "mealdb: search");

        let response = self.http.get(&url).query(&[("s", term)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        let recipes = parse_search_response(&body)?;
        tracing::debug!(term, count = recipes.len(), "mealdb: search done");
        Ok(recipes)
    }
}

impl RecipeSource for MealDbClient {
    fn search(&self, term: &str) -> impl Future<Output = Result<Vec<Recipe>, LookupError>> + Send {
        self.fetch(term)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
