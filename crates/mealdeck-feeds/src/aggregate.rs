//! Aggregator — fans one query plus the seed terms out over a
//! [`RecipeSource`] and merges the answers into one collection.
//!
//! # Pipeline
//!
//! 1. [`unique_terms`]: the user's term first, then the seeds, duplicates
//!    removed (case-sensitive).
//! 2. One lookup per term, all polled concurrently, each under its own
//!    timeout.
//! 3. Partial-success join: every term's outcome is recorded; failed terms
//!    contribute nothing and never abort the others.
//! 4. [`merge_unique`]: flatten in term order, keeping the first record seen
//!    for each id.
//! 5. Fisher–Yates shuffle so results are not grouped by term.
//!
//! Nothing here touches the store. The caller applies the finished
//! [`Aggregation`] on the UI thread via [`Aggregation::apply`].

use crate::{LookupError, RecipeSource};
use futures::future::join_all;
use mealdeck_core::{Notice, Recipe, RecipeStore};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::Duration;

/// Default per-lookup timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// How one term's lookup went.
#[derive(Debug)]
pub struct TermOutcome {
    pub term: String,
    /// Number of records returned, or why there were none.
    pub result: Result<usize, LookupError>,
}

impl TermOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Overall verdict of an aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Every term answered and something was found.
    Loaded,
    /// Something was found but these terms failed.
    Degraded { failed_terms: Vec<String> },
    /// At least one term answered and nothing was found.
    Empty,
    /// No term could be looked up at all.
    Failed { reason: String },
}

/// Merged, deduplicated, shuffled results plus per-term outcomes.
#[derive(Debug)]
pub struct Aggregation {
    pub recipes: Vec<Recipe>,
    pub outcomes: Vec<TermOutcome>,
}

impl Aggregation {
    pub fn failed_terms(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_ok())
            .map(|o| o.term.clone())
            .collect()
    }

    pub fn status(&self) -> LoadStatus {
        let failed = self.failed_terms();
        if !self.outcomes.is_empty() && failed.len() == self.outcomes.len() {
            let reason = self
                .outcomes
                .iter()
                .find_map(|o| o.result.as_ref().err())
                .map(ToString::to_string)
                .unwrap_or_default();
            return LoadStatus::Failed { reason };
        }
        if self.recipes.is_empty() {
            return LoadStatus::Empty;
        }
        if failed.is_empty() {
            LoadStatus::Loaded
        } else {
            LoadStatus::Degraded { failed_terms: failed }
        }
    }

    /// Store the results and return what the user should be told.
    ///
    /// A failed load leaves `store` untouched; an empty one clears it.
    pub fn apply(self, store: &mut RecipeStore) -> Option<Notice> {
        match self.status() {
            LoadStatus::Failed { reason } => {
                tracing::warn!(%reason, "aggregate: every lookup failed, keeping collection");
                Some(Notice::LoadFailed { reason })
            }
            LoadStatus::Empty => {
                store.replace_all(Vec::new());
                Some(Notice::NoRecipes)
            }
            LoadStatus::Degraded { failed_terms } => {
                tracing::warn!(?failed_terms, "aggregate: partial results");
                store.replace_all(self.recipes);
                Some(Notice::Partial { failed_terms })
            }
            LoadStatus::Loaded => {
                store.replace_all(self.recipes);
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Pure helpers
// ---------------------------------------------------------------------------

/// `primary` (trimmed, skipped when blank) followed by `seeds`, keeping the
/// first occurrence of each term.
pub fn unique_terms<S: AsRef<str>>(primary: &str, seeds: &[S]) -> Vec<String> {
    let primary = primary.trim();
    let mut seen = HashSet::new();
    std::iter::once(primary)
        .chain(seeds.iter().map(AsRef::as_ref))
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}

/// Flatten `batches` in order, keeping only the first record for each id.
pub fn merge_unique<I>(batches: I) -> Vec<Recipe>
where
    I: IntoIterator<Item = Vec<Recipe>>,
{
    let mut seen = HashSet::new();
    batches
        .into_iter()
        .flatten()
        .filter(|r| seen.insert(r.id.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------

pub struct Aggregator<S> {
    source: S,
    seeds: Vec<String>,
    timeout: Duration,
    shuffle_seed: Option<u64>,
}

impl<S: RecipeSource> Aggregator<S> {
    pub fn new(source: S, seeds: Vec<String>) -> Self {
        Self {
            source,
            seeds,
            timeout: DEFAULT_TIMEOUT,
            shuffle_seed: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Make the shuffle deterministic.
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn seeds(&self) -> &[String] {
        &self.seeds
    }

    /// Run the whole pipeline for `primary`.
    pub async fn aggregate(&self, primary: &str) -> Aggregation {
        let terms = unique_terms(primary, &self.seeds);
        tracing::info!(?terms, "aggregate: starting lookups");

        let lookups: Vec<_> = terms.iter().map(|term| self.lookup(term)).collect();
        let results = join_all(lookups).await;

        let mut outcomes = Vec::with_capacity(terms.len());
        let mut batches = Vec::with_capacity(terms.len());
        for (term, result) in terms.into_iter().zip(results) {
            match result {
                Ok(recipes) => {
                    outcomes.push(TermOutcome { term, result: Ok(recipes.len()) });
                    batches.push(recipes);
                }
                Err(err) => {
                    tracing::warn!(%term, error = %err, "aggregate: lookup failed");
                    outcomes.push(TermOutcome { term, result: Err(err) });
                }
            }
        }

        let mut recipes = merge_unique(batches);
        self.shuffle(&mut recipes);
        tracing::info!(count = recipes.len(), "aggregate: merged");

        Aggregation { recipes, outcomes }
    }

    async fn lookup(&self, term: &str) -> Result<Vec<Recipe>, LookupError> {
        match tokio::time::timeout(self.timeout, self.source.search(term)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout(self.timeout)),
        }
    }

    fn shuffle(&self, recipes: &mut [Recipe]) {
        let mut rng = match self.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        recipes.shuffle(&mut rng);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::future::Future;

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            category: String::new(),
            area: String::new(),
            instructions: String::new(),
            thumbnail: String::new(),
            video: None,
            ingredients: Vec::new(),
        }
    }

    /// Canned answers per term; unknown terms return nothing, terms in
    /// `broken` fail.
    #[derive(Default)]
    struct CannedSource {
        answers: HashMap<String, Vec<Recipe>>,
        broken: Vec<String>,
    }

    impl RecipeSource for CannedSource {
        fn search(
            &self,
            term: &str,
        ) -> impl Future<Output = Result<Vec<Recipe>, LookupError>> + Send {
            let result = if self.broken.iter().any(|b| b == term) {
                Err(LookupError::Unavailable(format!("{term} is down")))
            } else {
                Ok(self.answers.get(term).cloned().unwrap_or_default())
            };
            async move { result }
        }
    }

    #[test]
    fn unique_terms_keeps_primary_first_and_drops_duplicates() {
        let seeds = ["chicken", "beef", "chicken", "Beef"];
        assert_eq!(
            unique_terms(" beef ", &seeds),
            vec!["beef", "chicken", "Beef"]
        );
        assert_eq!(unique_terms("   ", &seeds), vec!["chicken", "beef", "Beef"]);
    }

    #[test]
    fn merge_unique_first_seen_wins() {
        let merged = merge_unique(vec![
            vec![recipe("1", "first"), recipe("2", "b")],
            vec![recipe("1", "second"), recipe("3", "c")],
        ]);
        let names: Vec<_> = merged.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "b", "c"]);
    }

    #[tokio::test]
    async fn failed_term_does_not_abort_the_rest() {
        let mut source = CannedSource::default();
        source.answers.insert("pasta".into(), vec![recipe("1", "Pasta Bake")]);
        source.broken.push("beef".into());
        let agg = Aggregator::new(source, vec!["beef".into()]).with_shuffle_seed(7);

        let result = agg.aggregate("pasta").await;
        assert_eq!(result.recipes.len(), 1);
        assert_eq!(
            result.status(),
            LoadStatus::Degraded { failed_terms: vec!["beef".into()] }
        );
    }

    #[tokio::test]
    async fn all_failed_is_failed_and_keeps_store() {
        let source = CannedSource {
            broken: vec!["pasta".into(), "beef".into()],
            ..Default::default()
        };
        let agg = Aggregator::new(source, vec!["beef".into()]);
        let result = agg.aggregate("pasta").await;
        assert!(matches!(result.status(), LoadStatus::Failed { .. }));

        let mut store = RecipeStore::with_recipes(vec![recipe("9", "Keep me")]);
        let notice = result.apply(&mut store);
        assert!(matches!(notice, Some(Notice::LoadFailed { .. })));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_term_times_out() {
        struct Hanging;
        impl RecipeSource for Hanging {
            fn search(
                &self,
                _term: &str,
            ) -> impl Future<Output = Result<Vec<Recipe>, LookupError>> + Send {
                futures::future::pending()
            }
        }

        let agg = Aggregator::new(Hanging, Vec::new()).with_timeout(Duration::from_secs(2));
        let result = agg.aggregate("pasta").await;
        assert!(matches!(
            result.outcomes[0].result,
            Err(LookupError::Timeout(d)) if d == Duration::from_secs(2)
        ));
    }

    #[test]
    fn seeded_shuffle_is_deterministic() {
        let agg = Aggregator::new(CannedSource::default(), Vec::new()).with_shuffle_seed(42);
        let mut a: Vec<_> = (0..20).map(|i| recipe(&i.to_string(), "")).collect();
        let mut b = a.clone();
        agg.shuffle(&mut a);
        agg.shuffle(&mut b);
        assert_eq!(a, b);
    }
}
