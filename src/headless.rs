//! Headless mode: aggregate once, filter, print one line per recipe.
//!
//! Output is tab-separated `id name category area`, limited to the first
//! `limit` matches. Notices go to the error stream; a load where every term
//! failed is returned as an error so the process exits non-zero.

use anyhow::bail;
use mealdeck_core::{search, Filter, Notice, Recipe, RecipeStore};
use mealdeck_feeds::{Aggregator, RecipeSource};
use std::io::Write;

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    /// Primary search term, run alongside the configured seeds.
    pub query: String,
    pub filter: Filter,
    pub limit: usize,
}

/// One output row. Tabs and newlines inside fields are flattened to spaces.
pub fn format_line(recipe: &Recipe) -> String {
    [
        recipe.id.as_str(),
        recipe.name.as_str(),
        recipe.category.as_str(),
        recipe.area.as_str(),
    ]
    .map(|field| field.replace(['\t', '\n', '\r'], " "))
    .join("\t")
}

/// Run one headless pass. Returns the number of lines written to `out`.
pub async fn run<S, O, E>(
    aggregator: &Aggregator<S>,
    options: &HeadlessOptions,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<usize>
where
    S: RecipeSource,
    O: Write,
    E: Write,
{
    let aggregation = aggregator.aggregate(&options.query).await;
    let mut store = RecipeStore::new();
    match aggregation.apply(&mut store) {
        Some(notice @ Notice::LoadFailed { .. }) => bail!("{notice}"),
        Some(notice) => writeln!(err, "{notice}")?,
        None => {}
    }

    let matches = search::filter(store.recipes(), &options.filter);
    let shown = matches.len().min(options.limit);
    for recipe in &matches[..shown] {
        writeln!(out, "{}", format_line(recipe))?;
    }
    if matches.len() > shown {
        writeln!(err, "Showing {shown} of {} matches", matches.len())?;
    }
    tracing::info!(found = matches.len(), shown, "headless: done");
    Ok(shown)
}
