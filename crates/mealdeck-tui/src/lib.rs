//! mealdeck TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use mealdeck_core::config::Config;
use mealdeck_feeds::{Aggregator, MealDbClient};

/// Start the TUI against TheMealDB. Aggregations are spawned on `runtime`;
/// the terminal loop itself runs on the calling thread.
pub fn run(config: Config, runtime: tokio::runtime::Handle) -> anyhow::Result<()> {
    let client = MealDbClient::new(config.api.base_url.clone(), config.api.timeout())?;
    let aggregator =
        Aggregator::new(client, config.api.seed_terms.clone()).with_timeout(config.api.timeout());
    let theme = theme::Theme::by_name(&config.ui.theme);
    App::new(aggregator, config, theme, runtime).run()
}
