use clap::Parser;
use mealdeck::headless::{self, HeadlessOptions};
use mealdeck_core::{config::Config, Filter};
use mealdeck_feeds::{Aggregator, MealDbClient};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mealdeck", about = "mealdeck — terminal recipe browser for TheMealDB")]
struct Cli {
    /// Write debug logs to /tmp/mealdeck-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Config file to use instead of ~/.config/mealdeck/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Primary search term (overrides `api.initial_query`).
    #[arg(long, value_name = "TERM")]
    query: Option<String>,

    /// TheMealDB API root (overrides `api.base_url`).
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Print matching recipes to stdout instead of starting the TUI.
    #[arg(long)]
    headless: bool,

    /// Case-insensitive text filter over name, instructions, category and area.
    #[arg(long, value_name = "TEXT", requires = "headless")]
    filter: Option<String>,

    /// Only these categories (repeatable).
    #[arg(long, value_name = "C", requires = "headless")]
    category: Vec<String>,

    /// Only these areas (repeatable).
    #[arg(long, value_name = "A", requires = "headless")]
    area: Vec<String>,

    /// Maximum lines to print (defaults to the page size).
    #[arg(long, value_name = "N", requires = "headless")]
    limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config: falling back to defaults");
            Config::defaults()
        }),
    };
    if let Some(query) = &cli.query {
        config.api.initial_query = query.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    let runtime = tokio::runtime::Runtime::new()?;
    if cli.headless {
        return runtime.block_on(run_headless(&cli, config));
    }
    mealdeck_tui::run(config, runtime.handle().clone())
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/mealdeck-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("mealdeck debug log started — tail -f /tmp/mealdeck-debug.log");
    } else if cli.headless {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}

async fn run_headless(cli: &Cli, config: Config) -> anyhow::Result<()> {
    let client = MealDbClient::new(config.api.base_url.clone(), config.api.timeout())?;
    let aggregator =
        Aggregator::new(client, config.api.seed_terms.clone()).with_timeout(config.api.timeout());

    let filter = Filter::new()
        .with_text(cli.filter.clone().unwrap_or_default())
        .with_categories(cli.category.iter().cloned())
        .with_areas(cli.area.iter().cloned());
    let options = HeadlessOptions {
        query: config.api.initial_query.clone(),
        filter,
        limit: cli.limit.unwrap_or(config.browse.page_size),
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    headless::run(&aggregator, &options, &mut stdout.lock(), &mut stderr.lock()).await?;
    Ok(())
}
