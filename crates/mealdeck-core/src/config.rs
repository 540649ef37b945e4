//! Configuration types for mealdeck.
//!
//! [`Config::load`] reads `~/.config/mealdeck/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit file layered over the same defaults. [`Config::defaults`] returns
//! the defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[api]
base_url      = "https://www.themealdb.com/api/json/v1/1"
timeout_secs  = 15
initial_query = "pasta"
seed_terms    = ["chicken", "beef", "dessert", "vegetarian", "seafood"]

[browse]
page_size          = 12
load_more_delay_ms = 500
placeholder_image  = "https://placehold.co/300x220/1a1f35/667eea?text=No+Image"

[ui]
theme                 = "default"
filter_pane_width_pct = 25
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[api]` section: where and how recipes are fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-lookup timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Term loaded at startup.
    #[serde(default = "default_initial_query")]
    pub initial_query: String,
    /// Terms searched alongside every user query to diversify results.
    #[serde(default = "default_seed_terms")]
    pub seed_terms: Vec<String>,
}

fn default_base_url() -> String { "https://www.themealdb.com/api/json/v1/1".to_string() }
fn default_timeout_secs() -> u64 { 15 }
fn default_initial_query() -> String { "pasta".to_string() }
fn default_seed_terms() -> Vec<String> {
    ["chicken", "beef", "dessert", "vegetarian", "seafood"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            initial_query: default_initial_query(),
            seed_terms: default_seed_terms(),
        }
    }
}

/// `[browse]` section: pagination and record defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_load_more_delay_ms")]
    pub load_more_delay_ms: u64,
    /// Image used for created recipes that have none.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

fn default_page_size() -> usize { 12 }
fn default_load_more_delay_ms() -> u64 { 500 }
fn default_placeholder_image() -> String {
    "https://placehold.co/300x220/1a1f35/667eea?text=No+Image".to_string()
}

impl BrowseConfig {
    pub fn load_more_delay(&self) -> Duration {
        Duration::from_millis(self.load_more_delay_ms)
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            load_more_delay_ms: default_load_more_delay_ms(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_filter_pane_width_pct")]
    pub filter_pane_width_pct: u16,
}

fn default_theme() -> String { "default".to_string() }
fn default_filter_pane_width_pct() -> u16 { 25 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            filter_pane_width_pct: default_filter_pane_width_pct(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/mealdeck/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit file layered on top of the built-in defaults. A
    /// missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("mealdeck")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
