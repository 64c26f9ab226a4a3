use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_OUTPUT: &str = "scraped_data.csv";
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Overrides read from `site_scraper.toml` and `SCRAPER_*` variables.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    pub output: Option<PathBuf>,
    pub delay_ms: Option<u64>,
    pub user_agent: Option<String>,
}

impl Settings {
    /// Optional `site_scraper.toml` in the working directory, then the
    /// environment (`SCRAPER_OUTPUT`, `SCRAPER_DELAY_MS`, `SCRAPER_USER_AGENT`).
    pub fn load() -> Result<Settings> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("site_scraper").required(false))
                .add_source(Environment::with_prefix("SCRAPER")),
        )
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Settings> {
        builder
            .build()
            .and_then(Config::try_deserialize)
            .context("invalid settings")
    }

    pub fn output(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Console line announcing an output path that came from the settings
    /// file or environment rather than the command line.
    pub fn output_notice(&self, cli: Option<&Path>) -> Option<String> {
        match (cli, &self.output) {
            (None, Some(path)) => Some(format!(
                "Output path {} taken from settings (site_scraper.toml or SCRAPER_OUTPUT)",
                path.display()
            )),
            _ => None,
        }
    }

    pub fn delay(&self, cli_ms: Option<u64>) -> Duration {
        Duration::from_millis(cli_ms.or(self.delay_ms).unwrap_or(DEFAULT_DELAY_MS))
    }

    pub fn user_agent(&self, cli: Option<String>) -> Option<String> {
        cli.or_else(|| self.user_agent.clone())
    }
}
