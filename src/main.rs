mod error;
mod fetch;
mod output;
mod parser;
mod pipeline;
mod platform;
mod record;
mod settings;
mod table;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use fetch::HttpFetcher;
use platform::Platform;
use settings::Settings;

#[derive(Parser)]
#[command(name = "site_scraper", about = "Scrape known sites into a CSV file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch each URL in order, extract records, clean them and write CSV
    Run {
        /// Platform id (books, quotes, imdb, global_news)
        #[arg(short, long)]
        platform: String,
        /// Page URLs, fetched in the order given
        urls: Vec<String>,
        /// File with one URL per line (blank lines and # comments skipped)
        #[arg(long)]
        urls_file: Option<PathBuf>,
        /// Output CSV path (default: scraped_data.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Extra request header, "Name: Value" (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
        /// User-Agent to send unless a -H header sets one
        #[arg(long)]
        user_agent: Option<String>,
        /// Pause between fetches in milliseconds (default: 1000)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// List known platforms and their columns
    Platforms,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            platform,
            mut urls,
            urls_file,
            output,
            headers,
            user_agent,
            delay_ms,
        } => {
            let settings = Settings::load()?;
            info!(settings_loaded = ?settings, msg = "Starting scraper");

            if let Some(path) = urls_file {
                urls.extend(read_urls(&path)?);
            }
            if urls.is_empty() {
                println!("No URLs given. Pass them as arguments or with --urls-file.");
                return Ok(());
            }

            let headers = fetch::parse_headers(&headers, settings.user_agent(user_agent).as_deref())?;
            if let Some(notice) = settings.output_notice(output.as_deref()) {
                println!("{}", notice);
            }
            let destination = settings.output(output);
            let scraper = pipeline::Scraper::new(HttpFetcher::new(), headers, settings.delay(delay_ms));
            scraper.run(&urls, &platform, &destination)?;
            Ok(())
        }
        Commands::Platforms => {
            for p in Platform::ALL {
                println!("{:<12} {}", p.id(), p.columns().join(", "));
            }
            Ok(())
        }
    }
}

fn read_urls(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL list {}", path.display()))?;
    Ok(parse_url_list(&text))
}

fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}
