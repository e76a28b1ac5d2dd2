use clap::Parser;
use dotenv::dotenv;
use news_scraper::{
    scraper::{scrape_listing, HttpFetcher},
    utils, DEFAULT_SOURCE_URL,
};
use std::{path::PathBuf, time::Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fetch a news listing and print the extracted articles without storing them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Listing page to scrape
    #[arg(short, long, env = "SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    url: String,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Give up on the fetch after this many seconds
    #[arg(short, long, env = "FETCH_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let fetcher = HttpFetcher::new(args.timeout_secs.map(Duration::from_secs))?;
    let articles = scrape_listing(&fetcher, &args.url).await?;
    info!(count = articles.len(), url = %args.url, "scrape finished");

    let output = serde_json::json!({ "source": args.url, "articles": articles });
    match args.output {
        Some(path) => utils::save_json(&output, &path)?,
        None => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    Ok(())
}
