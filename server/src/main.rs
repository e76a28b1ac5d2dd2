use anyhow::Context;
use news_scraper::scraper::HttpFetcher;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use news_server::{
    build_router,
    config::Config,
    db,
    state::AppState,
    store::SqlStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    info!(?config, "starting");

    let pool = db::init_db(&config.database_url, 5)
        .await
        .context("could not open the database")?;
    let fetcher = HttpFetcher::new(config.fetch_timeout).context("could not build http client")?;

    let state = AppState::new(
        Arc::new(SqlStore::new(pool)),
        Arc::new(fetcher),
        config.source_url.clone(),
        config.failure_policy,
    );
    let app = build_router(state, &config.static_dir);

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("could not bind {}", config.socket_addr()))?;
    info!(addr = %config.socket_addr(), "app running");
    axum::serve(listener, app).await?;
    Ok(())
}
