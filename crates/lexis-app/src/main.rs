use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lexis_config::Config;
use lexis_core::DictionarySource;
use lexis_http::HttpFetcher;
use lexis_lang_english::EnglishDictionary;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

use self::state::AppState;

#[derive(Parser)]
#[command(name = "lexis", about = "Dictionary entry lookup service")]
struct Cli {
    /// Bind address, overrides LEXIS_HOST
    #[arg(long)]
    host: Option<String>,
    /// HTTP port, overrides LEXIS_PORT
    #[arg(long)]
    port: Option<u16>,
    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let mut config = Config::new();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let fetcher = HttpFetcher::new(&config.upstream).context("Failed to build HTTP client")?;
    let source = EnglishDictionary::new(Arc::new(fetcher), config.upstream.clone(), config.cache);

    let metadata = source.metadata();
    tracing::info!(
        "Serving {} ({}), cache ttl {}s / sweep above {} entries",
        metadata.name,
        metadata.language,
        config.cache.ttl_secs,
        config.cache.max_entries
    );

    let state = Arc::new(AppState::new(Arc::new(source)));
    let app = routes::router(state).layer(CorsLayer::permissive());

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await
        .context("Server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
