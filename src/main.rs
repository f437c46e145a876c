mod adapters;

use std::{net::SocketAddr, sync::Arc};

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use adapters::http::{AppState, AppStateConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "jobbermed=info,jobbermed_board=info,jobbermed_storage=info,axum=info".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Hosted platforms expect us to listen on 0.0.0.0 and pass the port in
    // PORT. Priority: JOBBERMED_PORT -> PORT -> 3000.
    let bind = std::env::var("JOBBERMED_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("JOBBERMED_PORT")
        .or_else(|_| std::env::var("PORT"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);

    let web_dir = std::env::var("JOBBERMED_WEB_DIR").unwrap_or_else(|_| "web".to_string());

    // The feed source is a local file or an http(s) URL. A load failure is
    // not fatal: the shell still serves, the API answers 503.
    let feed =
        std::env::var("JOBBERMED_FEED").unwrap_or_else(|_| "data/master_jobs.json".to_string());
    let store = match load_store(&feed).await {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            warn!(%feed, error = %e, "feed load failed, starting without jobs");
            None
        }
    };

    let cfg = AppStateConfig { web_dir };
    let state = Arc::new(AppState::new(cfg, store));

    let app = adapters::http::router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("Server listening on http://{}", addr);
    info!("UI: / | Assets: /assets/* | Docs: /docs | OpenAPI: /api-docs/openapi.json");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn load_store(
    feed: &str,
) -> Result<jobbermed_board::JobStore, jobbermed_storage::FeedSourceError> {
    if feed.starts_with("http://") || feed.starts_with("https://") {
        jobbermed_storage::fetch_feed(feed).await
    } else {
        jobbermed_storage::read_feed(std::path::Path::new(feed)).await
    }
}
