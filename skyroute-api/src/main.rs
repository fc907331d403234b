use anyhow::Context;
use skyroute_api::{app, AppState};
use skyroute_store::{app_config::Config, Dataset};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let default_filter =
        "skyroute_api=debug,skyroute_store=info,tower_http=debug,axum::rejection=trace";
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting SkyRoute API on port {}", config.server.port);

    let dataset = Dataset::load(&config.data).context("Failed to load dataset")?;
    let app = app(AppState::new(dataset));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
