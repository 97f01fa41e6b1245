use std::sync::Arc;

use anyhow::Context;
use hello_world_api::{routes, AppState, Config, SeaOrmSessionFactory, SessionFactory};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads `.env` as well, so it has to run before the log filter is resolved.
    let config = Config::from_env().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hello_world_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = Arc::new(config);
    let sessions: Arc<dyn SessionFactory> = Arc::new(SeaOrmSessionFactory::from_config(&config));
    let app = routes::router(AppState::new(config.clone(), sessions));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
    }
    info!("shutting down");
}
