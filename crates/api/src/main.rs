use anyhow::Context;

use rental_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rental_observability::init().context("invalid logging configuration")?;

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = rental_api::app::build_app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);
    tracing::info!("press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c; shutting down");
    }
}
