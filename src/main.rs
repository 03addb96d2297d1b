use habitly_auth::{
    config::Settings,
    logging::init_tracing,
    routes::{AppState, build_app},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env()?;
    let app = build_app(AppState::simulated(settings.submit_delay));

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!(
        bind_addr = %settings.bind_addr,
        submit_delay = ?settings.submit_delay,
        "Habitly auth forms listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
