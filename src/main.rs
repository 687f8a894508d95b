use anyhow::Context;
use qiskit_api::{app, config::Config, logging, shutdown};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Flushes the file appender on drop
    let _log_guard = logging::init_logging(&config.log_dir).context("Failed to initialize logging")?;

    let app = app::router();

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;
    let addr = listener.local_addr()?;

    tracing::info!("🚀 Server started successfully");
    tracing::info!("    Health:     http://{}/", addr);
    tracing::info!("    Swagger UI: http://{}{}", addr, app::SWAGGER_UI_PATH);
    tracing::info!("    Redoc:      http://{}{}", addr, app::REDOC_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
