use std::io;
use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FILE_PREFIX: &str = "qiskit-api.log";

pub fn init_logging(log_dir: &Path) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    // Daily rotation, suffixed with the date
    let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_timer(fmt::time::LocalTime::rfc_3339())
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .json();

    let stdout_layer = fmt::layer()
        .with_writer(io::stdout)
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .pretty();

    let file_filter = EnvFilter::try_from_env("FILE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("debug"))
        .add_directive("hyper=info".parse()?)
        .add_directive("qiskit_api=trace".parse()?);

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive("hyper=warn".parse()?)
        .add_directive("tower=warn".parse()?)
        .add_directive("qiskit_api=info".parse()?);

    tracing_subscriber::registry()
        .with(file_layer.with_filter(file_filter))
        .with(stdout_layer.with_filter(console_filter))
        .try_init()?;

    tracing::info!("qiskit-api logging initialized");
    tracing::info!(log_dir = %log_dir.display(), "Log files are stored in the log directory");

    Ok(guard)
}
