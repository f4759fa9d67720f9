// Logging setup
// The terminal owns stdout, so events go to a file in the temp directory

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE_NAME: &str = "floating-tab-bar.log";

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Install the global subscriber; keep the guard alive until exit to flush
pub fn init_logging() -> anyhow::Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(std::env::temp_dir(), LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    Ok(guard)
}
