/// Logging setup using tracing
///
/// Logs go to `<data_local_dir>/botaniq/logs/botaniq.log` (rotated daily).
/// The level is controlled by the `BOTANIQ_LOG` environment variable:
///
/// ```bash
/// BOTANIQ_LOG=debug botaniq
/// ```
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const LOG_ENV: &str = "BOTANIQ_LOG";
const DEFAULT_FILTER: &str = "botaniq=info,warn";

/// Initialize the global tracing subscriber
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "botaniq.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("🌱 botaniQ starting, logs in {}", log_dir.display());

    Ok(log_dir)
}

/// Directory where log files are written
fn log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().ok_or(Error::NoDirectory("local data"))?;
    Ok(base.join("botaniq").join("logs"))
}
