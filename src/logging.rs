//! Structured logging setup with tracing.
//!
//! The terminal belongs to the TUI, so events go to a daily rolling file.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LoggingSettings, default_log_dir};

/// Environment variable that overrides `logging.level`.
pub const LOG_ENV: &str = "RETAG_LOG";

/// Initialize the logging system.
///
/// Returns the writer guard; dropping it flushes and stops the background
/// writer, so keep it alive until shutdown. `None` means logging is off.
pub fn init_logging(settings: &LoggingSettings) -> std::io::Result<Option<WorkerGuard>> {
    if !settings.enabled {
        return Ok(None);
    }
    let Some(log_dir) = settings.directory.clone().or_else(default_log_dir) else {
        return Ok(None);
    };
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "retag.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init();
    if installed.is_err() {
        return Ok(None);
    }

    tracing::info!(dir = %log_dir.display(), "Logging initialized");
    Ok(Some(guard))
}
