use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive, e.g. "warn" or "trading_calendar_core=debug".
    pub level: String,
    pub file: Option<PathBuf>,
    /// The TUI owns the terminal, so stderr output is suppressed there.
    pub interactive: bool,
}

/// Installs the global subscriber.
///
/// Logs go to `file` when set, otherwise to stderr unless running
/// interactively, in which case nothing is installed. The returned guard
/// must be held until exit so buffered file output gets flushed.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| anyhow!("Invalid log filter '{}': {}", config.level, e))?;

    if let Some(path) = &config.file {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| std::path::Path::new("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| anyhow!("Log file path has no file name: {}", path.display()))?;
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .try_init()?;
        tracing::info!(file = %path.display(), level = %config.level, "Logging initialized");
        return Ok(Some(guard));
    }

    if config.interactive {
        return Ok(None);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()?;
    Ok(None)
}
