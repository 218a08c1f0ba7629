use crate::config::{AppConfig, DEFAULT_LOG_FILE};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output goes for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

/// A configured file always wins. Otherwise headless runs use stderr, and the
/// terminal UI, which owns the screen, falls back to the default log file.
pub fn log_sink(config: &AppConfig, headless: bool) -> LogSink {
    match &config.log_file {
        Some(path) => LogSink::File(path.clone()),
        None if headless => LogSink::Stderr,
        None => LogSink::File(PathBuf::from(DEFAULT_LOG_FILE)),
    }
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over the
/// default level.
pub fn init_logging(config: &AppConfig, headless: bool) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_sink(config, headless) {
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| eyre!("Failed to install logger: {e}"))
        }
        LogSink::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| eyre!("Failed to install logger: {e}")),
    }
}
