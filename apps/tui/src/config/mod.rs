#[allow(clippy::module_inception)]
mod config;

pub use config::{
    init_app_config, parse_center, AppConfig, ConfigError, DEFAULT_LOG_FILE, DEFAULT_SPAN_M,
};
