use crate::map::LatLng;
use crate::seed::WARD_CENTER;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_SPAN_M: f64 = 4000.0;
pub const DEFAULT_LOG_FILE: &str = "facility-map.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid map centre {0:?}, expected LAT,LNG")]
    InvalidCenter(String),
    #[error("Invalid map span {0:?}, expected a positive number of metres")]
    InvalidSpan(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_path: Option<PathBuf>,
    pub center: LatLng,
    pub span_m: f64,
    pub debug: bool,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let center = lookup("MAP_CENTER")
            .map(|value| parse_center(&value))
            .transpose()?
            .unwrap_or(WARD_CENTER);

        let span_m = lookup("MAP_SPAN_M")
            .map(|value| parse_span(&value))
            .transpose()?
            .unwrap_or(DEFAULT_SPAN_M);

        let debug = lookup("DEBUG").is_some_and(|value| value != "0" && !value.is_empty());

        // In debug mode logs always go somewhere; the TUI owns stdout and stderr.
        let log_file = lookup("LOG_FILE")
            .map(PathBuf::from)
            .or_else(|| debug.then(|| PathBuf::from(DEFAULT_LOG_FILE)));

        Ok(Self {
            data_path: lookup("FACILITY_DATA").map(PathBuf::from),
            center,
            span_m,
            debug,
            log_file,
        })
    }
}

/// Loads `.env` and reads the configuration.
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    dotenv().ok();
    Ok(AppConfig::from_env()?)
}

/// Parse `LAT,LNG`.
pub fn parse_center(value: &str) -> Result<LatLng, ConfigError> {
    let invalid = || ConfigError::InvalidCenter(value.to_string());
    let (lat, lng) = value.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    // The poles have no east-west extent to project onto.
    if !lat.is_finite() || lat.abs() >= 90.0 || !(-180.0..=180.0).contains(&lng) {
        return Err(invalid());
    }
    Ok(LatLng::new(lat, lng))
}

fn parse_span(value: &str) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(span) if span.is_finite() && span > 0.0 => Ok(span),
        _ => Err(ConfigError::InvalidSpan(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]).unwrap();
        assert_eq!(config.center, WARD_CENTER);
        assert!((config.span_m - DEFAULT_SPAN_M).abs() < f64::EPSILON);
        assert!(!config.debug);
        assert_eq!(config.log_file, None);
        assert_eq!(config.data_path, None);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("MAP_CENTER", "43.1, 141.4"),
            ("MAP_SPAN_M", "2500"),
            ("FACILITY_DATA", "data/facilities.json"),
            ("DEBUG", "1"),
        ])
        .unwrap();
        assert_eq!(config.center, LatLng::new(43.1, 141.4));
        assert!((config.span_m - 2500.0).abs() < f64::EPSILON);
        assert_eq!(config.data_path, Some(PathBuf::from("data/facilities.json")));
        assert_eq!(config.log_file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            parse_center("43.1"),
            Err(ConfigError::InvalidCenter("43.1".to_string()))
        );
        assert!(parse_center("95,141").is_err());
        assert!(parse_center("NaN,141").is_err());
        assert_eq!(
            config(&[("MAP_SPAN_M", "-3")]).unwrap_err(),
            ConfigError::InvalidSpan("-3".to_string())
        );
    }

    #[test]
    fn poles_are_not_a_valid_centre() {
        assert!(parse_center("90,141").is_err());
        assert!(parse_center("-90,0").is_err());
        assert_eq!(parse_center("89.5,0"), Ok(LatLng::new(89.5, 0.0)));
    }
}
