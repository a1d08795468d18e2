//! Service configuration loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::pip::DEFAULT_NAME_PROPERTY;

/// What to do when the boundary dataset cannot be read or parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
pub enum LoadPolicy {
    /// Refuse to start
    #[default]
    #[serde(rename = "fail")]
    #[value(name = "fail")]
    FailFast,
    /// Log the error and serve empty results
    #[serde(rename = "empty")]
    #[value(name = "empty")]
    DegradeToEmpty,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub listen: String,
    pub dataset: PathBuf,
    /// Feature property holding the region name
    pub name_property: String,
    pub on_load_error: LoadPolicy,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:9000".to_string(),
            dataset: PathBuf::from("IndianStates.json"),
            name_property: DEFAULT_NAME_PROPERTY.to_string(),
            on_load_error: LoadPolicy::FailFast,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.on_load_error, LoadPolicy::FailFast);
        assert_eq!(config.name_property, "NAME_1");
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            listen = "127.0.0.1:8080"
            dataset = "/data/states.geojson"
            on_load_error = "empty"
            "#,
        )
        .unwrap();
        assert_eq!(config.listen, "127.0.0.1:8080");
        assert_eq!(config.dataset, PathBuf::from("/data/states.geojson"));
        assert_eq!(config.on_load_error, LoadPolicy::DegradeToEmpty);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_fail_policy_name() {
        let config = Config::from_toml(r#"on_load_error = "fail""#).unwrap();
        assert_eq!(config.on_load_error, LoadPolicy::FailFast);
    }

    #[test]
    fn test_invalid_policy() {
        assert!(matches!(
            Config::from_toml(r#"on_load_error = "ignore""#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load_from_file("/nonexistent/sthana.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
