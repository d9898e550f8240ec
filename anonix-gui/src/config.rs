use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::filter;

use crate::app::toast::DEFAULT_TOAST_TIMEOUT;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const API_URL_ENV: &str = "ANONIX_API_URL";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Base url of the gateway API, e.g. `http://localhost:8080/api/v1`.
    pub api_base_url: Option<String>,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Log at debug level if true and no log level is set.
    pub debug: Option<bool>,
    /// How long a toast stays on screen, in milliseconds.
    pub toast_timeout_ms: Option<u64>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    /// Same as [`Config::from_file`] but a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::NotFound) => Ok(Self::default()),
            res => res,
        }
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    pub fn toast_timeout(&self) -> Duration {
        self.toast_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOAST_TIMEOUT)
    }
}

/// Picks the gateway url: command line, then environment, then config file,
/// then [`DEFAULT_API_BASE_URL`]. The result has no trailing slash.
pub fn resolve_api_url(
    cli: Option<&str>,
    env: Option<&str>,
    config: &Config,
) -> Result<String, ConfigError> {
    let raw = cli
        .or(env)
        .or(config.api_base_url.as_deref())
        .unwrap_or(DEFAULT_API_BASE_URL);
    let url = raw.trim().trim_end_matches('/');
    reqwest::Url::parse(url)
        .map_err(|e| ConfigError::InvalidField("api_base_url", format!("'{}': {}", url, e)))?;
    Ok(url.to_string())
}

/// `LOG_LEVEL` from the environment wins over the config file.
pub fn resolve_log_level(
    env: Option<&str>,
    config: &Config,
) -> Result<filter::LevelFilter, ConfigError> {
    match env {
        Some(l) => filter::LevelFilter::from_str(l).map_err(|e| {
            ConfigError::InvalidField("LOG_LEVEL", format!("'{}': {}", l, e))
        }),
        None => config.log_level(),
    }
}

#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Config field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let mut config = Config::default();
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::INFO));
        config.debug = Some(true);
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::DEBUG));
        config.log_level = Some("trace".to_string());
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::TRACE));
        config.log_level = Some("loud".to_string());
        assert!(matches!(
            config.log_level(),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }

    #[test]
    fn test_resolve_log_level() {
        let config = Config {
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_log_level(Some("warn"), &config),
            Ok(filter::LevelFilter::WARN)
        );
        assert_eq!(
            resolve_log_level(None, &config),
            Ok(filter::LevelFilter::TRACE)
        );
        assert!(resolve_log_level(Some("nope"), &config).is_err());
    }

    #[test]
    fn test_resolve_api_url() {
        let config = Config {
            api_base_url: Some("http://config:1/api/v1/".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_api_url(Some("http://cli/api/v1/"), Some("http://env"), &config).unwrap(),
            "http://cli/api/v1"
        );
        assert_eq!(
            resolve_api_url(None, Some("http://env"), &config).unwrap(),
            "http://env"
        );
        assert_eq!(
            resolve_api_url(None, None, &config).unwrap(),
            "http://config:1/api/v1"
        );
        assert_eq!(
            resolve_api_url(None, None, &Config::default()).unwrap(),
            DEFAULT_API_BASE_URL
        );
        assert!(resolve_api_url(Some("not a url"), None, &config).is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = std::env::temp_dir().join(format!("anonix-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(DEFAULT_FILE_NAME);

        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));
        assert_eq!(Config::load(&path), Ok(Config::default()));

        std::fs::write(
            &path,
            "api_base_url = \"http://gw/api/v1\"\nlog_level = \"debug\"\ntoast_timeout_ms = 1500\n",
        )
        .unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("http://gw/api/v1"));
        assert_eq!(config.toast_timeout(), Duration::from_millis(1500));

        std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::InvalidField("log_level", _))
        ));

        std::fs::write(&path, "log_level = [").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::ReadingFile(_))
        ));

        std::fs::remove_dir_all(dir).unwrap();
    }
}
