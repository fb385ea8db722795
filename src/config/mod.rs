use crate::constants::{self, defaults};
use crate::data_fetcher::processors::NullRestPolicy;
use crate::error::AppError;
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Schedule page URL with `{season}` and `{month}` placeholders.
    #[serde(default = "default_source_url_template")]
    pub source_url_template: String,
    /// Season identified by the calendar year it ends in.
    #[serde(default = "default_season")]
    pub season: i32,
    /// Months fetched, in order, to assemble a full season.
    #[serde(default = "default_season_months")]
    pub season_months: Vec<String>,
    /// Local CSV cache of the raw season table.
    #[serde(default = "default_cache_path")]
    pub cache_path: String,
    /// Destination of the rest summary.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Whether team-games without a preceding game reach the aggregator.
    #[serde(default)]
    pub null_rest_policy: NullRestPolicy,
    /// HTTP timeout in seconds for schedule requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_source_url_template() -> String {
    defaults::SOURCE_URL_TEMPLATE.to_string()
}

fn default_season() -> i32 {
    defaults::SEASON
}

fn default_season_months() -> Vec<String> {
    defaults::SEASON_MONTHS.iter().map(|m| m.to_string()).collect()
}

fn default_cache_path() -> String {
    defaults::CACHE_PATH.to_string()
}

fn default_output_path() -> String {
    defaults::OUTPUT_PATH.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_url_template: default_source_url_template(),
            season: default_season(),
            season_months: default_season_months(),
            cache_path: default_cache_path(),
            output_path: default_output_path(),
            output_format: OutputFormat::default(),
            null_rest_policy: NullRestPolicy::default(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location and validates it.
    /// Falls back to built-in defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `NBA_REST_SOURCE_URL_TEMPLATE` - Override the schedule page URL template
    /// - `NBA_REST_SEASON` - Override the season year
    /// - `NBA_REST_CACHE_PATH` - Override the raw data cache path
    /// - `NBA_REST_OUTPUT_PATH` - Override the summary output path
    /// - `NBA_REST_LOG_FILE` - Override log file path
    /// - `NBA_REST_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or invalid
    pub async fn load() -> Result<Self, AppError> {
        let config = Self::load_unvalidated().await?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`] but skips validation, for callers that apply
    /// further overrides (command line flags) before validating.
    pub async fn load_unvalidated() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            debug!("Loading config from {config_path}");
            Self::load_from_path(&config_path).await?
        } else {
            debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Overrides fields from `NBA_REST_*` environment variables.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(template) = std::env::var("NBA_REST_SOURCE_URL_TEMPLATE") {
            self.source_url_template = template;
        }

        if let Some(season) = std::env::var("NBA_REST_SEASON")
            .ok()
            .and_then(|s| s.parse::<i32>().ok())
        {
            self.season = season;
        }

        if let Ok(cache_path) = std::env::var("NBA_REST_CACHE_PATH") {
            self.cache_path = cache_path;
        }

        if let Ok(output_path) = std::env::var("NBA_REST_OUTPUT_PATH") {
            self.output_path = output_path;
        }

        if let Ok(log_file_path) = std::env::var("NBA_REST_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("NBA_REST_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the effective configuration settings to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Source URL Template:");
        println!("{}", self.source_url_template);
        println!("────────────────────────────────────");
        println!("Season:");
        println!("{} ({})", self.season, self.season_months.join(", "));
        println!("────────────────────────────────────");
        println!("Cache Path:");
        println!("{}", self.cache_path);
        println!("────────────────────────────────────");
        println!("Output:");
        println!("{} ({:?})", self.output_path, self.output_format);
        println!("────────────────────────────────────");
        println!("Null Rest Policy:");
        println!("{:?}", self.null_rest_policy);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", defaults::LOG_FILE_NAME);
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        info!("Configuration saved to {path}");
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
season = 2017
season_months = ["October", "November"]
cache_path = "cache/nba-2017.csv"
output_format = "json"
null_rest_policy = "retain"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.season, 2017);
        assert_eq!(config.season_months, vec!["October", "November"]);
        assert_eq!(config.cache_path, "cache/nba-2017.csv");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.null_rest_policy, NullRestPolicy::Retain);
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        // Fields absent from the file keep their defaults
        assert_eq!(config.output_path, defaults::OUTPUT_PATH);
        assert_eq!(config.source_url_template, defaults::SOURCE_URL_TEMPLATE);
        assert_eq!(config.http_timeout_seconds, 30);
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            season: 2019,
            output_format: OutputFormat::Json,
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();
        assert!(config_path.exists());

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "season = [2016").await.unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var("NBA_REST_SEASON", "2018");
            std::env::set_var("NBA_REST_CACHE_PATH", "/tmp/nba-cache.csv");
            std::env::set_var("NBA_REST_HTTP_TIMEOUT", "not-a-number");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var("NBA_REST_SEASON");
            std::env::remove_var("NBA_REST_CACHE_PATH");
            std::env::remove_var("NBA_REST_HTTP_TIMEOUT");
        }

        assert_eq!(config.season, 2018);
        assert_eq!(config.cache_path, "/tmp/nba-cache.csv");
        assert_eq!(config.http_timeout_seconds, 30);
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("nba_rest"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("nba_rest"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
