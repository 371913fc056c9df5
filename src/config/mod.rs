use crate::constants::{
    DEFAULT_BUDGET_URL, DEFAULT_EVENTS_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, LOG_FILE_NAME, env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Published events sheet (CSV URL) or a local CSV export.
    #[serde(default = "default_events_url")]
    pub events_url: String,
    /// Published budget sheet (CSV URL) or a local CSV export.
    #[serde(default = "default_budget_url")]
    pub budget_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for sheet requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_events_url() -> String {
    DEFAULT_EVENTS_URL.to_string()
}

fn default_budget_url() -> String {
    DEFAULT_BUDGET_URL.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            events_url: default_events_url(),
            budget_url: default_budget_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the published sheet URLs are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `CLUB_SCHEDULE_EVENTS_URL` - Override events sheet location
    /// - `CLUB_SCHEDULE_BUDGET_URL` - Override budget sheet location
    /// - `CLUB_SCHEDULE_LOG_FILE` - Override log file path
    /// - `CLUB_SCHEDULE_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies the `CLUB_SCHEDULE_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(events_url) = std::env::var(env_vars::EVENTS_URL) {
            self.events_url = events_url;
        }

        if let Ok(budget_url) = std::env::var(env_vars::BUDGET_URL) {
            self.budget_url = budget_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(timeout) = std::env::var(env_vars::HTTP_TIMEOUT) {
            match timeout.parse::<u64>() {
                Ok(seconds) => self.http_timeout_seconds = seconds,
                Err(_) => warn!(
                    "Ignoring {}={timeout}, not a number of seconds",
                    env_vars::HTTP_TIMEOUT
                ),
            }
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.events_url, &self.budget_url, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Without a config file the defaults are shown
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let has_file = Path::new(&config_path).exists();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !has_file {
            println!("(No config file, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Events Sheet:");
        println!("{}", config.events_url);
        println!("────────────────────────────────────");
        println!("Budget Sheet:");
        println!("{}", config.budget_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            events_url: self.events_url.trim().to_string(),
            budget_url: self.budget_url.trim().to_string(),
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path. Environment overrides are not applied.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
