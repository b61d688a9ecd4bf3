//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command line flags.

use std::path::PathBuf;
use std::str::FromStr;

use ratecard_core::math::DEFAULT_VOLUME_DIVISOR;
use ratecard_core::types::Currency;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming the store file.
pub const ENV_STORE: &str = "RATECARD_STORE";
/// Environment variable for the log level.
pub const ENV_LOG_LEVEL: &str = "RATECARD_LOG_LEVEL";
/// Environment variable for the display currency.
pub const ENV_CURRENCY: &str = "RATECARD_CURRENCY";
/// Environment variable for the volumetric divisor.
pub const ENV_VOLUME_DIVISOR: &str = "RATECARD_VOLUME_DIVISOR";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid volume divisor: {0}. Must be a positive number")]
    InvalidDivisor(String),

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Path of the JSON store file
    pub store_path: PathBuf,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Currency used to format prices
    #[serde(deserialize_with = "deserialize_currency")]
    pub currency: Currency,
    /// Divisor turning cm³ into volumetric kg
    pub volume_divisor: f64,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_currency<'de, D>(deserializer: D) -> Result<Currency, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Currency::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("ratecard.json"),
            log_level: LogLevel::default(),
            currency: Currency::default(),
            volume_divisor: DEFAULT_VOLUME_DIVISOR,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_STORE) {
            self.store_path = PathBuf::from(path);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(code) = lookup(ENV_CURRENCY) {
            self.currency = parse_currency(&code)?;
        }
        if let Some(divisor) = lookup(ENV_VOLUME_DIVISOR) {
            self.volume_divisor = parse_divisor(&divisor)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.volume_divisor.is_finite() && self.volume_divisor > 0.0) {
            return Err(ConfigError::InvalidDivisor(self.volume_divisor.to_string()));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(path) = &cli.store {
            self.store_path = path.clone();
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(code) = &cli.currency {
            self.currency = parse_currency(code)?;
        }
        if let Some(divisor) = cli.volume_divisor {
            self.volume_divisor = divisor;
        }
        Ok(())
    }
}

fn parse_currency(code: &str) -> Result<Currency, ConfigError> {
    Currency::from_str(code).map_err(|_| ConfigError::InvalidCurrency(code.to_string()))
}

fn parse_divisor(text: &str) -> Result<f64, ConfigError> {
    text.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidDivisor(text.to_string()))
}

/// Configuration-related command line arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Store file override
    pub store: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Currency override
    pub currency: Option<String>,
    /// Volume divisor override
    pub volume_divisor: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
