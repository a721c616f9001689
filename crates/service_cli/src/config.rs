//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line arguments.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use maths_core::binary::hex_string_to_bytes;
use maths_random::Algorithm;
use serde::Deserialize;
use thiserror::Error;

/// File read when no `--config` path is given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "uncommons.toml";

const ENV_ALGORITHM: &str = "UNCOMMONS_ALGORITHM";
const ENV_LOG_LEVEL: &str = "UNCOMMONS_LOG_LEVEL";
const ENV_SAMPLES: &str = "UNCOMMONS_SAMPLES";
const ENV_SEED_HEX: &str = "UNCOMMONS_SEED_HEX";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid sample count: {0}. Must be at least 1")]
    InvalidSamples(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Unknown algorithm: {0}. Run `uncommons algorithms` for the list")]
    UnknownAlgorithm(String),

    #[error("Invalid seed hex: {0}")]
    InvalidSeedHex(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
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

/// Resolved settings shared by every command
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Generator used by `feed`, `sample` and `freeze`
    #[serde(deserialize_with = "deserialize_algorithm")]
    pub algorithm: Algorithm,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Number of draws taken by `sample`
    pub samples: usize,
    /// Explicit seed; drawn from the default seed source when absent
    pub seed_hex: Option<String>,
}

fn deserialize_algorithm<'de, D>(deserializer: D) -> Result<Algorithm, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_algorithm(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_algorithm(name: &str) -> Result<Algorithm, ConfigError> {
    Algorithm::from_str(name).map_err(|_| ConfigError::UnknownAlgorithm(name.to_string()))
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::MersenneTwister,
            log_level: LogLevel::Info,
            samples: 10_000,
            seed_hex: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables looked up through `var`
    pub fn merge_env<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(algorithm) = var(ENV_ALGORITHM) {
            self.algorithm = parse_algorithm(&algorithm)?;
        }
        if let Some(log_level) = var(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Some(samples) = var(ENV_SAMPLES) {
            self.samples = samples.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} is not a count: {}", ENV_SAMPLES, samples))
            })?;
        }
        if let Some(seed_hex) = var(ENV_SEED_HEX) {
            self.seed_hex = Some(seed_hex);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(algorithm) = &cli.algorithm {
            self.algorithm = parse_algorithm(algorithm)?;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(samples) = cli.samples {
            self.samples = samples;
        }
        if let Some(seed_hex) = &cli.seed_hex {
            self.seed_hex = Some(seed_hex.clone());
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::InvalidSamples(self.samples));
        }
        self.seed_bytes()?;
        Ok(())
    }

    /// Decoded explicit seed, if one is configured
    pub fn seed_bytes(&self) -> Result<Option<Vec<u8>>, ConfigError> {
        self.seed_hex
            .as_deref()
            .map(|hex| {
                hex_string_to_bytes(hex.trim()).map_err(|e| ConfigError::InvalidSeedHex(e.to_string()))
            })
            .transpose()
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Algorithm override
    pub algorithm: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
    /// Sample count override
    pub samples: Option<usize>,
    /// Seed override
    pub seed_hex: Option<String>,
}

/// Build configuration from all sources, reading the process environment
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, var: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_file = Path::new(DEFAULT_CONFIG_FILE);
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if default_file.is_file() => CliConfig::from_file(default_file)?,
        None => CliConfig::default(),
    };

    config.merge_env(var)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
