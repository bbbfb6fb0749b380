use std::env;
use std::fmt;

use crate::matching::{MatchingConfig, MissingDataPolicy};

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_RESULT_LIMIT: usize = 10;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the command-line tool.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub matching: MatchingSettings,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("MATCH_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let missing_data_policy = match env::var("MATCH_MISSING_DATA_POLICY") {
            Ok(raw) => MissingDataPolicy::parse(&raw)
                .ok_or(ConfigError::InvalidMissingDataPolicy { value: raw })?,
            Err(_) => MissingDataPolicy::default(),
        };

        let default_limit = match env::var("MATCH_DEFAULT_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|source| ConfigError::InvalidLimit { source })?,
            Err(_) => DEFAULT_RESULT_LIMIT,
        };

        let log_level =
            env::var("MATCH_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            environment,
            matching: MatchingSettings {
                missing_data_policy,
                default_limit,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }

    /// Engine configuration derived from the loaded settings.
    pub fn matching_config(&self) -> MatchingConfig {
        MatchingConfig {
            missing_data_policy: self.matching.missing_data_policy,
            ..MatchingConfig::default()
        }
    }
}

/// Settings that shape matching and ranking output.
#[derive(Debug, Clone)]
pub struct MatchingSettings {
    pub missing_data_policy: MissingDataPolicy,
    /// Result count used when a ranking command does not pass `--limit`.
    pub default_limit: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMissingDataPolicy { value: String },
    InvalidLimit { source: std::num::ParseIntError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMissingDataPolicy { value } => write!(
                f,
                "MATCH_MISSING_DATA_POLICY must be 'pass' or 'fail', got '{value}'"
            ),
            ConfigError::InvalidLimit { .. } => {
                write!(f, "MATCH_DEFAULT_LIMIT must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidMissingDataPolicy { .. } => None,
            ConfigError::InvalidLimit { source } => Some(source),
        }
    }
}
