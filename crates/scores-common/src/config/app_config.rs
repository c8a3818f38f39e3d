//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use scores_core::ChannelId;
use std::env;
use std::path::PathBuf;

use crate::telemetry::TracingConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    /// Channel whose reactions are scored
    pub channel_id: ChannelId,
    pub sources: SourceConfig,
    pub output: OutputKind,
    /// Explicit log format; derived from the environment when unset
    pub log_format: Option<LogFormat>,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Table exports the runner reads
///
/// Each file holds a JSON array of rows, each row an array of cells, the
/// first row being the header.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Channel configuration table (channel, sheet basename, config JSON, leaderboard link)
    pub config_table: PathBuf,
    /// User directory table (id, name)
    pub users_table: PathBuf,
    /// Reaction log table
    pub reactions_table: PathBuf,
}

/// What the runner prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    #[default]
    Leaderboard,
    Ledger,
    Podium,
    Help,
}

impl OutputKind {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "leaderboard" => Some(Self::Leaderboard),
            "ledger" => Some(Self::Ledger),
            "podium" => Some(Self::Podium),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "reaction-scores".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let channel_id = ChannelId::parse(&required("SCORES_CHANNEL_ID")?)
            .map_err(|e| ConfigError::InvalidValue("SCORES_CHANNEL_ID", e.to_string()))?;

        let output = match lookup("SCORES_OUTPUT") {
            Some(raw) => OutputKind::parse(&raw)
                .ok_or(ConfigError::InvalidValue("SCORES_OUTPUT", raw))?,
            None => OutputKind::default(),
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => Some(match raw.trim().to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::InvalidValue("LOG_FORMAT", raw)),
            }),
            None => None,
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            channel_id,
            sources: SourceConfig {
                config_table: required("SCORES_CONFIG_TABLE")?.into(),
                users_table: required("SCORES_USERS_TABLE")?.into(),
                reactions_table: required("SCORES_REACTIONS_TABLE")?.into(),
            },
            output,
            log_format,
        })
    }

    /// Tracing setup matching the environment and log format
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let mut config = match self.app.env {
            Environment::Production => TracingConfig::production(),
            Environment::Development => TracingConfig::development(),
            Environment::Staging => TracingConfig::default(),
        };
        if let Some(format) = self.log_format {
            config.json = format == LogFormat::Json;
        }
        config
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
