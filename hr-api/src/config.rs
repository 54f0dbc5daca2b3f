//! Service configuration
//!
//! Everything comes from environment variables (a `.env` file is loaded by
//! `main` first). Unset or empty variables fall back to defaults; set but
//! malformed variables are rejected.

use std::fmt;
use std::str::FromStr;

use shared::error::AppError;
use sqlx::ConnectOptions;
use sqlx::mysql::MySqlConnectOptions;

use crate::services::SimulatedLatency;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Runs migrations at startup and logs every SQL statement
    Development,
    Production,
}

impl Environment {
    /// Only the exact value `development` selects development
    fn parse(value: &str) -> Self {
        if value == "development" {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MySQL connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    /// Upper bound of the connection pool
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Build sqlx connect options; statement logging only in development
    pub fn connect_options(&self, environment: Environment) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database);

        if environment.is_development() {
            options.log_statements(log::LevelFilter::Info)
        } else {
            options.disable_statement_logging()
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    /// Environment: development | production (env: ENVIRONMENT)
    pub environment: Environment,
    /// HTTP listen port
    pub http_port: u16,
    /// Artificial delay applied to every lookup
    pub latency: SimulatedLatency,
    /// Default log level when RUST_LOG is unset
    pub log_level: String,
    /// Directory for daily rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            non_empty(&lookup, name).unwrap_or_else(|| default.to_string())
        };

        let database = DatabaseConfig {
            host: var("DB_HOST", "127.0.0.1"),
            port: parse_var(&lookup, "DB_PORT", 3306)?,
            username: var("DB_USERNAME", "root"),
            password: var("DB_PASSWORD", ""),
            database: var("DB_DATABASE", "legacy_hr_api"),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 10)?,
        };

        let min_ms = parse_var(&lookup, "LATENCY_MIN_MS", SimulatedLatency::DEFAULT_MIN_MS)?;
        let max_ms = parse_var(&lookup, "LATENCY_MAX_MS", SimulatedLatency::DEFAULT_MAX_MS)?;
        let latency = SimulatedLatency::from_millis(min_ms, max_ms)
            .map_err(|e| AppError::config(format!("LATENCY_MIN_MS/LATENCY_MAX_MS: {e}")))?;

        Ok(Self {
            database,
            environment: Environment::parse(&var("ENVIRONMENT", "production")),
            http_port: parse_var(&lookup, "HTTP_PORT", 3000)?,
            latency,
            log_level: var("LOG_LEVEL", "info"),
            log_dir: non_empty(&lookup, "LOG_DIR"),
        })
    }
}

/// Value of `name`, with an empty value treated as unset
fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.is_empty())
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match non_empty(lookup, name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("{name} is invalid ({raw:?}): {e}"))),
    }
}
