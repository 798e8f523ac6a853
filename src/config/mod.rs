use std::env;
use std::path::PathBuf;

use crate::error::AppError;
use crate::range::WeekStart;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub query: QueryConfig,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Query-core configuration: week convention and storage namespace
#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub week_start: WeekStart,
    pub namespace: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database = DatabaseConfig {
            path: PathBuf::from(
                env::var("DATABASE_PATH").unwrap_or_else(|_| "./data/query_state.db".to_string()),
            ),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let week_start = match env::var("WEEK_START") {
            Ok(value) => value.parse().map_err(|_| AppError::Config {
                message: format!("WEEK_START must be 'monday' or 'sunday', got '{}'", value),
            })?,
            Err(_) => WeekStart::default(),
        };

        let query = QueryConfig {
            week_start,
            namespace: env::var("QUERY_NAMESPACE").unwrap_or_else(|_| "query".to_string()),
        };

        Ok(Config {
            database,
            logging,
            query,
        })
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            namespace: "query".to_string(),
        }
    }
}
