// src/config.rs

use std::env;
use std::fmt;
use std::net::SocketAddr;

use dotenvy::dotenv;

use crate::validation::ParseOptions;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub rust_log: String,
    pub log_dir: String,
    pub cors_origins: Vec<String>,
    /// Reject well-formed but impossible dates such as `2026-02-30`.
    pub strict_calendar_dates: bool,
}

/// A required variable is missing or an optional one does not parse.
#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has invalid value '{}'", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let bind_addr = match env::var("APP_ADDR") {
            Ok(value) => value.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
                key: "APP_ADDR",
                value,
            })?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let strict_calendar_dates = match env::var("STRICT_CALENDAR_DATES") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                key: "STRICT_CALENDAR_DATES",
                value,
            })?,
            Err(_) => false,
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            rust_log,
            log_dir,
            cors_origins,
            strict_calendar_dates,
        })
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict_calendar_dates: self.strict_calendar_dates,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
