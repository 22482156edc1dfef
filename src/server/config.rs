//! Environment-driven application configuration.
//!
//! Configuration is loaded once at startup and handed to every component that needs it.
//! All problems are collected and reported together so a misconfigured deployment can
//! be fixed in one pass.

use std::{fmt, path::PathBuf, time::Duration};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_CLIENT_DIST_DIR: &str = "dist/public";
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60;
const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
const MIN_SESSION_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    /// Store location; the persistence gateway stays not-ready when unset.
    pub database_url: Option<String>,
    pub cors_origins: Vec<String>,
    pub log_level: LogLevel,
    pub client_dist_dir: PathBuf,
    pub max_body_bytes: usize,
    pub rate_limit_window: Duration,
    pub rate_limit_max_requests: u32,
}

impl Config {
    /// Loads configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable present and valid
    /// - `Err(AppError::ConfigErr(ConfigError::Invalid))` - One or more variables invalid
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut errors = Vec::new();

        let environment = match get("APP_ENV").or_else(|| get("NODE_ENV")).as_deref() {
            None | Some("development") => Environment::Development,
            Some("test") => Environment::Test,
            Some("production") => Environment::Production,
            Some(other) => {
                errors.push(invalid(
                    "APP_ENV",
                    format!("'{}' is not one of development, test, production", other),
                ));
                Environment::Development
            }
        };

        let port = parse_or(&get, "PORT", DEFAULT_PORT, &mut errors);

        let database_url = get("DATABASE_URL");
        if let Some(url) = &database_url {
            if let Err(e) = Url::parse(url) {
                errors.push(invalid("DATABASE_URL", e.to_string()));
            }
        }

        // Checked only, no sessions are issued.
        match get("SESSION_SECRET") {
            Some(secret) if secret.len() < MIN_SESSION_SECRET_LEN => errors.push(invalid(
                "SESSION_SECRET",
                format!("must be at least {} characters", MIN_SESSION_SECRET_LEN),
            )),
            None if environment.is_production() => {
                errors.push(ConfigError::MissingEnvVar("SESSION_SECRET".to_string()))
            }
            _ => {}
        }

        let cors_origins: Vec<String> = get("CORS_ORIGIN")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string())
            .split(',')
            .map(|origin| origin.trim().trim_end_matches('/').to_string())
            .filter(|origin| !origin.is_empty())
            .collect();
        for origin in &cors_origins {
            if let Err(e) = Url::parse(origin) {
                errors.push(invalid("CORS_ORIGIN", format!("'{}': {}", origin, e)));
            }
        }

        let log_level = match get("LOG_LEVEL").as_deref() {
            None | Some("info") => LogLevel::Info,
            Some("error") => LogLevel::Error,
            Some("warn") => LogLevel::Warn,
            Some("debug") => LogLevel::Debug,
            Some(other) => {
                errors.push(invalid(
                    "LOG_LEVEL",
                    format!("'{}' is not one of error, warn, info, debug", other),
                ));
                LogLevel::Info
            }
        };

        let max_body_bytes = parse_or(&get, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES, &mut errors);

        let window_secs: u64 = parse_or(
            &get,
            "RATE_LIMIT_WINDOW_SECS",
            DEFAULT_RATE_LIMIT_WINDOW_SECS,
            &mut errors,
        );
        if window_secs == 0 {
            errors.push(invalid("RATE_LIMIT_WINDOW_SECS", "must be greater than zero"));
        }

        let rate_limit_max_requests: u32 = parse_or(
            &get,
            "RATE_LIMIT_MAX_REQUESTS",
            DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            &mut errors,
        );
        if rate_limit_max_requests == 0 {
            errors.push(invalid("RATE_LIMIT_MAX_REQUESTS", "must be greater than zero"));
        }

        if !errors.is_empty() {
            return Err(ConfigError::Invalid(errors).into());
        }

        Ok(Self {
            environment,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url,
            cors_origins,
            log_level,
            client_dist_dir: get("CLIENT_DIST_DIR")
                .unwrap_or_else(|| DEFAULT_CLIENT_DIST_DIR.to_string())
                .into(),
            max_body_bytes,
            rate_limit_window: Duration::from_secs(window_secs),
            rate_limit_max_requests,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn invalid(name: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn parse_or<T, G>(get: &G, name: &str, default: T, errors: &mut Vec<ConfigError>) -> T
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            errors.push(invalid(name, format!("'{}': {}", raw, e)));
            default
        }),
    }
}
