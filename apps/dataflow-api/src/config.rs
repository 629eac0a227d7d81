//! Service configuration loaded from the environment

use std::str::FromStr;

use thiserror::Error;

use crate::logging::{LogFormat, LoggingConfig};

/// Default request body limit (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1 << 20;

/// Errors raised while reading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the HTTP service
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host (default: 0.0.0.0)
    pub host: String,
    /// Bind port (default: 8080)
    pub port: u16,
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            logging: LoggingConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Read configuration from process environment variables
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `DATAFLOW_HOST` | `0.0.0.0` |
    /// | `DATAFLOW_PORT` | `8080` |
    /// | `DATAFLOW_MAX_BODY_BYTES` | `1048576` |
    /// | `DATAFLOW_LOG_LEVEL` | `info` |
    /// | `DATAFLOW_LOG_FORMAT` | `pretty` |
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first variable that
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("DATAFLOW_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "DATAFLOW_PORT")?.unwrap_or(defaults.port),
            max_body_bytes: parse_var(&lookup, "DATAFLOW_MAX_BODY_BYTES")?
                .unwrap_or(defaults.max_body_bytes),
            logging: LoggingConfig {
                level: lookup("DATAFLOW_LOG_LEVEL").unwrap_or(defaults.logging.level),
                format: parse_var::<LogFormat, _>(&lookup, "DATAFLOW_LOG_FORMAT")?
                    .unwrap_or(defaults.logging.format),
            },
        })
    }

    /// `host:port` string to bind, resolved by the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(err) => Err(ConfigError::InvalidValue {
                var,
                reason: err.to_string(),
                value,
            }),
        },
    }
}
