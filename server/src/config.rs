//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values there count as set.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{ApiConfig, DEFAULT_API_BASE};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {value}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Booking backend base URL published to the browser.
    pub api_base: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, api_base: DEFAULT_API_BASE.to_owned() }
    }
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BOOKING_API_URL`: default `/api`, trailing slash trimmed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("BOOKING_API_URL").ok().as_deref(),
        )
    }

    fn from_values(port: Option<&str>, api_base: Option<&str>) -> Result<Self, ConfigError> {
        let port = parse_port(port)?;
        let api_base = ApiConfig::new(api_base.unwrap_or(DEFAULT_API_BASE)).base_url().to_owned();
        Ok(Self { port, api_base })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
