use std::{net::SocketAddr, time::Duration};

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "HABITLY_BIND_ADDR";
pub const SUBMIT_DELAY_VAR: &str = "HABITLY_SUBMIT_DELAY_MS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a socket address such as 0.0.0.0:3000, got {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub submit_delay: Duration,
}

impl Settings {
    /// Reads settings from the process environment, loading `.env` first
    /// when one is present.
    #[tracing::instrument(name = "settings_load")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let settings = Self::from_lookup(|name| std::env::var(name).ok())?;

        tracing::debug!(
            bind_addr = %settings.bind_addr,
            submit_delay = ?settings.submit_delay,
            "Settings loaded"
        );

        Ok(settings)
    }

    /// Builds settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value,
                })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value: DEFAULT_BIND_ADDR.to_string(),
                })?,
        };

        let submit_delay_ms = match lookup(SUBMIT_DELAY_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDelay {
                    var: SUBMIT_DELAY_VAR,
                    value,
                })?,
            None => DEFAULT_SUBMIT_DELAY_MS,
        };

        Ok(Self {
            bind_addr,
            submit_delay: Duration::from_millis(submit_delay_ms),
        })
    }
}
