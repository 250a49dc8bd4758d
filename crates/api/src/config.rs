//! Server configuration.
//!
//! Everything is read from the process environment (after `.env` has been
//! loaded by the binary). Only `DATABASE_URL` is mandatory.
//!
//! | Variable | Default |
//! |---|---|
//! | `API_HOST` | `0.0.0.0` |
//! | `API_PORT` | `3000` |
//! | `DATABASE_URL` | required |
//! | `LOG_LEVEL` | `info` |
//! | `API_CORS_ORIGINS` | unset (no CORS layer); comma separated |
//! | `API_REQUEST_TIMEOUT_SECONDS` | `30` |
//! | `SLOT_MINUTES` | `60`; must divide a day evenly |
//! | `STAFF_SIGNUP_CODE` | unset (staff self-registration disabled) |

use eyre::{eyre, Result, WrapErr};
use paddock_core::slots::SlotGranularity;
use std::{env, str::FromStr};
use tracing::Level;

/// Settings for one server process.
///
/// ```no_run
/// use paddock_api::config::ApiConfig;
///
/// let config = ApiConfig::from_env().expect("configuration");
/// assert!(!config.database_url.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: Level,
    /// Origins allowed by the CORS layer; `None` disables the layer.
    pub cors_origins: Option<Vec<String>>,
    /// Per-request timeout, in seconds.
    pub request_timeout: u64,
    /// Lesson length used to cut availability into bookable slots.
    pub slot_granularity: SlotGranularity,
    /// Shared code that lets Instructor and Manager accounts self-register.
    pub staff_signup_code: Option<String>,
}

/// Parses `key` if set, otherwise uses `default`.
fn parsed_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value '{}'", key, raw)),
        None => Ok(default),
    }
}

impl ApiConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Fails when `DATABASE_URL` is missing or a numeric variable does not
    /// parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

        // Unknown levels fall back to info
        let log_level = lookup("LOG_LEVEL")
            .and_then(|level| Level::from_str(level.trim()).ok())
            .unwrap_or(Level::INFO);

        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect()
        });

        let slot_minutes: u32 = parsed_or(&lookup, "SLOT_MINUTES", 60)?;
        let slot_granularity = SlotGranularity::from_minutes(slot_minutes)
            .map_err(|e| eyre!("Invalid SLOT_MINUTES value: {}", e))?;

        let staff_signup_code = lookup("STAFF_SIGNUP_CODE")
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());

        Ok(Self {
            host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parsed_or(&lookup, "API_PORT", 3000)?,
            database_url,
            log_level,
            cors_origins,
            request_timeout: parsed_or(&lookup, "API_REQUEST_TIMEOUT_SECONDS", 30)?,
            slot_granularity,
            staff_signup_code,
        })
    }

    /// `host:port` to bind.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
