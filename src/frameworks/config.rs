use std::time::Duration;
use std::{env, fmt};

use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.hostaway.com/v1";
const DEFAULT_TIMEOUT_SECS: f64 = 60.0;
const DEFAULT_CONNECT_TIMEOUT_SECS: f64 = 10.0;

// Immutable process-wide settings, loaded once at startup and passed into
// the components that need them.
#[derive(Clone, Debug)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

// Malformed configuration is startup-fatal, never recovered at runtime.
#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl { value: String, reason: String },
    InvalidDuration { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { value, reason } => {
                write!(f, "BASE_URL {value:?} is not a valid URL: {reason}")
            }
            ConfigError::InvalidDuration { name, value } => {
                write!(f, "{name} {value:?} is not a valid number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Settings {
    // Read settings from the environment, applying the documented defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|err| ConfigError::InvalidBaseUrl {
            value: base_url.clone(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            base_url,
            timeout: parse_duration("TIMEOUT", env::var("TIMEOUT").ok(), DEFAULT_TIMEOUT_SECS)?,
            connect_timeout: parse_duration(
                "CONNECT_TIMEOUT",
                env::var("CONNECT_TIMEOUT").ok(),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }
}

fn parse_duration(
    name: &'static str,
    raw: Option<String>,
    default_secs: f64,
) -> Result<Duration, ConfigError> {
    let Some(value) = raw else {
        return Ok(Duration::from_secs_f64(default_secs));
    };

    let secs = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .ok_or(ConfigError::InvalidDuration { name, value })?;

    Ok(Duration::from_secs_f64(secs))
}

// HTTP port for the inbound listener.
pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8000)
}
