use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domains::session::Viewport;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub overpass_url: String,
    /// Advisory `[timeout:N]` written into every query.
    pub overpass_query_timeout_secs: u32,
    /// Local HTTP timeout. Unset means wait for the server.
    pub overpass_http_timeout: Option<Duration>,
    pub default_city: String,
    pub default_viewport: Viewport,
    /// Idle time after which a session expires.
    pub session_ttl: chrono::Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Viewport::default();

        Ok(Self {
            port: parse_or("PORT", 8080)?,
            overpass_url: env::var("OVERPASS_URL")
                .unwrap_or_else(|_| overpass_client::DEFAULT_ENDPOINT.to_string()),
            overpass_query_timeout_secs: parse_or(
                "OVERPASS_QUERY_TIMEOUT_SECS",
                overpass_client::DEFAULT_QUERY_TIMEOUT_SECS,
            )?,
            overpass_http_timeout: env::var("OVERPASS_HTTP_TIMEOUT_SECS")
                .ok()
                .map(|v| {
                    v.parse::<u64>()
                        .context("OVERPASS_HTTP_TIMEOUT_SECS must be a whole number of seconds")
                })
                .transpose()?
                .map(Duration::from_secs),
            default_city: env::var("DEFAULT_CITY").unwrap_or_else(|_| "Boston".to_string()),
            default_viewport: Viewport::new(
                parse_or("DEFAULT_CENTER_LAT", defaults.center.lat)?,
                parse_or("DEFAULT_CENTER_LON", defaults.center.lon)?,
                parse_or("DEFAULT_ZOOM", defaults.zoom)?,
            ),
            session_ttl: session_ttl(parse_or("SESSION_TTL_HOURS", 24)?)
                .context("Invalid SESSION_TTL_HOURS")?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or_default(),
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}

fn session_ttl(hours: i64) -> Result<chrono::Duration> {
    if hours <= 0 {
        bail!("session TTL must be a positive number of hours, got {}", hours);
    }
    chrono::Duration::try_hours(hours)
        .with_context(|| format!("session TTL of {} hours is out of range", hours))
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
