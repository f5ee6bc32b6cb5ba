use anyhow::anyhow;
use std::env;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment-driven configuration for the dashboard core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the attendance REST API, without a trailing slash.
    pub api_base_url: String,
    /// Bound on every network call; an elapsed timeout is surfaced as a
    /// network error, never left pending.
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("DASHBOARD_API_BASE_URL")
            .map_err(|_| anyhow!("DASHBOARD_API_BASE_URL must be set"))?;

        let request_timeout_secs = env::var("DASHBOARD_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Config {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout_secs,
        })
    }

    /// Configuration with an explicit base URL and the default timeout.
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Config {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
