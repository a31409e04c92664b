//! Server-side configuration loaded from environment variables.

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Settings for talking to the marketplace REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST API, without a trailing slash.
    pub api_url: String,
    /// Bearer token sent with admin calls.
    pub api_token: Option<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim_end_matches('/').to_string();
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            anyhow::bail!("API_URL must be an http(s) URL, got {api_url:?}");
        }

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            api_token: lookup("API_TOKEN").filter(|t| !t.trim().is_empty()),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Load configuration once at startup.
pub fn init() -> Result<&'static Config> {
    let config = Config::from_env().context("Failed to load configuration")?;
    Ok(CONFIG.get_or_init(|| config))
}

/// The configuration loaded by [`init`], if any.
pub fn get() -> Option<&'static Config> {
    CONFIG.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.api_token, None);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
    }

    #[test]
    fn reads_all_settings() {
        let config = Config::from_lookup(lookup(&[
            ("API_URL", "https://api.market.example/v1/"),
            ("API_TOKEN", "svc-token"),
            ("REQUEST_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.market.example/v1");
        assert_eq!(config.api_token.as_deref(), Some("svc-token"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn blank_token_is_ignored() {
        let config = Config::from_lookup(lookup(&[("API_TOKEN", "  ")])).unwrap();
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("REQUEST_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[("API_URL", "localhost:8080")])).is_err());
    }
}
