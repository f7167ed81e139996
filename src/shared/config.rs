//! Application configuration. API credentials, upstream endpoints, server address.

use crate::adapters::postal::DEFAULT_VIACEP_URL;
use crate::adapters::weather::{DEFAULT_USER_AGENT, DEFAULT_WEATHERAPI_URL};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Per-call timeout for upstream requests.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// WeatherAPI key. Read from CEP_WEATHER_WEATHER_API_KEY or WEATHER_API_KEY. No default.
    #[serde(default)]
    pub weather_api_key: Option<String>,

    /// Listen address. Read from CEP_WEATHER_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// Postal lookup base URL; `/{code}/json/` is appended. Read from CEP_WEATHER_POSTAL_API_URL.
    #[serde(default)]
    pub postal_api_url: Option<String>,

    /// Weather current-conditions endpoint. Read from CEP_WEATHER_WEATHER_API_URL.
    #[serde(default)]
    pub weather_api_url: Option<String>,

    /// Upstream request timeout in seconds. Read from CEP_WEATHER_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// User-Agent sent to the weather upstream. Read from CEP_WEATHER_USER_AGENT.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CEP_WEATHER"));
        if let Ok(path) = std::env::var("CEP_WEATHER_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // WEATHER_API_KEY is read directly (no prefix) as a fallback
        if cfg.weather_api_key.is_none() {
            cfg.weather_api_key = std::env::var("WEATHER_API_KEY").ok();
        }
        Ok(cfg)
    }

    /// Returns the API key, or an error if it is unset or blank.
    pub fn weather_api_key(&self) -> Result<String, config::ConfigError> {
        self.weather_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                config::ConfigError::NotFound(
                    "weather_api_key (set CEP_WEATHER_WEATHER_API_KEY or WEATHER_API_KEY)".into(),
                )
            })
    }

    /// Returns the listen address. Defaults to 0.0.0.0:8080.
    pub fn bind_addr(&self) -> Result<SocketAddr, config::ConfigError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|e| config::ConfigError::Message(format!("invalid bind_addr {raw:?}: {e}")))
    }

    /// Returns the postal lookup base URL. Defaults to ViaCEP.
    pub fn postal_api_url(&self) -> Result<Url, config::ConfigError> {
        parse_url(
            "postal_api_url",
            self.postal_api_url.as_deref().unwrap_or(DEFAULT_VIACEP_URL),
        )
    }

    /// Returns the weather endpoint. Defaults to WeatherAPI current.json.
    pub fn weather_api_url(&self) -> Result<Url, config::ConfigError> {
        parse_url(
            "weather_api_url",
            self.weather_api_url
                .as_deref()
                .unwrap_or(DEFAULT_WEATHERAPI_URL),
        )
    }

    /// Returns the upstream timeout. Defaults to 10 seconds; 0 is treated as unset.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Returns the weather User-Agent. Blank values fall back to the browser default.
    pub fn user_agent_or_default(&self) -> String {
        self.user_agent
            .as_deref()
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
            .unwrap_or(DEFAULT_USER_AGENT)
            .to_string()
    }
}

fn parse_url(field: &str, raw: &str) -> Result<Url, config::ConfigError> {
    Url::parse(raw).map_err(|e| config::ConfigError::Message(format!("invalid {field} {raw:?}: {e}")))
}
