//! WeatherAPI adapter. Implements WeatherFetcher via `GET {base}?key=..&q=..`.

use crate::domain::{DomainError, Upstream};
use crate::ports::WeatherFetcher;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_WEATHERAPI_URL: &str = "http://api.weatherapi.com/v1/current.json";

/// WeatherAPI rejects requests without a browser-like User-Agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// WeatherAPI current-conditions client.
pub struct WeatherApiAdapter {
    client: Arc<Client>,
    base_url: Url,
    api_key: String,
    user_agent: String,
}

impl WeatherApiAdapter {
    /// Create a new WeatherAPI adapter.
    ///
    /// # Arguments
    /// * `base_url` - Current-conditions endpoint, without query string
    /// * `api_key` - WeatherAPI key; sent as the `key` query parameter, never logged
    /// * `user_agent` - Value for the `User-Agent` header (must be non-empty)
    pub fn new(client: Arc<Client>, base_url: Url, api_key: String, user_agent: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            user_agent,
        }
    }

    fn request_url(&self, encoded_locality: &str) -> Url {
        let key: String = url::form_urlencoded::byte_serialize(self.api_key.as_bytes()).collect();
        let mut url = self.base_url.clone();
        url.set_query(Some(&format!("key={key}&q={encoded_locality}")));
        url
    }

    fn parse_body(body: &[u8]) -> Result<f64, DomainError> {
        let parsed: WeatherApiResponse = serde_json::from_slice(body)
            .map_err(|e| DomainError::malformed(Upstream::Weather, e))?;
        Ok(parsed.current.temp_c)
    }
}

/// WeatherAPI `current.json` response, reduced to what we read.
#[derive(Deserialize)]
struct WeatherApiResponse {
    current: CurrentConditions,
}

#[derive(Deserialize)]
struct CurrentConditions {
    temp_c: f64,
}

#[async_trait::async_trait]
impl WeatherFetcher for WeatherApiAdapter {
    async fn current_celsius(&self, encoded_locality: &str) -> Result<f64, DomainError> {
        debug!(q = %encoded_locality, "querying weather");

        // without_url(): the URL carries the API key.
        let res = self
            .client
            .get(self.request_url(encoded_locality))
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| DomainError::unreachable(Upstream::Weather, e.without_url()))?;

        if !res.status().is_success() {
            let status = res.status();
            warn!(status = %status, q = %encoded_locality, "weather API returned error");
            return Err(DomainError::UpstreamError {
                service: Upstream::Weather,
                status: status.as_u16(),
            });
        }

        let body = res
            .bytes()
            .await
            .map_err(|e| DomainError::unreachable(Upstream::Weather, e.without_url()))?;

        let celsius = Self::parse_body(&body)?;
        debug!(temp_c = celsius, "weather fetched");
        Ok(celsius)
    }
}
