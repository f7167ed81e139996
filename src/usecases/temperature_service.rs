//! Main pipeline: validate code -> resolve locality -> fetch weather -> compose.
//!
//! - Stages run strictly in sequence; the weather call needs the locality
//! - The first failing stage ends the request, later stages never run
//! - No retries and no partial results

use crate::domain::{DomainError, PostalCode, TemperatureTriple};
use crate::ports::{LocalityResolver, TemperatureQuery, WeatherFetcher};
use std::sync::Arc;
use tracing::{debug, info};

/// Temperature service. Coordinates the postal lookup and weather upstreams.
pub struct TemperatureService {
    resolver: Arc<dyn LocalityResolver>,
    weather: Arc<dyn WeatherFetcher>,
}

impl TemperatureService {
    pub fn new(resolver: Arc<dyn LocalityResolver>, weather: Arc<dyn WeatherFetcher>) -> Self {
        Self { resolver, weather }
    }
}

#[async_trait::async_trait]
impl TemperatureQuery for TemperatureService {
    async fn temperature_for(&self, raw_code: &str) -> Result<TemperatureTriple, DomainError> {
        let code = PostalCode::parse(raw_code)?;

        let locality = self.resolver.resolve(&code).await?;
        debug!(%code, %locality, "locality resolved");

        let celsius = self.weather.current_celsius(&locality.encoded()).await?;
        let triple = TemperatureTriple::from_celsius(celsius);

        info!(
            %code,
            %locality,
            temp_c = triple.celsius,
            "temperature lookup complete"
        );
        Ok(triple)
    }
}
