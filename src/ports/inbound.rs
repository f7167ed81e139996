//! Inbound port. The HTTP adapter calls into the application.

use crate::domain::{DomainError, TemperatureTriple};

/// Temperature lookup by postal code.
#[async_trait::async_trait]
pub trait TemperatureQuery: Send + Sync {
    /// Validate `raw_code`, resolve its locality and fetch the current temperature.
    ///
    /// `raw_code` is the path segment as received and may be percent-encoded.
    async fn temperature_for(&self, raw_code: &str) -> Result<TemperatureTriple, DomainError>;
}
