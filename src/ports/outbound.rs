//! Outbound ports. Application calls into upstream services.
//!
//! Implemented by adapters; tests substitute stubs.

use crate::domain::{DomainError, Locality, PostalCode};

/// Postal lookup: postal code -> locality name.
#[async_trait::async_trait]
pub trait LocalityResolver: Send + Sync {
    /// Returns `DomainError::NotFound` when the service reports no such code.
    async fn resolve(&self, code: &PostalCode) -> Result<Locality, DomainError>;
}

/// Current weather for a locality.
#[async_trait::async_trait]
pub trait WeatherFetcher: Send + Sync {
    /// Current temperature in Celsius.
    ///
    /// `encoded_locality` is already query-encoded (see `Locality::encoded`) and is
    /// embedded in the request URL verbatim.
    async fn current_celsius(&self, encoded_locality: &str) -> Result<f64, DomainError>;
}
