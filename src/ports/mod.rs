//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the HTTP adapter into the application
//! - Outbound: Called by the application into upstream services

pub mod inbound;
pub mod outbound;

pub use inbound::TemperatureQuery;
pub use outbound::{LocalityResolver, WeatherFetcher};
