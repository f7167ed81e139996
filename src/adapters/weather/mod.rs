//! Weather adapters. Implement WeatherFetcher.

pub mod weatherapi;

pub use weatherapi::{DEFAULT_USER_AGENT, DEFAULT_WEATHERAPI_URL, WeatherApiAdapter};
