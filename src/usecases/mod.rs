//! Application use cases. Orchestrate domain logic via ports.

pub mod temperature_service;

pub use temperature_service::TemperatureService;
