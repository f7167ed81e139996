//! Inbound HTTP adapter. Exposes TemperatureQuery as `GET /cep/{code}`.

pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::router;
