//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{Locality, POSTAL_CODE_LEN, PostalCode, TemperatureTriple};
pub use errors::{DomainError, Upstream};
