//! Infrastructure adapters. Implement ports.
//!
//! Inbound HTTP, outbound postal lookup and weather. Map errors to DomainError.

pub mod postal;
pub mod rest;
pub mod weather;
