//! Postal lookup adapters. Implement LocalityResolver.

pub mod viacep;

pub use viacep::{DEFAULT_VIACEP_URL, ViaCepAdapter};
