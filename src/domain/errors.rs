//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these; the HTTP adapter maps them to
//! status codes.

use std::fmt;
use thiserror::Error;

/// Third-party service the pipeline depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    PostalLookup,
    Weather,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::PostalLookup => f.write_str("postal lookup"),
            Upstream::Weather => f.write_str("weather"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    /// Postal code segment is not exactly 8 bytes of UTF-8.
    #[error("invalid postal code ({len} bytes)")]
    InvalidInput { len: usize },

    /// Postal lookup confirmed there is no such code.
    #[error("postal code not found: {0}")]
    NotFound(String),

    #[error("{service} service unreachable: {reason}")]
    UpstreamUnreachable { service: Upstream, reason: String },

    #[error("{service} service returned a malformed response: {reason}")]
    UpstreamMalformedResponse { service: Upstream, reason: String },

    /// Upstream answered, but with a non-success status.
    #[error("{service} service responded with status {status}")]
    UpstreamError { service: Upstream, status: u16 },
}

impl DomainError {
    pub fn unreachable(service: Upstream, reason: impl fmt::Display) -> Self {
        DomainError::UpstreamUnreachable {
            service,
            reason: reason.to_string(),
        }
    }

    pub fn malformed(service: Upstream, reason: impl fmt::Display) -> Self {
        DomainError::UpstreamMalformedResponse {
            service,
            reason: reason.to_string(),
        }
    }
}
