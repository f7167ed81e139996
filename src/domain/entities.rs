//! Domain entities. Per-request value objects; nothing here outlives a request.
//!
//! No HTTP/upstream types here — adapters map their payloads into these.

use super::errors::DomainError;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::fmt;

/// Required length of a postal code (CEP), in bytes.
pub const POSTAL_CODE_LEN: usize = 8;

/// A postal code that passed local validation.
///
/// Only the length is checked. Content is left to the postal lookup service,
/// so `"abcdefgh"` is forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    /// `raw` may still be percent-encoded; the length is measured on the decoded bytes.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let bytes: Vec<u8> = percent_decode_str(raw).collect();
        if bytes.len() != POSTAL_CODE_LEN {
            return Err(DomainError::InvalidInput { len: bytes.len() });
        }
        // Eight bytes that are not UTF-8 cannot be put in the lookup URL.
        String::from_utf8(bytes)
            .map(Self)
            .map_err(|_| DomainError::InvalidInput {
                len: POSTAL_CODE_LEN,
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// City/place name returned by the postal lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locality(String);

impl Locality {
    /// Returns `None` for blank names.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Query-component encoding of the name (space becomes `+`, non-ASCII is
    /// percent-escaped as UTF-8), ready to embed in a URL query string.
    pub fn encoded(&self) -> String {
        url::form_urlencoded::byte_serialize(self.0.as_bytes()).collect()
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Temperature in the three units returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureTriple {
    #[serde(rename = "temp_C")]
    pub celsius: f64,
    #[serde(rename = "temp_F")]
    pub fahrenheit: f64,
    #[serde(rename = "temp_K")]
    pub kelvin: f64,
}

impl TemperatureTriple {
    /// F = C*1.8+32 (single rounding, so 28.5 C gives exactly 83.3), K = C+273.15.
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: celsius.mul_add(1.8, 32.0),
            kelvin: celsius + 273.15,
        }
    }
}
