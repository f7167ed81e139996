//! ViaCEP adapter. Implements LocalityResolver via `GET {base}/{code}/json/`.

use crate::domain::{DomainError, Locality, PostalCode, Upstream};
use crate::ports::LocalityResolver;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_VIACEP_URL: &str = "https://viacep.com.br/ws";

/// ViaCEP postal lookup.
///
/// The HTTP status is not inspected: ViaCEP answers unknown codes with `200` and
/// `{"erro": true}`, and anything it cannot answer shows up as an undecodable body.
pub struct ViaCepAdapter {
    client: Arc<Client>,
    base_url: Url,
}

impl ViaCepAdapter {
    pub fn new(client: Arc<Client>, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn lookup_url(&self, code: &PostalCode) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                DomainError::unreachable(
                    Upstream::PostalLookup,
                    format!("base url {} cannot carry a path", self.base_url),
                )
            })?;
            segments
                .pop_if_empty()
                .push(code.as_str())
                .push("json")
                .push("");
        }
        Ok(url)
    }

    fn parse_body(code: &PostalCode, body: &[u8]) -> Result<Locality, DomainError> {
        let parsed: ViaCepResponse = serde_json::from_slice(body)
            .map_err(|e| DomainError::malformed(Upstream::PostalLookup, e))?;

        if parsed.erro.as_ref().is_some_and(ErroFlag::is_set) {
            return Err(DomainError::NotFound(code.to_string()));
        }

        parsed
            .localidade
            .and_then(Locality::new)
            .ok_or_else(|| DomainError::malformed(Upstream::PostalLookup, "missing localidade"))
    }
}

/// ViaCEP response. Only the fields we use; the rest are ignored.
#[derive(Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    localidade: Option<String>,
    #[serde(default)]
    erro: Option<ErroFlag>,
}

/// ViaCEP has sent `erro` both as a boolean and as the string `"true"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErroFlag {
    Bool(bool),
    Text(String),
}

impl ErroFlag {
    fn is_set(&self) -> bool {
        match self {
            ErroFlag::Bool(b) => *b,
            ErroFlag::Text(s) => s.eq_ignore_ascii_case("true"),
        }
    }
}

#[async_trait::async_trait]
impl LocalityResolver for ViaCepAdapter {
    async fn resolve(&self, code: &PostalCode) -> Result<Locality, DomainError> {
        let url = self.lookup_url(code)?;
        debug!(%code, %url, "querying postal lookup");

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::unreachable(Upstream::PostalLookup, e))?;

        // Reading to the end (or dropping `res` on error) hands the connection back.
        let body = res
            .bytes()
            .await
            .map_err(|e| DomainError::unreachable(Upstream::PostalLookup, e))?;

        let locality = Self::parse_body(code, &body)?;
        info!(%code, %locality, "postal code resolved");
        Ok(locality)
    }
}
