use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use super::error::{domain_error_to_response, internal_error};
use super::routes::{AppState, CEP_PREFIX};
use crate::domain::TemperatureTriple;

/// `GET /cep`, `GET /cep/` and `GET /cep/{*code}`: everything after the prefix is the
/// candidate code.
///
/// The raw (still percent-encoded) path is used so that undecodable bytes reach
/// validation instead of failing extraction.
pub async fn get_temperature(State(state): State<AppState>, uri: Uri) -> Response {
    let rest = uri.path().strip_prefix(CEP_PREFIX).unwrap_or_default();
    let code = clean_segment(rest);
    match state.query.temperature_for(&code).await {
        Ok(triple) => temperature_response(&triple),
        Err(e) => domain_error_to_response(&e),
    }
}

/// Collapses runs of `/` and drops the leading one: `//1234567` -> `1234567`.
fn clean_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '/' && (out.is_empty() || out.ends_with('/')) {
            continue;
        }
        out.push(c);
    }
    out
}

/// JSON body followed by exactly one newline.
fn temperature_response(triple: &TemperatureTriple) -> Response {
    let mut body = match serde_json::to_vec(triple) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize temperature");
            return internal_error();
        }
    };
    body.push(b'\n');

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
