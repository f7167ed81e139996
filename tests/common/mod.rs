#![allow(dead_code)]

//! Shared helpers for HTTP-level tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use cep_weather::adapters::postal::ViaCepAdapter;
use cep_weather::adapters::rest;
use cep_weather::adapters::weather::{DEFAULT_USER_AGENT, WeatherApiAdapter};
use cep_weather::usecases::TemperatureService;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt; // for oneshot
use url::Url;

pub const WEATHER_KEY: &str = "dummy-key";
pub const POSTAL_PATH: &str = "/ws";
pub const WEATHER_PATH: &str = "/v1/current.json";

/// Status, headers and body text of a response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).expect("body is not UTF-8"),
    }
}

/// Router wired to the real adapters, pointed at the given upstream roots.
pub fn full_stack(postal_root: &str, weather_root: &str, timeout: Duration) -> Router {
    let client = Arc::new(
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap(),
    );
    let resolver = ViaCepAdapter::new(
        Arc::clone(&client),
        Url::parse(&format!("{postal_root}{POSTAL_PATH}")).unwrap(),
    );
    let weather = WeatherApiAdapter::new(
        client,
        Url::parse(&format!("{weather_root}{WEATHER_PATH}")).unwrap(),
        WEATHER_KEY.to_string(),
        DEFAULT_USER_AGENT.to_string(),
    );
    rest::router(Arc::new(TemperatureService::new(
        Arc::new(resolver),
        Arc::new(weather),
    )))
}
