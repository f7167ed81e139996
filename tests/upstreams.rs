#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests: router + real adapters against mocked upstreams.

mod common;

use axum::http::{StatusCode, header};
use cep_weather::adapters::weather::DEFAULT_USER_AGENT;
use common::{WEATHER_KEY, full_stack, get};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

/// Exact User-Agent match. The stock header matcher splits values on commas.
struct BrowserUserAgent;

impl Match for BrowserUserAgent {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            == Some(DEFAULT_USER_AGENT)
    }
}

async fn mount_locality(server: &MockServer, code: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/ws/{code}/json/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_weather(server: &MockServer, q: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", WEATHER_KEY))
        .and(query_param("q", q))
        .and(BrowserUserAgent)
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

async fn forbid_any_request(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_resolves_and_converts() {
    let postal = MockServer::start().await;
    let weather = MockServer::start().await;
    mount_locality(
        &postal,
        "09812480",
        json!({"cep": "09812-480", "localidade": "Santos", "uf": "SP", "erro": false}),
    )
    .await;
    mount_weather(
        &weather,
        "Santos",
        ResponseTemplate::new(200).set_body_json(json!({"current": {"temp_c": 28.5}})),
    )
    .await;
    let app = full_stack(&postal.uri(), &weather.uri(), TIMEOUT);

    let res = get(&app, "/cep/09812480").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        res.body.trim(),
        r#"{"temp_C":28.5,"temp_F":83.3,"temp_K":301.65}"#
    );
    assert!(res.body.ends_with("}\n"));
}

#[tokio::test]
async fn test_accented_locality_reaches_weather_intact() {
    let postal = MockServer::start().await;
    let weather = MockServer::start().await;
    mount_locality(&postal, "01001000", json!({"localidade": "São Paulo"})).await;
    // query_param compares the decoded value
    mount_weather(
        &weather,
        "São Paulo",
        ResponseTemplate::new(200).set_body_json(json!({"current": {"temp_c": 21.0}})),
    )
    .await;
    let app = full_stack(&postal.uri(), &weather.uri(), TIMEOUT);

    let res = get(&app, "/cep/01001000").await;

    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_code_is_404() {
    let postal = MockServer::start().await;
    let weather = MockServer::start().await;
    mount_locality(&postal, "99999999", json!({"erro": "true"})).await;
    forbid_any_request(&weather).await;
    let app = full_stack(&postal.uri(), &weather.uri(), TIMEOUT);

    let res = get(&app, "/cep/99999999").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body.trim(), "can not find zipcode");
}

#[tokio::test]
async fn test_invalid_code_never_leaves_the_service() {
    let postal = MockServer::start().await;
    let weather = MockServer::start().await;
    forbid_any_request(&postal).await;
    forbid_any_request(&weather).await;
    let app = full_stack(&postal.uri(), &weather.uri(), TIMEOUT);

    for uri in ["/cep/123", "/cep/123456789"] {
        let res = get(&app, uri).await;
        assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(res.body.trim(), "invalid zipcode");
    }
}

#[tokio::test]
async fn test_postal_unreachable_is_500() {
    let weather = MockServer::start().await;
    forbid_any_request(&weather).await;
    // Nothing listens on port 1.
    let app = full_stack("http://127.0.0.1:1", &weather.uri(), TIMEOUT);

    let res = get(&app, "/cep/09812480").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body.trim(), "internal server error");
}

#[tokio::test]
async fn test_postal_garbage_is_500() {
    let postal = MockServer::start().await;
    let weather = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string("<h1>Bad Request</h1>"))
        .mount(&postal)
        .await;
    forbid_any_request(&weather).await;
    let app = full_stack(&postal.uri(), &weather.uri(), TIMEOUT);

    let res = get(&app, "/cep/0000000x").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body.trim(), "internal server error");
}

#[tokio::test]
async fn test_weather_forbidden_is_424() {
    let postal = MockServer::start().await;
    let weather = MockServer::start().await;
    mount_locality(&postal, "09812480", json!({"localidade": "Santos"})).await;
    mount_weather(
        &weather,
        "Santos",
        ResponseTemplate::new(403)
            .set_body_json(json!({"error": {"code": 2008, "message": "API key disabled"}})),
    )
    .await;
    let app = full_stack(&postal.uri(), &weather.uri(), TIMEOUT);

    let res = get(&app, "/cep/09812480").await;

    assert_eq!(res.status, StatusCode::FAILED_DEPENDENCY);
    assert_eq!(res.body.trim(), "weather API error");
}

#[tokio::test]
async fn test_weather_garbage_is_500() {
    let postal = MockServer::start().await;
    let weather = MockServer::start().await;
    mount_locality(&postal, "09812480", json!({"localidade": "Santos"})).await;
    mount_weather(
        &weather,
        "Santos",
        ResponseTemplate::new(200).set_body_json(json!({"current": {"condition": "Sunny"}})),
    )
    .await;
    let app = full_stack(&postal.uri(), &weather.uri(), TIMEOUT);

    let res = get(&app, "/cep/09812480").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body.trim(), "internal server error");
}

#[tokio::test]
async fn test_slow_weather_times_out_as_500() {
    let postal = MockServer::start().await;
    let weather = MockServer::start().await;
    mount_locality(&postal, "09812480", json!({"localidade": "Santos"})).await;
    mount_weather(
        &weather,
        "Santos",
        ResponseTemplate::new(200)
            .set_body_json(json!({"current": {"temp_c": 28.5}}))
            .set_delay(Duration::from_secs(3)),
    )
    .await;
    let app = full_stack(&postal.uri(), &weather.uri(), Duration::from_millis(300));

    let res = get(&app, "/cep/09812480").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
}
