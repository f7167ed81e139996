use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::ports::TemperatureQuery;

pub const CEP_PREFIX: &str = "/cep";

/// Shared handler state. Holds only the inbound port; no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub query: Arc<dyn TemperatureQuery>,
}

/// Build the service router.
///
/// A request dropped by the client drops the handler future and with it any
/// in-flight upstream call.
pub fn router(query: Arc<dyn TemperatureQuery>) -> Router {
    Router::new()
        .route("/cep", get(handlers::get_temperature))
        .route("/cep/", get(handlers::get_temperature))
        .route("/cep/{*code}", get(handlers::get_temperature))
        .with_state(AppState { query })
        .layer(TraceLayer::new_for_http())
}
