//! Axum router wiring for the conversion API.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{error, info};
use unitconv_common::ConversionRequest;
use unitconv_engine::ConversionKind;

use crate::state::AppState;

const SERVICE_NAME: &str = "Unit Converter API";
const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/convert/length", post(convert_length))
        .route("/convert/weight", post(convert_weight))
        .route("/convert/temperature", post(convert_temperature))
        .route("/convert/currency", post(convert_currency))
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "health": "/health",
        "metrics": "/metrics",
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "version": SERVICE_VERSION,
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics().to_prometheus()
}

async fn convert_length(
    State(state): State<AppState>,
    Json(request): Json<ConversionRequest>,
) -> Response {
    convert(state, ConversionKind::Length, request).await
}

async fn convert_weight(
    State(state): State<AppState>,
    Json(request): Json<ConversionRequest>,
) -> Response {
    convert(state, ConversionKind::Weight, request).await
}

async fn convert_temperature(
    State(state): State<AppState>,
    Json(request): Json<ConversionRequest>,
) -> Response {
    convert(state, ConversionKind::Temperature, request).await
}

async fn convert_currency(
    State(state): State<AppState>,
    Json(request): Json<ConversionRequest>,
) -> Response {
    convert(state, ConversionKind::Currency, request).await
}

/// Shared handler body: dispatch, record metrics, map failures onto
/// the client/server status split.
async fn convert(state: AppState, kind: ConversionKind, request: ConversionRequest) -> Response {
    let dispatched = state.dispatcher().convert(kind, &request).await;
    state
        .metrics()
        .track(kind.as_str(), dispatched.elapsed, dispatched.is_success());

    match dispatched.result {
        Ok(result) => {
            info!(
                kind = %kind,
                value = request.value,
                converted = result.converted_value,
                from_unit = %request.from_unit,
                to_unit = %request.to_unit,
                elapsed_micros = dispatched.elapsed.as_micros() as u64,
                "Conversion completed"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => {
            error!(kind = %kind, error = %e, "Conversion failed");
            let status = if e.is_client_fault() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::BAD_GATEWAY
            };
            (status, Json(json!({ "detail": e.to_string() }))).into_response()
        }
    }
}
