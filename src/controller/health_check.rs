use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router {
    Router::new().route("/health", get(get_health_check))
}

/// Liveness probe for the load balancer
async fn get_health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": env!("CARGO_PKG_NAME") })))
}
