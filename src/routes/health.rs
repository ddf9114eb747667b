use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health() -> Json<Value> {
    info!("GET /health - Health check");
    Json(json!({ "status": "ok", "timestamp": Utc::now() }))
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Stock Registry API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "stocks": "/api/stocks",
            "health": "/health"
        }
    }))
}
