//! Status route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// GET /api/status — reachability, model, and session state at a glance.
/// `online` is informational only; chat is never gated on it.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let online = tokio::task::spawn_blocking(docsage_chat::is_connected)
        .await
        .unwrap_or(false);

    Json(serde_json::json!({
        "online": online,
        "model": state.llm.model(),
        "documentLoaded": state.session.read().content.is_some(),
        "ocrAvailable": docsage_extract::ocr::is_available(),
    }))
}
