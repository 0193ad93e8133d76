//! Saved-entry routes — persist and list sessions.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use docsage_store::{render_transcript, SavedEntry};

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/entries", post(save_entry).get(list_entries))
}

/// POST /api/entries — append the current session (content + rendered
/// transcript) to the log.
async fn save_entry(State(state): State<Arc<AppState>>) -> Response {
    let entry = {
        let session = state.session.read();
        let Some(content) = session.content.clone() else {
            return error_response(StatusCode::BAD_REQUEST, "no document loaded");
        };
        SavedEntry {
            extracted_content: content,
            chat_history: render_transcript(&session.history),
        }
    };

    match state.entries.append(&entry) {
        Ok(()) => Json(serde_json::json!({ "saved": true })).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// GET /api/entries — all saved entries in write order.
async fn list_entries(State(state): State<Arc<AppState>>) -> Response {
    match state.entries.load_all() {
        Ok(entries) => {
            let rows: Vec<serde_json::Value> = entries
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "extractedContent": e.extracted_content,
                        "chatHistory": e.chat_history,
                    })
                })
                .collect();
            Json(serde_json::json!({ "entries": rows, "total": rows.len() })).into_response()
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
