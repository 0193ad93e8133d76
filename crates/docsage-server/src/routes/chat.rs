//! Chat routes — question answering over the current document.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use docsage_store::ConversationTurn;

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(ask))
        .route("/chat/history", get(history))
}

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
}

/// POST /api/chat — ask one question with the session content as context.
/// The answer (or the inline `[LLM Error: …]` string) is appended to the
/// session history either way.
async fn ask(State(state): State<Arc<AppState>>, Json(req): Json<ChatRequest>) -> Response {
    let Some(context) = state.session.read().content.clone() else {
        return error_response(StatusCode::BAD_REQUEST, "no document loaded");
    };

    let answer = state.llm.ask(&req.message, &context).await;

    let turn = ConversationTurn {
        question: req.message,
        answer,
    };
    state.session.write().history.push(turn.clone());

    Json(serde_json::json!({
        "question": turn.question,
        "answer": turn.answer,
    }))
    .into_response()
}

/// GET /api/chat/history — the session's turns in insertion order.
async fn history(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let session = state.session.read();
    Json(serde_json::json!({ "turns": session.history }))
}
