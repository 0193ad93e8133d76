//! Document routes — upload/extract and highlighted content.

use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/documents", post(upload_document))
        .route("/documents/content", get(get_content))
}

/// POST /api/documents — upload one file, extract its text, and make it the
/// session's current content. Conversation history survives a new upload.
async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("failed reading upload: {e}"),
                );
            }
        };

        // Keep a copy of the upload; extraction itself runs from memory.
        let safe_filename = sanitize_filename(&filename);
        let upload_path = state.config.data_paths.uploads.join(&safe_filename);
        if let Err(e) = std::fs::write(&upload_path, &bytes) {
            tracing::warn!(path = %upload_path.display(), error = %e, "failed saving upload copy");
        }

        // OCR and parsing are blocking work; keep it off the runtime.
        let extract_name = filename.clone();
        let result =
            tokio::task::spawn_blocking(move || {
                docsage_extract::extract_document(&extract_name, &bytes)
            })
            .await;

        return match result {
            Ok(Ok(content)) => {
                state.session.write().content = Some(content.clone());
                tracing::info!(filename, chars = content.len(), "document extracted");
                Json(serde_json::json!({
                    "filename": filename,
                    "content": content,
                }))
                .into_response()
            }
            Ok(Err(e)) => error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Err(e) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("extraction task failed: {e}"),
            ),
        };
    }

    error_response(StatusCode::BAD_REQUEST, "no file field in upload")
}

#[derive(Deserialize)]
struct ContentQuery {
    highlight: Option<String>,
}

/// GET /api/documents/content?highlight=word — the current session content,
/// with keyword highlighting when requested.
async fn get_content(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContentQuery>,
) -> Response {
    let session = state.session.read();
    let Some(content) = session.content.as_deref() else {
        return error_response(StatusCode::NOT_FOUND, "no document loaded");
    };

    let rendered = match query.highlight.as_deref() {
        Some(keyword) => docsage_extract::highlight(content, keyword),
        None => content.to_string(),
    };

    Json(serde_json::json!({ "content": rendered })).into_response()
}

fn sanitize_filename(name: &str) -> String {
    let name = name.replace('/', "").replace('\\', "").replace("..", "");

    std::path::Path::new(&name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string()
}
