//! Non-streaming Ollama chat client.

use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use crate::types::ChatMessage;

const SYSTEM_INSTRUCTION: &str = "Answer questions based on the given context.";

/// Client for an Ollama-compatible `/api/chat` endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask one question grounded in the extracted document content.
    ///
    /// Exactly one attempt, no retry. Any failure — connect, HTTP status,
    /// unexpected body — comes back as an `[LLM Error: …]` string instead of
    /// an error, so the answer slot in the conversation is always filled.
    pub async fn ask(&self, question: &str, context: &str) -> String {
        match self.chat(question, context).await {
            Ok(answer) => answer,
            Err(message) => {
                warn!(error = %message, "chat request failed");
                format!("[LLM Error: {message}]")
            }
        }
    }

    async fn chat(&self, question: &str, context: &str) -> Result<String, String> {
        let messages = build_messages(question, context);
        let body = json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
        });

        let url = format!("{}/api/chat", self.base_url);
        debug!(%url, model = %self.model, "sending chat request");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("{status}: {body}"));
        }

        let parsed: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
        parsed["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| "response has no message content".to_string())
    }
}

/// The fixed two-message exchange: system instruction plus a user message
/// embedding both context and question.
fn build_messages(question: &str, context: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(format!("Context: {context}\n\nQuestion: {question}")),
    ]
}
