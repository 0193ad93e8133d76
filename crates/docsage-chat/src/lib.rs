//! Question answering over extracted document content.
//!
//! One-shot, non-streaming calls to an Ollama-compatible chat endpoint.
//! Failures never surface as errors: the caller gets an inline
//! `[LLM Error: …]` string it can display like any other answer.

pub mod client;
pub mod net;
pub mod types;

pub use client::OllamaClient;
pub use net::is_connected;
pub use types::ChatMessage;
