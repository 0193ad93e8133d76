//! Shared application state.

use docsage_chat::OllamaClient;
use docsage_core::DocSageConfig;
use docsage_store::{ConversationTurn, CsvEntryStore, EntryStore};
use parking_lot::RwLock;

/// The interactive session: current document content plus conversation
/// history. Lives in memory only; cleared by process restart, persisted only
/// through an explicit save.
#[derive(Default)]
pub struct SessionContext {
    pub content: Option<String>,
    pub history: Vec<ConversationTurn>,
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: DocSageConfig,
    pub llm: OllamaClient,
    pub entries: Box<dyn EntryStore>,
    pub session: RwLock<SessionContext>,
}

impl AppState {
    pub fn new(config: DocSageConfig) -> Self {
        let llm = OllamaClient::new(config.ollama_url.clone(), config.model.clone());
        let entries = Box::new(CsvEntryStore::new(config.data_paths.entries_file.clone()));
        Self {
            config,
            llm,
            entries,
            session: RwLock::new(SessionContext::default()),
        }
    }
}
