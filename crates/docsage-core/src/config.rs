//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to all DocSage data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Uploaded documents directory (`data/uploads/`).
    pub uploads: PathBuf,
    /// Saved-entry log (`data/smart_doc_entries.csv`).
    pub entries_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            uploads: root.join("uploads"),
            entries_file: root.join("smart_doc_entries.csv"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.uploads)?;
        Ok(())
    }
}

/// Top-level DocSage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocSageConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Base URL of the Ollama-compatible chat endpoint.
    pub ollama_url: String,
    /// Model identifier sent with every chat request.
    pub model: String,
}

impl DocSageConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3009);

        let ollama_url = std::env::var("DOCSAGE_OLLAMA_URL")
            .unwrap_or_else(|_| "http://localhost:11434".to_string());

        let model = std::env::var("DOCSAGE_MODEL").unwrap_or_else(|_| "llama3".to_string());

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            ollama_url,
            model,
        })
    }
}
