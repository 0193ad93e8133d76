//! CSV-backed append-only store.

use std::fs::OpenOptions;
use std::path::PathBuf;

use docsage_core::{Error, Result};

use crate::entry::SavedEntry;

/// Append-only store for saved entries. Backends may be a flat file, an
/// embedded database, or anything else that can append and list rows.
pub trait EntryStore: Send + Sync {
    /// Append one entry. Existing rows are never rewritten.
    fn append(&self, entry: &SavedEntry) -> Result<()>;

    /// All entries in write order.
    fn load_all(&self) -> Result<Vec<SavedEntry>>;
}

/// Flat CSV table with columns `Extracted_Content, Chat_History`. The header
/// is written once when the file is created. No locking: concurrent writers
/// from a second process are last-writer-wins, an accepted limitation of the
/// single-user design target.
pub struct CsvEntryStore {
    path: PathBuf,
}

impl CsvEntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EntryStore for CsvEntryStore {
    fn append(&self, entry: &SavedEntry) -> Result<()> {
        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_new {
            writer
                .write_record(["Extracted_Content", "Chat_History"])
                .map_err(|e| Error::Store(format!("header write failed: {e}")))?;
        }
        writer
            .write_record([&entry.extracted_content, &entry.chat_history])
            .map_err(|e| Error::Store(format!("row write failed: {e}")))?;
        writer
            .flush()
            .map_err(|e| Error::Store(format!("flush failed: {e}")))?;

        tracing::info!(path = %self.path.display(), "entry appended");
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<SavedEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| Error::Store(format!("log open failed: {e}")))?;

        let mut entries = Vec::new();
        for row in reader.deserialize() {
            let entry: SavedEntry =
                row.map_err(|e| Error::Store(format!("log row parse failed: {e}")))?;
            entries.push(entry);
        }
        Ok(entries)
    }
}
