//! Persisted session log for DocSage.
//!
//! Saved entries are append-only: once written, a row is never updated or
//! deleted. The backend is a flat CSV table behind the [`EntryStore`] trait.

pub mod entry;
pub mod log;

pub use entry::{render_transcript, ConversationTurn, SavedEntry};
pub use log::{CsvEntryStore, EntryStore};
