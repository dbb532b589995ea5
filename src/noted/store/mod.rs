//! # Storage Layer
//!
//! Persistence is split in two:
//!
//! - [`NoteBackend`]: where the serialized collection lives. It only knows how to
//!   read and write the whole array of notes.
//! - [`NoteStore`]: the authoritative in-memory collection. It assigns ids,
//!   answers queries and writes the full collection back through its backend
//!   after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: Production storage, a single JSON array on disk
//!   (`notes.json` by default). Writes go to a temp file that is renamed over
//!   the target.
//! - [`memory::MemBackend`]: In-memory storage for testing, with write-error
//!   simulation.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {"id": 1, "title": "A", "body": "b1", "timestamp": "2024-01-01 10:00:00"},
//!   {"id": 2, "title": "B", "body": "b2", "timestamp": "2024-01-02 09:00:00"}
//! ]
//! ```
//!
//! Array order is insertion order. Field order inside a record is not significant.

use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;
mod note_store;

pub use note_store::NoteStore;

/// Abstract interface for the persisted note collection.
pub trait NoteBackend {
    /// Read every stored note in insertion order.
    ///
    /// A backend with nothing stored yet returns an empty vector.
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Replace the stored collection with `notes`.
    fn save_notes(&self, notes: &[Note]) -> Result<()>;
}
