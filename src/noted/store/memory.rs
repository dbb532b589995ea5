use super::NoteBackend;
use crate::error::{NotedError, Result};
use crate::model::Note;
use std::cell::{Cell, RefCell};

/// In-memory backend for testing.
///
/// Uses `RefCell` since noted is single-threaded, which lets the
/// `NoteBackend` trait take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    notes: RefCell<Vec<Note>>,
    save_count: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `notes`, as if a previous session saved them.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RefCell::new(notes),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Snapshot of what was last persisted.
    pub fn stored(&self) -> Vec<Note> {
        self.notes.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl NoteBackend for MemBackend {
    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.borrow().clone())
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(NotedError::Store("Simulated write error".to_string()));
        }
        *self.notes.borrow_mut() = notes.to_vec();
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
