//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every noted operation, whichever UI drives it.
//!
//! It dispatches to `commands/*.rs` and returns structured `CmdResult`s. It
//! performs no I/O of its own beyond what the store does, and never formats
//! output.
//!
//! `NotesApi<B: NoteBackend>` is generic over the storage backend:
//! - Production: `NotesApi<FileBackend>`
//! - Testing: `NotesApi<MemBackend>`
//!
//! The facade owns one [`NoteStore`] for its whole lifetime. An interactive
//! session builds it once and keeps it; nothing reloads the store between
//! commands.
//!
//! [`config`] is a free function: it reads and writes `.noted.json` only, so
//! it works even when the notes file cannot be loaded.

use crate::commands;
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteBackend, NoteStore};
use std::path::Path;

pub struct NotesApi<B: NoteBackend> {
    store: NoteStore<B>,
}

impl<B: NoteBackend> NotesApi<B> {
    pub fn new(store: NoteStore<B>) -> Self {
        Self { store }
    }

    /// Open a store on `backend` and wrap it.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self::new(NoteStore::open(backend)?))
    }

    pub fn add_note(&mut self, title: String, body: String) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, body)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_note(&self, id: NoteId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn find_notes(&self, date: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, date)
    }

    pub fn edit_note(&mut self, id: NoteId, edit: &NoteEdit) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, edit)
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }
}

/// Show or change the settings in `config_dir`. Needs no store.
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::NoteEdit;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
