use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteBackend, NoteStore};

pub fn run<B: NoteBackend>(store: &NoteStore<B>) -> Result<CmdResult> {
    let notes = store.list().to_vec();
    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info("No notes found."));
    }
    Ok(result.with_listed_notes(notes))
}
